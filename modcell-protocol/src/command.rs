//! Command byte encoding
//!
//! Commands carry a skill and the side of the cell it applies to.

/// Highest valid command byte
pub const MAX_COMMAND: u8 = 7;

/// First command byte that selects [`Skill::ForwardTo`]
const FORWARD_BASE: u8 = 4;

/// Goal type of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Skill {
    /// Take an item in from the neighbor on the target side
    ReceiveFrom,
    /// Push the held item out to the neighbor on the target side
    ForwardTo,
}

impl Skill {
    /// The skill the neighbor must run for the same hand-over
    pub fn complement(self) -> Self {
        match self {
            Skill::ReceiveFrom => Skill::ForwardTo,
            Skill::ForwardTo => Skill::ReceiveFrom,
        }
    }

    /// Short name for diagnostics
    pub fn name(self) -> &'static str {
        match self {
            Skill::ReceiveFrom => "receive",
            Skill::ForwardTo => "forward",
        }
    }
}

/// Side of the cell an item enters or leaves through
///
/// Declared in wire order: `Left` is 1, `Bottom` is 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Left,
    Top,
    Right,
    Bottom,
}

impl Direction {
    /// All directions in wire order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
    ];

    /// Zero-based position in wire order
    pub fn index(self) -> u8 {
        match self {
            Direction::Left => 0,
            Direction::Top => 1,
            Direction::Right => 2,
            Direction::Bottom => 3,
        }
    }

    /// One-based wire value
    pub fn value(self) -> u8 {
        self.index() + 1
    }

    /// Side facing this one on a neighboring cell
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
        }
    }
}

/// Errors decoding a command byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Byte above [`MAX_COMMAND`]
    OutOfRange(u8),
}

/// A decoded command: what to do, and on which side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command {
    pub skill: Skill,
    pub direction: Direction,
}

impl Command {
    pub const fn new(skill: Skill, direction: Direction) -> Self {
        Self { skill, direction }
    }

    /// Parse a command from its wire format byte
    pub fn from_byte(byte: u8) -> Result<Self, CommandError> {
        if byte > MAX_COMMAND {
            return Err(CommandError::OutOfRange(byte));
        }
        let skill = if byte >= FORWARD_BASE {
            Skill::ForwardTo
        } else {
            Skill::ReceiveFrom
        };
        let direction = Direction::ALL[(byte % 4) as usize];
        Ok(Self { skill, direction })
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        let base = match self.skill {
            Skill::ReceiveFrom => 0,
            Skill::ForwardTo => FORWARD_BASE,
        };
        base + self.direction.index()
    }

    /// Command for the neighbor on `self.direction` that completes the
    /// same hand-over
    pub fn counterpart(self) -> Self {
        Self {
            skill: self.skill.complement(),
            direction: self.direction.opposite(),
        }
    }
}

impl TryFrom<u8> for Command {
    type Error = CommandError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Command::from_byte(byte)
    }
}

impl From<Command> for u8 {
    fn from(command: Command) -> u8 {
        command.to_byte()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decode_table() {
        use Direction::*;
        use Skill::*;

        let expected = [
            (ReceiveFrom, Left),
            (ReceiveFrom, Top),
            (ReceiveFrom, Right),
            (ReceiveFrom, Bottom),
            (ForwardTo, Left),
            (ForwardTo, Top),
            (ForwardTo, Right),
            (ForwardTo, Bottom),
        ];

        for (byte, (skill, direction)) in expected.into_iter().enumerate() {
            let cmd = Command::from_byte(byte as u8).unwrap();
            assert_eq!(cmd, Command::new(skill, direction), "byte {}", byte);
        }
    }

    #[test]
    fn test_boundary() {
        assert!(Command::from_byte(MAX_COMMAND).is_ok());
        assert_eq!(Command::from_byte(8), Err(CommandError::OutOfRange(8)));
        assert_eq!(Command::from_byte(10), Err(CommandError::OutOfRange(10)));
        assert_eq!(Command::from_byte(0xFF), Err(CommandError::OutOfRange(0xFF)));
    }

    #[test]
    fn test_direction_values() {
        assert_eq!(Direction::Left.value(), 1);
        assert_eq!(Direction::Top.value(), 2);
        assert_eq!(Direction::Right.value(), 3);
        assert_eq!(Direction::Bottom.value(), 4);
    }

    #[test]
    fn test_counterpart() {
        // Cell forwarding to its right hands over to a neighbor receiving from its left
        let forward = Command::from_byte(6).unwrap();
        let receive = forward.counterpart();
        assert_eq!(receive, Command::new(Skill::ReceiveFrom, Direction::Left));
        assert_eq!(receive.to_byte(), 0);
        assert_eq!(receive.counterpart(), forward);
    }

    #[test]
    fn test_try_from() {
        let cmd: Command = 5u8.try_into().unwrap();
        assert_eq!(cmd, Command::new(Skill::ForwardTo, Direction::Top));
        assert_eq!(u8::from(cmd), 5);
    }

    proptest! {
        #[test]
        fn decode_matches_index_arithmetic(byte in 0u8..=255) {
            match Command::from_byte(byte) {
                Ok(cmd) => {
                    prop_assert!(byte <= MAX_COMMAND);
                    prop_assert_eq!(cmd.skill == Skill::ForwardTo, byte >= 4);
                    prop_assert_eq!(cmd.direction.value(), byte % 4 + 1);
                    prop_assert_eq!(cmd.to_byte(), byte);
                }
                Err(CommandError::OutOfRange(b)) => {
                    prop_assert!(byte > MAX_COMMAND);
                    prop_assert_eq!(b, byte);
                }
            }
        }
    }
}
