//! Belt kinematics and light barrier

use modcell_core::state::RotationState;
use modcell_core::traits::TranslationCommand;
use modcell_core::Direction;

/// Default distance from belt centre to either end (mm)
pub const DEFAULT_HALF_LENGTH_MM: u32 = 50;

/// Default belt speed (mm/s)
pub const DEFAULT_SPEED_MM_S: u32 = 100;

/// Default distance from belt centre the barrier still sees an item (mm)
pub const DEFAULT_BARRIER_HALF_WIDTH_MM: u32 = 5;

/// End of the belt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeltEnd {
    /// The end `Forward` runs toward
    Forward,
    Backward,
}

impl BeltEnd {
    /// Cell side this end faces at `rotation`
    pub fn side(self, rotation: RotationState) -> Direction {
        match (self, rotation) {
            (BeltEnd::Forward, RotationState::Rot0) => Direction::Right,
            (BeltEnd::Forward, RotationState::Rot90) => Direction::Bottom,
            (BeltEnd::Backward, RotationState::Rot0) => Direction::Left,
            (BeltEnd::Backward, RotationState::Rot90) => Direction::Top,
        }
    }

    /// End facing `side`, if the belt runs that way at `rotation`
    pub fn facing(side: Direction, rotation: RotationState) -> Option<Self> {
        [BeltEnd::Forward, BeltEnd::Backward]
            .into_iter()
            .find(|end| end.side(rotation) == side)
    }
}

/// Belt carrying at most one item
#[derive(Debug, Clone)]
pub struct Belt {
    /// Centre to end (µm)
    half_length_um: i32,
    /// Belt speed (mm/s)
    speed_mm_s: u32,
    /// Centre to barrier edge (µm)
    barrier_half_width_um: i32,
    /// Item position relative to centre (µm, positive toward the forward end)
    item_um: Option<i32>,
    command: TranslationCommand,
}

impl Default for Belt {
    fn default() -> Self {
        Self::new(
            DEFAULT_HALF_LENGTH_MM,
            DEFAULT_SPEED_MM_S,
            DEFAULT_BARRIER_HALF_WIDTH_MM,
        )
    }
}

impl Belt {
    pub fn new(half_length_mm: u32, speed_mm_s: u32, barrier_half_width_mm: u32) -> Self {
        Self {
            half_length_um: mm_to_um(half_length_mm),
            speed_mm_s,
            barrier_half_width_um: mm_to_um(barrier_half_width_mm),
            item_um: None,
            command: TranslationCommand::NoTranslation,
        }
    }

    pub fn set_command(&mut self, command: TranslationCommand) {
        self.command = command;
    }

    pub fn command(&self) -> TranslationCommand {
        self.command
    }

    pub fn is_running(&self) -> bool {
        self.command.is_active()
    }

    /// Put an item on the belt `offset_mm` from the centre
    pub fn place_item(&mut self, offset_mm: i32) {
        self.item_um = Some(offset_mm.saturating_mul(1000));
    }

    /// Put an item at one end of the belt
    pub fn load_at(&mut self, end: BeltEnd) {
        self.item_um = Some(match end {
            BeltEnd::Forward => self.half_length_um,
            BeltEnd::Backward => -self.half_length_um,
        });
    }

    pub fn has_item(&self) -> bool {
        self.item_um.is_some()
    }

    /// Item position relative to centre (µm)
    pub fn item_um(&self) -> Option<i32> {
        self.item_um
    }

    /// Barrier interrupted by the item
    pub fn light_barrier(&self) -> bool {
        self.item_um
            .is_some_and(|p| p.abs() <= self.barrier_half_width_um)
    }

    /// Move the item for `dt_ms`
    ///
    /// Returns the end an item fell off, if one did.
    pub fn advance(&mut self, dt_ms: u32) -> Option<BeltEnd> {
        let pos = self.item_um?;

        // mm/s × ms = µm
        let step = i32::try_from(self.speed_mm_s.saturating_mul(dt_ms)).unwrap_or(i32::MAX);
        let pos = pos.saturating_add(step.saturating_mul(self.command.signal().into()));

        if pos > self.half_length_um {
            self.item_um = None;
            Some(BeltEnd::Forward)
        } else if pos < -self.half_length_um {
            self.item_um = None;
            Some(BeltEnd::Backward)
        } else {
            self.item_um = Some(pos);
            None
        }
    }
}

fn mm_to_um(mm: u32) -> i32 {
    i32::try_from(mm.saturating_mul(1000)).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_sides() {
        assert_eq!(BeltEnd::Forward.side(RotationState::Rot0), Direction::Right);
        assert_eq!(BeltEnd::Forward.side(RotationState::Rot90), Direction::Bottom);
        assert_eq!(BeltEnd::Backward.side(RotationState::Rot0), Direction::Left);
        assert_eq!(BeltEnd::Backward.side(RotationState::Rot90), Direction::Top);
        assert_eq!(
            BeltEnd::facing(Direction::Top, RotationState::Rot90),
            Some(BeltEnd::Backward)
        );
        assert_eq!(BeltEnd::facing(Direction::Top, RotationState::Rot0), None);
    }

    #[test]
    fn test_item_reaches_barrier() {
        let mut belt = Belt::default();
        belt.load_at(BeltEnd::Backward);
        belt.set_command(TranslationCommand::Forward);
        assert!(!belt.light_barrier());

        // 45 mm at 100 mm/s
        for _ in 0..44 {
            assert_eq!(belt.advance(10), None);
            assert!(!belt.light_barrier());
        }
        belt.advance(10);
        assert!(belt.light_barrier());
    }

    #[test]
    fn test_item_falls_off() {
        let mut belt = Belt::default();
        belt.place_item(0);
        belt.set_command(TranslationCommand::Backward);

        let mut fell = None;
        for _ in 0..100 {
            fell = belt.advance(10);
            if fell.is_some() {
                break;
            }
        }
        assert_eq!(fell, Some(BeltEnd::Backward));
        assert!(!belt.has_item());
    }

    #[test]
    fn test_stopped_belt_holds_item() {
        let mut belt = Belt::default();
        belt.place_item(20);
        assert_eq!(belt.advance(10_000), None);
        assert_eq!(belt.item_um(), Some(20_000));
    }
}
