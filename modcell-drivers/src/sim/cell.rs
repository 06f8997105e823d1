//! Simulated cell

use heapless::{Deque, String};
use modcell_core::state::RotationState;
use modcell_core::traits::{CellIo, LogLevel, RotationCommand, TranslationCommand};
use modcell_core::Direction;

use super::belt::{Belt, BeltEnd};
use super::turntable::{Turntable, DEFAULT_SPEED_DEG_S};

/// Serial buffer depth in each direction
pub const LINK_BUFFER: usize = 16;

/// Number of diagnostics kept
pub const LOG_DEPTH: usize = 32;

/// Longest diagnostic kept; longer ones are truncated
pub const LOG_LEN: usize = 48;

/// Cell whose mechanics and link are simulated in memory
#[derive(Debug, Clone)]
pub struct SimCell {
    pub turntable: Turntable,
    pub belt: Belt,
    inbox: Deque<u8, LINK_BUFFER>,
    outbox: Deque<u8, LINK_BUFFER>,
    logs: Deque<(LogLevel, String<LOG_LEN>), LOG_DEPTH>,
    /// Side the last item fell off, until collected
    departed: Option<Direction>,
    now_ms: u64,
}

impl SimCell {
    /// Create an empty cell resting at `position`
    pub fn new(position: RotationState) -> Self {
        Self {
            turntable: Turntable::new(position, DEFAULT_SPEED_DEG_S),
            belt: Belt::default(),
            inbox: Deque::new(),
            outbox: Deque::new(),
            logs: Deque::new(),
            departed: None,
            now_ms: 0,
        }
    }

    /// Let `dt_ms` of simulated time pass
    ///
    /// The belt only moves while the table rests on a stop.
    pub fn advance(&mut self, dt_ms: u32) {
        self.now_ms += u64::from(dt_ms);
        self.turntable.advance(dt_ms);

        let Some(rotation) = self.turntable.position() else {
            return;
        };
        if let Some(end) = self.belt.advance(dt_ms) {
            self.departed = Some(end.side(rotation));
        }
    }

    /// Queue a byte as if a neighbor had sent it
    ///
    /// Returns false if the receive buffer is full.
    pub fn deliver(&mut self, byte: u8) -> bool {
        self.inbox.push_back(byte).is_ok()
    }

    /// Oldest byte the cell has sent
    pub fn take_sent(&mut self) -> Option<u8> {
        self.outbox.pop_front()
    }

    /// Side the last item left through
    pub fn departed(&self) -> Option<Direction> {
        self.departed
    }

    pub fn take_departed(&mut self) -> Option<Direction> {
        self.departed.take()
    }

    /// Put an item on the belt end facing `side`
    ///
    /// Fails if the belt is loaded, the table is between stops, or the
    /// belt does not run toward `side`.
    pub fn accept_item(&mut self, side: Direction) -> bool {
        if self.belt.has_item() {
            return false;
        }
        let Some(end) = self
            .turntable
            .position()
            .and_then(|rotation| BeltEnd::facing(side, rotation))
        else {
            return false;
        };
        self.belt.load_at(end);
        true
    }

    /// Position the table rests at, if it is on a stop
    pub fn orientation(&self) -> Option<RotationState> {
        self.turntable.position()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Diagnostics, oldest first
    pub fn logs(&self) -> impl Iterator<Item = &(LogLevel, String<LOG_LEN>)> {
        self.logs.iter()
    }
}

impl CellIo for SimCell {
    fn light_barrier(&mut self) -> bool {
        self.belt.light_barrier()
    }

    fn home_limit_switch(&mut self) -> bool {
        self.turntable.is_home()
    }

    fn quarter_turn_limit_switch(&mut self) -> bool {
        self.turntable.is_quarter_turn()
    }

    fn drive_rotation(&mut self, command: RotationCommand) {
        self.turntable.set_command(command);
    }

    fn drive_translation(&mut self, command: TranslationCommand) {
        self.belt.set_command(command);
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.inbox.pop_front()
    }

    fn write_byte(&mut self, byte: u8) {
        // Full buffer drops the byte, like a UART overrun
        let _ = self.outbox.push_back(byte);
    }

    fn log(&mut self, level: LogLevel, message: &str) {
        let mut text: String<LOG_LEN> = String::new();
        for c in message.chars() {
            if text.push(c).is_err() {
                break;
            }
        }
        if self.logs.is_full() {
            self.logs.pop_front();
        }
        let _ = self.logs.push_back((level, text));
    }

    fn clock_millis(&mut self) -> u64 {
        self.now_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_switches_follow_table() {
        let mut cell = SimCell::new(RotationState::Rot0);
        assert!(cell.home_limit_switch());
        assert!(!cell.quarter_turn_limit_switch());

        cell.drive_rotation(RotationCommand::ClockWise);
        cell.advance(10);
        assert!(!cell.home_limit_switch());
        assert_eq!(cell.orientation(), None);

        cell.advance(5000);
        assert!(cell.quarter_turn_limit_switch());
        assert_eq!(cell.orientation(), Some(RotationState::Rot90));
    }

    #[test]
    fn test_link_is_fifo() {
        let mut cell = SimCell::new(RotationState::Rot0);
        assert!(cell.deliver(3));
        assert!(cell.deliver(7));
        assert_eq!(cell.read_byte(), Some(3));
        assert_eq!(cell.read_byte(), Some(7));
        assert_eq!(cell.read_byte(), None);

        cell.write_byte(10);
        assert_eq!(cell.take_sent(), Some(10));
        assert_eq!(cell.take_sent(), None);
    }

    #[test]
    fn test_full_inbox_rejects() {
        let mut cell = SimCell::new(RotationState::Rot0);
        for _ in 0..LINK_BUFFER {
            assert!(cell.deliver(0));
        }
        assert!(!cell.deliver(0));
    }

    #[test]
    fn test_accept_item_sides() {
        let mut cell = SimCell::new(RotationState::Rot0);
        assert!(!cell.accept_item(Direction::Top));
        assert!(cell.accept_item(Direction::Left));
        assert!(!cell.accept_item(Direction::Right));
        assert_eq!(cell.belt.item_um(), Some(-50_000));
    }

    #[test]
    fn test_belt_stopped_while_turning() {
        let mut cell = SimCell::new(RotationState::Rot0);
        cell.belt.place_item(0);
        cell.drive_translation(TranslationCommand::Forward);
        cell.drive_rotation(RotationCommand::ClockWise);
        cell.advance(100);
        assert_eq!(cell.belt.item_um(), Some(0));
    }

    #[test]
    fn test_departure_side() {
        let mut cell = SimCell::new(RotationState::Rot90);
        cell.belt.place_item(0);
        cell.drive_translation(TranslationCommand::Forward);
        for _ in 0..60 {
            cell.advance(10);
        }
        assert_eq!(cell.take_departed(), Some(Direction::Bottom));
        assert_eq!(cell.take_departed(), None);
    }

    #[test]
    fn test_log_ring() {
        let mut cell = SimCell::new(RotationState::Rot0);
        for _ in 0..LOG_DEPTH + 3 {
            cell.log(LogLevel::Debug, "tick");
        }
        cell.log(LogLevel::Warn, "last");
        assert_eq!(cell.logs().count(), LOG_DEPTH);
        let (level, text) = cell.logs().last().unwrap();
        assert_eq!(*level, LogLevel::Warn);
        assert_eq!(text.as_str(), "last");
    }
}
