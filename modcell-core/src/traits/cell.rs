//! Cell capability interface
//!
//! Everything the state machine touches goes through [`CellIo`]. Real
//! hardware, the simulator and test doubles all implement it.

use super::actuator::{RotationCommand, TranslationCommand};

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Destination for diagnostic messages
///
/// Logging has no effect on control flow.
pub trait DiagnosticSink {
    fn log(&mut self, level: LogLevel, message: &str);
}

/// Sensors, actuators and link of one transport cell
///
/// All calls are non-blocking. Sensor reads take `&mut self` because
/// reading a pin or draining a buffer typically requires mutable access.
pub trait CellIo {
    /// True while an item interrupts the light barrier
    fn light_barrier(&mut self) -> bool;

    /// True when the turntable rests on the 0° stop
    fn home_limit_switch(&mut self) -> bool;

    /// True when the turntable rests on the 90° stop
    fn quarter_turn_limit_switch(&mut self) -> bool;

    /// Set the turntable motor; fire-and-forget
    fn drive_rotation(&mut self, command: RotationCommand);

    /// Set the belt motor; fire-and-forget
    fn drive_translation(&mut self, command: TranslationCommand);

    /// Take one pending byte from the neighbor link, if any
    fn read_byte(&mut self) -> Option<u8>;

    /// Queue one byte on the neighbor link; fire-and-forget
    fn write_byte(&mut self, byte: u8);

    /// Emit a diagnostic message
    fn log(&mut self, level: LogLevel, message: &str);

    /// Monotonic milliseconds
    fn clock_millis(&mut self) -> u64;
}
