//! Hardware abstraction traits
//!
//! These traits define the interface between the control logic
//! and hardware-specific implementations.

pub mod actuator;
pub mod cell;

pub use actuator::{RotationCommand, TranslationCommand};
pub use cell::{CellIo, DiagnosticSink, LogLevel};
