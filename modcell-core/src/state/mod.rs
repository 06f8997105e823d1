//! Cell state machine
//!
//! A single polled machine runs one skill at a time: decode a command,
//! turn to the required orientation, handshake with the neighbor, then
//! drive the belt until the hand-over completes. Every call to
//! [`CellMachine::tick`] does at most one step and never blocks.

pub mod machine;
pub mod orientation;
pub mod progress;

pub use machine::CellMachine;
pub use orientation::{translation_for, LimitSwitch, RotationState};
pub use progress::{Phase, Progress};
