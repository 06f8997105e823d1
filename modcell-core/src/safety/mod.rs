//! Stall supervision
//!
//! The state machine waits on its neighbors and on mechanics without a
//! timeout. This module lets an integrator notice when one of those waits
//! has gone on for too long; it observes the machine and never changes it.

pub mod watchdog;

pub use watchdog::{SafetyStatus, StallKind, StallWatchdog};
