//! Motor driver implementations
//!
//! Both the turntable and the belt run on a fixed-speed DC motor behind an
//! H-bridge; only direction and on/off are controlled.

pub mod hbridge;

pub use hbridge::HBridge;
