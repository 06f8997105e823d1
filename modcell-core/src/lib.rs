//! Board-agnostic core logic for a modular transport cell
//!
//! This crate contains all control logic that does not depend on
//! specific hardware implementations:
//!
//! - Capability traits the cell's sensors, motors and link are reached through
//! - The polled state machine that runs receive/forward skills
//! - An optional stall watchdog layered on top of the machine
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod safety;
pub mod state;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;

pub use modcell_protocol::{Command, CommandError, Direction, Skill, ACK_BYTE};
