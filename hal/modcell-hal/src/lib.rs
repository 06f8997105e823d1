//! Modcell Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits a transport cell
//! is built from. Chip-specific code (the RP2040 firmware, the host
//! simulator) implements them so the same driver and control code runs
//! on every target.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  modcell-core (CellMachine, CellIo)     │
//! └─────────────────────────────────────────┘
//!                     ▲
//!                     │
//! ┌─────────────────────────────────────────┐
//! │  modcell-drivers (GpioCell, sim)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  modcell-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`uart::SerialRx`], [`uart::SerialTx`] - Non-blocking neighbor link
//! - [`clock::MonotonicClock`] - Millisecond time base

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use clock::MonotonicClock;
pub use gpio::{InputPin, OutputPin};
pub use uart::{SerialRx, SerialTx};
