//! Cell interface implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in modcell-core and modcell-hal:
//!
//! - Adapters from embedded-hal pins and embedded-io ports
//! - Limit switches and light barrier inputs
//! - H-bridge outputs for the turntable and belt motors
//! - A complete GPIO-backed cell
//! - A host-side turntable simulator

#![no_std]
#![deny(unsafe_code)]

pub mod cell;
pub mod gpio;
pub mod motor;
pub mod sensor;
pub mod serial;
pub mod sim;

pub use cell::{CellPins, GpioCell};
