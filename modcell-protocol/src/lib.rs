//! Neighbor Link Protocol
//!
//! This crate defines the byte protocol spoken on a transport cell's
//! serial link. There is no framing: every message is exactly one byte.
//!
//! # Protocol Overview
//!
//! A routing layer sends one command byte to each cell involved in a
//! hand-over:
//! ```text
//! ┌──────┬──────────────┬───────────┐
//! │ byte │ skill        │ direction │
//! ├──────┼──────────────┼───────────┤
//! │ 0..3 │ ReceiveFrom  │ L T R B   │
//! │ 4..7 │ ForwardTo    │ L T R B   │
//! └──────┴──────────────┴───────────┘
//! ```
//!
//! Neighbors then handshake directly. The receiving cell announces that it
//! is ready with [`ACK_BYTE`] and acknowledges arrival of the item with a
//! second [`ACK_BYTE`]. The forwarding cell waits for any byte as the
//! ready signal and treats the next byte as arrival.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod handshake;

pub use command::{Command, CommandError, Direction, Skill, MAX_COMMAND};
pub use handshake::{ACK_BYTE, Handshake};
