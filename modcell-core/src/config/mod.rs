//! Configuration types
//!
//! Board-agnostic settings for one cell. The firmware validates its
//! `cell.toml` against these types at build time.

pub mod types;

pub use types::*;
