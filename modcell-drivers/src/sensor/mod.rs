//! Digital sensors
//!
//! Limit switches and the light barrier are plain on/off inputs.

pub mod switch;

pub use switch::Switch;
