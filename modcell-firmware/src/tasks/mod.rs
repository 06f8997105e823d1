//! Embassy async tasks

pub mod cell;

pub use cell::cell_task;
