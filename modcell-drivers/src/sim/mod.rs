//! Host-side cell simulator
//!
//! Kinematic model of a turntable cell: a belt mounted on a table that
//! turns between 0° and 90°, a light barrier across the middle of the
//! belt, and two end stops. Time only moves when [`SimCell::advance`] is
//! called, so runs are fully deterministic.
//!
//! Several cells can be wired together with [`exchange`] (serial bytes)
//! and [`hand_over`] (items leaving one belt and entering the next).

pub mod belt;
pub mod cell;
pub mod turntable;

pub use belt::{Belt, BeltEnd};
pub use cell::SimCell;
pub use turntable::Turntable;

use modcell_core::Direction;

/// Move every byte each cell has sent into the other's inbox
///
/// Returns the number of bytes moved. Bytes that do not fit are dropped,
/// as on a real UART with a full receive buffer.
pub fn exchange(a: &mut SimCell, b: &mut SimCell) -> usize {
    let mut moved = 0;
    while let Some(byte) = a.take_sent() {
        if b.deliver(byte) {
            moved += 1;
        }
    }
    while let Some(byte) = b.take_sent() {
        if a.deliver(byte) {
            moved += 1;
        }
    }
    moved
}

/// Pass an item that left `from` through `side` onto `to`
///
/// `to` is the neighbor on `side` of `from`; the item enters it through the
/// opposite side. Returns true if an item changed cells.
pub fn hand_over(from: &mut SimCell, to: &mut SimCell, side: Direction) -> bool {
    if from.departed() != Some(side) {
        return false;
    }
    if !to.accept_item(side.opposite()) {
        return false;
    }
    from.take_departed();
    true
}
