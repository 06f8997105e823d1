//! Cell control loop
//!
//! Ticks the state machine at a fixed rate and watches it for stalls. The
//! watchdog runs in the same loop so it sees every phase the machine goes
//! through, including the short ones.

use defmt::*;
use embassy_time::{Duration, Ticker};

use modcell_core::config::CellConfig;
use modcell_core::safety::{SafetyStatus, StallWatchdog};
use modcell_core::state::{CellMachine, Progress, RotationState};
use modcell_core::traits::CellIo;

use crate::board::BoardCell;

/// Position implied by the end stops at power-up
///
/// Anything other than the quarter-turn switch alone is taken as home.
fn initial_rotation(cell: &mut BoardCell) -> RotationState {
    let home = cell.home_limit_switch();
    let quarter = cell.quarter_turn_limit_switch();
    match (home, quarter) {
        (false, true) => RotationState::Rot90,
        (true, false) => RotationState::Rot0,
        _ => {
            warn!("Turntable not on a stop (home={}, quarter={}), assuming home", home, quarter);
            RotationState::Rot0
        }
    }
}

/// Cell task - runs receive/forward skills as commands arrive
#[embassy_executor::task]
pub async fn cell_task(mut cell: BoardCell, config: CellConfig) {
    info!("Cell task started");

    let rotation = initial_rotation(&mut cell);
    info!("Turntable at {}", rotation);

    let mut machine = CellMachine::with_rotation(rotation);
    let mut watchdog = StallWatchdog::new(config.watchdog);
    watchdog.reset(cell.clock_millis());
    let mut status = SafetyStatus::Ok;

    let mut ticker = Ticker::every(Duration::from_millis(config.tick_interval_ms.into()));

    loop {
        let progress = machine.tick(&mut cell);
        if progress != Progress::Waiting {
            debug!("{}", progress);
        }

        let now = cell.clock_millis();
        let observed = watchdog.observe(machine.phase(), now);
        if observed != status {
            match observed {
                SafetyStatus::Stalled(kind) => {
                    warn!(
                        "{} stalled for {} ms ({})",
                        machine.phase(),
                        watchdog.elapsed_ms(now),
                        kind
                    );
                }
                SafetyStatus::Ok => info!("Stall cleared"),
            }
            status = observed;
        }

        ticker.next().await;
    }
}
