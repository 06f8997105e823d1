//! Board wiring
//!
//! Pin assignments for the cell controller board:
//!
//! | Signal                | GPIO |
//! |-----------------------|------|
//! | Link TX / RX (UART0)  | 0, 1 |
//! | Light barrier         | 2    |
//! | Home limit switch     | 3    |
//! | Quarter limit switch  | 4    |
//! | Turntable bridge A, B | 6, 7 |
//! | Belt bridge A, B      | 8, 9 |

use defmt::*;
use embassy_rp::gpio::{Input, Level, Output, Pin, Pull};
use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};
use embassy_rp::Peri;
use embassy_time::Instant;

use modcell_core::config::SensorPolarity;
use modcell_core::traits::{DiagnosticSink, LogLevel};
use modcell_drivers::gpio::{HalInput, HalOutput};
use modcell_drivers::serial::IoSerial;
use modcell_drivers::{CellPins, GpioCell};
use modcell_hal::MonotonicClock;

pub type BoardInput = HalInput<Input<'static>>;
pub type BoardOutput = HalOutput<Output<'static>>;

/// The cell as wired on this board
pub type BoardCell = GpioCell<
    BoardInput,
    BoardOutput,
    IoSerial<BufferedUartRx>,
    IoSerial<BufferedUartTx>,
    EmbassyClock,
    DefmtSink,
>;

/// Milliseconds since boot
pub struct EmbassyClock;

impl MonotonicClock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}

/// Cell diagnostics to defmt
pub struct DefmtSink;

impl DiagnosticSink for DefmtSink {
    fn log(&mut self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => debug!("{=str}", message),
            LogLevel::Info => info!("{=str}", message),
            LogLevel::Warn => warn!("{=str}", message),
            LogLevel::Error => error!("{=str}", message),
        }
    }
}

/// Sensor input, pulled toward its idle level
fn sensor(pin: Peri<'static, impl Pin>, inverted: bool) -> BoardInput {
    // Active-low sensors idle high
    let pull = if inverted { Pull::Up } else { Pull::Down };
    HalInput::new(Input::new(pin, pull))
}

fn output(pin: Peri<'static, impl Pin>) -> BoardOutput {
    HalOutput::new(Output::new(pin, Level::Low))
}

/// Sensor and motor pins of one cell
pub struct SensorMotorPins {
    pub light_barrier: Peri<'static, embassy_rp::peripherals::PIN_2>,
    pub home_switch: Peri<'static, embassy_rp::peripherals::PIN_3>,
    pub quarter_switch: Peri<'static, embassy_rp::peripherals::PIN_4>,
    pub rotation_a: Peri<'static, embassy_rp::peripherals::PIN_6>,
    pub rotation_b: Peri<'static, embassy_rp::peripherals::PIN_7>,
    pub translation_a: Peri<'static, embassy_rp::peripherals::PIN_8>,
    pub translation_b: Peri<'static, embassy_rp::peripherals::PIN_9>,
}

/// Assemble the cell from its pins and the split link
pub fn build_cell(
    pins: SensorMotorPins,
    polarity: SensorPolarity,
    rx: BufferedUartRx,
    tx: BufferedUartTx,
) -> BoardCell {
    let pins = CellPins::new(
        sensor(pins.light_barrier, polarity.light_barrier_inverted),
        sensor(pins.home_switch, polarity.home_switch_inverted),
        sensor(pins.quarter_switch, polarity.quarter_switch_inverted),
        (output(pins.rotation_a), output(pins.rotation_b)),
        (output(pins.translation_a), output(pins.translation_b)),
        polarity,
    );

    info!("Cell pins initialized");

    GpioCell::new(
        pins,
        IoSerial::new(rx),
        IoSerial::new(tx),
        EmbassyClock,
        DefmtSink,
    )
}
