//! GPIO-backed transport cell
//!
//! Assembles switches, H-bridges, a serial port, a clock and a diagnostic
//! sink into a [`CellIo`] the state machine can drive.
//!
//! Link errors never reach the state machine: a failed read counts as
//! "nothing pending" and a failed write drops the byte. Both are reported
//! to the diagnostic sink.

use modcell_core::config::SensorPolarity;
use modcell_core::traits::{
    CellIo, DiagnosticSink, LogLevel, RotationCommand, TranslationCommand,
};
use modcell_hal::{InputPin, MonotonicClock, OutputPin, SerialRx, SerialTx};

use crate::motor::HBridge;
use crate::sensor::Switch;

/// Sensor inputs and motor outputs of one cell
pub struct CellPins<I, O> {
    pub light_barrier: Switch<I>,
    pub home_switch: Switch<I>,
    pub quarter_switch: Switch<I>,
    pub rotation: HBridge<O>,
    pub translation: HBridge<O>,
}

impl<I: InputPin, O: OutputPin> CellPins<I, O> {
    /// Wire up raw pins
    ///
    /// Motor pins are given as (A, B) pairs; A high turns the turntable
    /// clockwise and runs the belt forward.
    pub fn new(
        light_barrier: I,
        home_switch: I,
        quarter_switch: I,
        rotation: (O, O),
        translation: (O, O),
        polarity: SensorPolarity,
    ) -> Self {
        Self {
            light_barrier: Switch::new(light_barrier, polarity.light_barrier_inverted),
            home_switch: Switch::new(home_switch, polarity.home_switch_inverted),
            quarter_switch: Switch::new(quarter_switch, polarity.quarter_switch_inverted),
            rotation: HBridge::new(rotation.0, rotation.1),
            translation: HBridge::new(translation.0, translation.1),
        }
    }
}

/// Transport cell on real pins and a real serial port
pub struct GpioCell<I, O, R, T, C, D> {
    pins: CellPins<I, O>,
    rx: R,
    tx: T,
    clock: C,
    sink: D,
}

impl<I, O, R, T, C, D> GpioCell<I, O, R, T, C, D>
where
    I: InputPin,
    O: OutputPin,
    R: SerialRx,
    T: SerialTx,
    C: MonotonicClock,
    D: DiagnosticSink,
{
    pub fn new(pins: CellPins<I, O>, rx: R, tx: T, clock: C, sink: D) -> Self {
        Self {
            pins,
            rx,
            tx,
            clock,
            sink,
        }
    }

    pub fn pins(&self) -> &CellPins<I, O> {
        &self.pins
    }

    /// Cut power to both motors
    ///
    /// Not used by the state machine; for integrators shutting down.
    pub fn stop_all(&mut self) {
        self.pins.rotation.set(0);
        self.pins.translation.set(0);
    }
}

impl<I, O, R, T, C, D> CellIo for GpioCell<I, O, R, T, C, D>
where
    I: InputPin,
    O: OutputPin,
    R: SerialRx,
    T: SerialTx,
    C: MonotonicClock,
    D: DiagnosticSink,
{
    fn light_barrier(&mut self) -> bool {
        self.pins.light_barrier.is_triggered()
    }

    fn home_limit_switch(&mut self) -> bool {
        self.pins.home_switch.is_triggered()
    }

    fn quarter_turn_limit_switch(&mut self) -> bool {
        self.pins.quarter_switch.is_triggered()
    }

    fn drive_rotation(&mut self, command: RotationCommand) {
        self.pins.rotation.rotate(command);
    }

    fn drive_translation(&mut self, command: TranslationCommand) {
        self.pins.translation.translate(command);
    }

    fn read_byte(&mut self) -> Option<u8> {
        match self.rx.try_read_byte() {
            Ok(byte) => byte,
            Err(_) => {
                self.sink.log(LogLevel::Warn, "serial read failed");
                None
            }
        }
    }

    fn write_byte(&mut self, byte: u8) {
        if self.tx.write_byte(byte).is_err() {
            self.sink.log(LogLevel::Error, "serial write failed, byte dropped");
        }
    }

    fn log(&mut self, level: LogLevel, message: &str) {
        self.sink.log(level, message);
    }

    fn clock_millis(&mut self) -> u64 {
        self.clock.now_ms()
    }
}
