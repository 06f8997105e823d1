//! embedded-hal pin adapters
//!
//! Wrap any embedded-hal 1.0 digital pin so it satisfies the modcell-hal
//! pin traits. Chip HALs (embassy-rp and friends) implement embedded-hal,
//! so this is all the glue a board needs.

use embedded_hal::digital;
use modcell_hal::{InputPin, OutputPin};

/// Input pin backed by an embedded-hal pin
///
/// A failed read reports low.
pub struct HalInput<P> {
    pin: P,
}

impl<P: digital::InputPin> HalInput<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: digital::InputPin> InputPin for HalInput<P> {
    fn is_high(&mut self) -> bool {
        self.pin.is_high().unwrap_or(false)
    }
}

/// Output pin backed by an embedded-hal pin
///
/// Tracks the last level that was successfully applied.
pub struct HalOutput<P> {
    pin: P,
    high: bool,
}

impl<P: digital::OutputPin> HalOutput<P> {
    /// Wrap a pin and drive it low
    pub fn new(pin: P) -> Self {
        let mut out = Self { pin, high: true };
        out.set_low();
        out
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: digital::OutputPin> OutputPin for HalOutput<P> {
    fn set_high(&mut self) {
        if self.pin.set_high().is_ok() {
            self.high = true;
        }
    }

    fn set_low(&mut self) {
        if self.pin.set_low().is_ok() {
            self.high = false;
        }
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
