//! Two-state sensor input
//!
//! Reads a GPIO pin and reports whether the sensor is triggered. The pin
//! can be configured as active-high (default) or active-low.

use modcell_hal::InputPin;

/// Digital sensor on one input pin
pub struct Switch<P> {
    pin: P,
    /// If true, triggered = pin LOW
    inverted: bool,
}

impl<P: InputPin> Switch<P> {
    /// Create a new sensor input
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to read
    /// - `inverted`: If true, the sensor is triggered when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        Self { pin, inverted }
    }

    /// Create a sensor that pulls its pin high when triggered
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a sensor that pulls its pin low when triggered
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Access the underlying pin
    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }

    /// Check if the sensor is triggered
    pub fn is_triggered(&mut self) -> bool {
        self.pin.is_high() != self.inverted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPin {
        high: bool,
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_active_high() {
        let mut switch = Switch::new_active_high(MockPin { high: false });
        assert!(!switch.is_triggered());
        switch.pin.high = true;
        assert!(switch.is_triggered());
    }

    #[test]
    fn test_active_low() {
        let mut switch = Switch::new_active_low(MockPin { high: true });
        assert!(!switch.is_triggered());
        switch.pin.high = false;
        assert!(switch.is_triggered());
    }
}
