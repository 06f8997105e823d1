//! H-bridge motor output
//!
//! Drives a brushed motor through two direction inputs (IN1/IN2 on an
//! L298N, TB6612 and similar):
//!
//! | signal | A    | B    | motor    |
//! |--------|------|------|----------|
//! | +1     | high | low  | forward  |
//! | 0      | low  | low  | coast    |
//! | -1     | low  | high | reverse  |
//!
//! Both inputs high would brake or short the bridge and is never driven.

use modcell_core::traits::{RotationCommand, TranslationCommand};
use modcell_hal::OutputPin;

/// Bidirectional motor on two output pins
pub struct HBridge<P> {
    a: P,
    b: P,
    /// Signal currently applied (-1, 0, +1)
    signal: i8,
}

impl<P: OutputPin> HBridge<P> {
    /// Create a new H-bridge output, initially stopped
    pub fn new(a: P, b: P) -> Self {
        let mut bridge = Self { a, b, signal: 0 };
        bridge.a.set_low();
        bridge.b.set_low();
        bridge
    }

    /// Apply a signed drive signal; only its sign matters
    pub fn set(&mut self, signal: i8) {
        let signal = signal.signum();

        // Release the active side before raising the other
        match signal {
            1 => {
                self.b.set_low();
                self.a.set_high();
            }
            -1 => {
                self.a.set_low();
                self.b.set_high();
            }
            _ => {
                self.a.set_low();
                self.b.set_low();
            }
        }
        self.signal = signal;
    }

    /// Signal currently applied
    pub fn signal(&self) -> i8 {
        self.signal
    }

    /// Check if the motor is powered
    pub fn is_running(&self) -> bool {
        self.signal != 0
    }

    pub fn rotate(&mut self, command: RotationCommand) {
        self.set(command.signal());
    }

    pub fn translate(&mut self, command: TranslationCommand) {
        self.set(command.signal());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self { high: true }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn levels(bridge: &HBridge<MockPin>) -> (bool, bool) {
        (bridge.a.is_set_high(), bridge.b.is_set_high())
    }

    #[test]
    fn test_starts_stopped() {
        let bridge = HBridge::new(MockPin::new(), MockPin::new());
        assert_eq!(levels(&bridge), (false, false));
        assert!(!bridge.is_running());
    }

    #[test]
    fn test_truth_table() {
        let mut bridge = HBridge::new(MockPin::new(), MockPin::new());

        bridge.set(1);
        assert_eq!(levels(&bridge), (true, false));
        bridge.set(-1);
        assert_eq!(levels(&bridge), (false, true));
        bridge.set(0);
        assert_eq!(levels(&bridge), (false, false));
    }

    #[test]
    fn test_signal_is_clamped() {
        let mut bridge = HBridge::new(MockPin::new(), MockPin::new());
        bridge.set(100);
        assert_eq!(bridge.signal(), 1);
        bridge.set(i8::MIN);
        assert_eq!(bridge.signal(), -1);
    }

    #[test]
    fn test_commands() {
        let mut bridge = HBridge::new(MockPin::new(), MockPin::new());

        bridge.rotate(RotationCommand::ClockWise);
        assert_eq!(levels(&bridge), (true, false));
        bridge.rotate(RotationCommand::CounterClockWise);
        assert_eq!(levels(&bridge), (false, true));

        bridge.translate(TranslationCommand::Forward);
        assert_eq!(levels(&bridge), (true, false));
        bridge.translate(TranslationCommand::NoTranslation);
        assert!(!bridge.is_running());
    }
}
