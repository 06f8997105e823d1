//! Actuator commands
//!
//! Both motors take a three-way command. The signed signal form
//! (`+1`, `0`, `-1`) is what a bidirectional driver stage consumes.

/// Turntable motor command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RotationCommand {
    /// Turn toward the quarter-turn stop
    ClockWise,
    #[default]
    NoRotation,
    /// Turn toward the home stop
    CounterClockWise,
}

impl RotationCommand {
    /// Signed drive signal
    pub fn signal(self) -> i8 {
        match self {
            RotationCommand::ClockWise => 1,
            RotationCommand::NoRotation => 0,
            RotationCommand::CounterClockWise => -1,
        }
    }

    /// Parse a signed drive signal
    pub fn from_signal(signal: i8) -> Option<Self> {
        match signal {
            1 => Some(RotationCommand::ClockWise),
            0 => Some(RotationCommand::NoRotation),
            -1 => Some(RotationCommand::CounterClockWise),
            _ => None,
        }
    }

    /// Check if the motor is commanded to move
    pub fn is_active(self) -> bool {
        self != RotationCommand::NoRotation
    }
}

/// Belt motor command
///
/// `Forward` always moves items toward the Right/Bottom edge of the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TranslationCommand {
    Forward,
    #[default]
    NoTranslation,
    Backward,
}

impl TranslationCommand {
    /// Signed drive signal
    pub fn signal(self) -> i8 {
        match self {
            TranslationCommand::Forward => 1,
            TranslationCommand::NoTranslation => 0,
            TranslationCommand::Backward => -1,
        }
    }

    /// Parse a signed drive signal
    pub fn from_signal(signal: i8) -> Option<Self> {
        match signal {
            1 => Some(TranslationCommand::Forward),
            0 => Some(TranslationCommand::NoTranslation),
            -1 => Some(TranslationCommand::Backward),
            _ => None,
        }
    }

    /// Check if the belt is commanded to move
    pub fn is_active(self) -> bool {
        self != TranslationCommand::NoTranslation
    }
}
