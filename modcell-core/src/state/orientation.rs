//! Orientation and belt polarity
//!
//! The turntable has two positions. At `Rot0` the belt runs Left/Right,
//! at `Rot90` it runs Top/Bottom.

use modcell_protocol::{Direction, Skill};

use crate::traits::{RotationCommand, TranslationCommand};

/// Turntable position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RotationState {
    #[default]
    Rot0,
    Rot90,
}

/// Mechanical stop confirming a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LimitSwitch {
    /// Closed at 0°
    Home,
    /// Closed at 90°
    QuarterTurn,
}

impl RotationState {
    /// Position that exposes `direction` to the belt
    pub fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Left | Direction::Right => RotationState::Rot0,
            Direction::Top | Direction::Bottom => RotationState::Rot90,
        }
    }

    /// Motor command that moves the turntable toward this position
    pub fn approach_command(self) -> RotationCommand {
        match self {
            RotationState::Rot0 => RotationCommand::CounterClockWise,
            RotationState::Rot90 => RotationCommand::ClockWise,
        }
    }

    /// Switch that closes when this position is reached
    pub fn limit_switch(self) -> LimitSwitch {
        match self {
            RotationState::Rot0 => LimitSwitch::Home,
            RotationState::Rot90 => LimitSwitch::QuarterTurn,
        }
    }
}

/// Belt command that carries an item through `direction` for `skill`
///
/// Forward pushes toward Right/Bottom, so forwarding out of those sides
/// and receiving through Left/Top both run forward.
pub fn translation_for(direction: Direction, skill: Skill) -> TranslationCommand {
    match (direction, skill) {
        (Direction::Right | Direction::Bottom, Skill::ForwardTo) => TranslationCommand::Forward,
        (Direction::Right | Direction::Bottom, Skill::ReceiveFrom) => TranslationCommand::Backward,
        (Direction::Left | Direction::Top, Skill::ForwardTo) => TranslationCommand::Backward,
        (Direction::Left | Direction::Top, Skill::ReceiveFrom) => TranslationCommand::Forward,
    }
}
