//! Tick outcomes and machine phases

use modcell_protocol::{Command, Skill};

use super::orientation::RotationState;
use crate::traits::{RotationCommand, TranslationCommand};

/// Which part of a skill the machine is in
///
/// Phases are evaluated in this order on every tick; the first one whose
/// guard holds is the one that runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// No active skill, listening for a command
    Idle,
    /// Turntable not at the target position
    Orienting,
    /// Oriented, waiting to be cleared to move
    Handshaking,
    /// Belt running or about to start
    Translating,
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Progress {
    /// Nothing changed; the current wait condition still holds
    Waiting,
    /// A command byte was accepted
    SkillStarted(Command),
    /// A command byte was out of range and discarded
    CommandRejected(u8),
    /// The turntable motor was started
    RotationStarted(RotationCommand),
    /// The turntable reached its target and was stopped
    Oriented(RotationState),
    /// The ready acknowledgement was sent (receiving side)
    ReadySignalled,
    /// The neighbor's ready signal arrived (forwarding side)
    HandshakeReceived,
    /// The belt motor was started
    TranslationStarted(TranslationCommand),
    /// The hand-over finished and the machine is idle again
    SkillCompleted(Skill),
}

impl Progress {
    /// Check if the machine's state changed
    ///
    /// A rejected command leaves the state untouched.
    pub fn changed_state(&self) -> bool {
        !matches!(self, Progress::Waiting | Progress::CommandRejected(_))
    }

    /// Check if an actuator was commanded this tick
    pub fn drove_actuator(&self) -> bool {
        matches!(
            self,
            Progress::RotationStarted(_)
                | Progress::Oriented(_)
                | Progress::TranslationStarted(_)
                | Progress::SkillCompleted(_)
        )
    }
}
