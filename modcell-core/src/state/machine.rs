//! Skill execution state machine
//!
//! The machine owns every piece of cell state and reaches hardware only
//! through the [`CellIo`] passed into [`CellMachine::tick`]. Ordering
//! guarantees hold by construction:
//!
//! - the belt never starts before the turntable is at the target position
//! - the belt never starts before the handshake cleared it
//! - the turntable and the belt never run at the same time
//!
//! There is no timeout and no abort. A wait that never ends stalls the
//! machine; see [`crate::safety`] for an observer that reports it.

use core::fmt::Write;

use heapless::String;
use modcell_protocol::{Command, CommandError, Direction, Handshake, Skill};

use super::orientation::{translation_for, LimitSwitch, RotationState};
use super::progress::{Phase, Progress};
use crate::traits::{CellIo, LogLevel, RotationCommand, TranslationCommand};

/// Capacity for formatted diagnostics
const MESSAGE_LEN: usize = 48;

/// State of one transport cell
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CellMachine {
    /// Skill being executed, `None` when idle
    skill: Option<Skill>,
    /// Side the current skill serves
    target_direction: Direction,
    /// Position required by `target_direction`
    target_rotation: RotationState,
    /// Last position confirmed by a limit switch
    rotation_state: RotationState,
    /// Turntable motor command in effect
    rotation_cmd: RotationCommand,
    /// Belt motor command in effect
    translation_cmd: TranslationCommand,
    /// Handshake done for the current skill
    ready_to_translate: bool,
}

impl Default for CellMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl CellMachine {
    /// Create an idle machine at the home position
    pub fn new() -> Self {
        Self::with_rotation(RotationState::Rot0)
    }

    /// Create an idle machine whose turntable is known to rest at `rotation`
    pub fn with_rotation(rotation: RotationState) -> Self {
        Self {
            skill: None,
            target_direction: Direction::Left,
            target_rotation: RotationState::for_direction(Direction::Left),
            rotation_state: rotation,
            rotation_cmd: RotationCommand::NoRotation,
            translation_cmd: TranslationCommand::NoTranslation,
            ready_to_translate: false,
        }
    }

    /// Skill being executed
    pub fn active_skill(&self) -> Option<Skill> {
        self.skill
    }

    pub fn target_direction(&self) -> Direction {
        self.target_direction
    }

    pub fn target_rotation(&self) -> RotationState {
        self.target_rotation
    }

    /// Last confirmed turntable position
    pub fn rotation_state(&self) -> RotationState {
        self.rotation_state
    }

    pub fn rotation_command(&self) -> RotationCommand {
        self.rotation_cmd
    }

    pub fn translation_command(&self) -> TranslationCommand {
        self.translation_cmd
    }

    pub fn ready_to_translate(&self) -> bool {
        self.ready_to_translate
    }

    /// Check if no skill is active
    pub fn is_idle(&self) -> bool {
        self.skill.is_none()
    }

    /// Phase the next tick will run
    pub fn phase(&self) -> Phase {
        if self.skill.is_none() {
            Phase::Idle
        } else if self.rotation_state != self.target_rotation {
            Phase::Orienting
        } else if !self.ready_to_translate {
            Phase::Handshaking
        } else {
            Phase::Translating
        }
    }

    /// Advance the machine by at most one step
    ///
    /// Call repeatedly from the control loop. Returns immediately; a tick
    /// whose wait condition is not met changes nothing.
    pub fn tick<C: CellIo + ?Sized>(&mut self, io: &mut C) -> Progress {
        let Some(skill) = self.skill else {
            return self.acquire_command(io);
        };

        if self.rotation_state != self.target_rotation {
            return self.orient(io);
        }

        if !self.ready_to_translate {
            return self.handshake(io, skill);
        }

        self.translate(io, skill)
    }

    /// Idle: take one command byte off the link
    fn acquire_command<C: CellIo + ?Sized>(&mut self, io: &mut C) -> Progress {
        let Some(byte) = io.read_byte() else {
            return Progress::Waiting;
        };

        match Command::from_byte(byte) {
            Ok(command) => {
                self.skill = Some(command.skill);
                self.target_direction = command.direction;
                self.target_rotation = RotationState::for_direction(command.direction);
                self.ready_to_translate = false;

                let mut msg: String<MESSAGE_LEN> = String::new();
                let _ = write!(
                    msg,
                    "starting {} skill ({:?})",
                    command.skill.name(),
                    command.direction
                );
                io.log(LogLevel::Info, &msg);
                Progress::SkillStarted(command)
            }
            Err(CommandError::OutOfRange(value)) => {
                let mut msg: String<MESSAGE_LEN> = String::new();
                let _ = write!(msg, "command byte {} out of range", value);
                io.log(LogLevel::Warn, &msg);
                Progress::CommandRejected(value)
            }
        }
    }

    /// Turn to the target position
    ///
    /// The only place `rotation_state` is written.
    fn orient<C: CellIo + ?Sized>(&mut self, io: &mut C) -> Progress {
        if self.rotation_cmd.is_active() {
            let arrived = match self.target_rotation.limit_switch() {
                LimitSwitch::Home => io.home_limit_switch(),
                LimitSwitch::QuarterTurn => io.quarter_turn_limit_switch(),
            };
            if !arrived {
                return Progress::Waiting;
            }

            self.set_rotation(io, RotationCommand::NoRotation);
            self.rotation_state = self.target_rotation;
            io.log(LogLevel::Debug, "orientation reached");
            return Progress::Oriented(self.rotation_state);
        }

        let command = self.target_rotation.approach_command();
        io.log(LogLevel::Info, "starting rotation");
        self.set_rotation(io, command);
        Progress::RotationStarted(command)
    }

    /// Get cleared to move the belt
    fn handshake<C: CellIo + ?Sized>(&mut self, io: &mut C, skill: Skill) -> Progress {
        match skill.ready_signal() {
            Handshake::AwaitAny => {
                if io.read_byte().is_none() {
                    return Progress::Waiting;
                }
                self.ready_to_translate = true;
                Progress::HandshakeReceived
            }
            signal => {
                if let Some(byte) = signal.byte() {
                    io.write_byte(byte);
                }
                self.ready_to_translate = true;
                Progress::ReadySignalled
            }
        }
    }

    /// Start the belt, then wait for the hand-over to finish
    fn translate<C: CellIo + ?Sized>(&mut self, io: &mut C, skill: Skill) -> Progress {
        if !self.translation_cmd.is_active() {
            let command = translation_for(self.target_direction, skill);
            io.log(LogLevel::Info, "starting translation");
            self.set_translation(io, command);
            return Progress::TranslationStarted(command);
        }

        let done = match skill {
            Skill::ForwardTo => io.read_byte().is_some(),
            Skill::ReceiveFrom => io.light_barrier(),
        };
        if !done {
            return Progress::Waiting;
        }

        self.set_translation(io, TranslationCommand::NoTranslation);
        self.skill = None;
        if let Some(byte) = skill.done_signal().byte() {
            io.write_byte(byte);
        }

        let mut msg: String<MESSAGE_LEN> = String::new();
        let _ = write!(msg, "skill done ({})", skill.name());
        io.log(LogLevel::Info, &msg);
        Progress::SkillCompleted(skill)
    }

    fn set_rotation<C: CellIo + ?Sized>(&mut self, io: &mut C, command: RotationCommand) {
        self.rotation_cmd = command;
        io.drive_rotation(command);
    }

    fn set_translation<C: CellIo + ?Sized>(&mut self, io: &mut C, command: TranslationCommand) {
        self.translation_cmd = command;
        io.drive_translation(command);
    }
}
