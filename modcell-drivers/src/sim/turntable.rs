//! Turntable kinematics

use modcell_core::state::RotationState;
use modcell_core::traits::RotationCommand;

/// End of travel (millidegrees)
pub const MAX_ANGLE_MDEG: u32 = 90_000;

/// Default turning speed (°/s)
pub const DEFAULT_SPEED_DEG_S: u32 = 45;

/// Table turning between the 0° and 90° stops
#[derive(Debug, Clone)]
pub struct Turntable {
    /// Current angle (millidegrees, 0..=MAX_ANGLE_MDEG)
    angle_mdeg: u32,
    /// Turning speed (°/s)
    speed_deg_s: u32,
    /// Motor command in effect
    command: RotationCommand,
    /// Motor powered but table held in place
    jammed: bool,
}

impl Turntable {
    /// Create a table resting at one of its stops
    pub fn new(position: RotationState, speed_deg_s: u32) -> Self {
        let angle_mdeg = match position {
            RotationState::Rot0 => 0,
            RotationState::Rot90 => MAX_ANGLE_MDEG,
        };
        Self {
            angle_mdeg,
            speed_deg_s,
            command: RotationCommand::NoRotation,
            jammed: false,
        }
    }

    pub fn set_command(&mut self, command: RotationCommand) {
        self.command = command;
    }

    pub fn command(&self) -> RotationCommand {
        self.command
    }

    /// Block the table; the motor keeps running
    pub fn jam(&mut self) {
        self.jammed = true;
    }

    /// Move the table for `dt_ms` at the commanded direction
    ///
    /// The stops hold the table at the ends of travel.
    pub fn advance(&mut self, dt_ms: u32) {
        if self.jammed {
            return;
        }

        // °/s × ms = millidegrees
        let delta = self.speed_deg_s.saturating_mul(dt_ms);
        self.angle_mdeg = match self.command {
            RotationCommand::ClockWise => self.angle_mdeg.saturating_add(delta).min(MAX_ANGLE_MDEG),
            RotationCommand::CounterClockWise => self.angle_mdeg.saturating_sub(delta),
            RotationCommand::NoRotation => self.angle_mdeg,
        };
    }

    /// Current angle (millidegrees)
    pub fn angle_mdeg(&self) -> u32 {
        self.angle_mdeg
    }

    /// Home stop closed
    pub fn is_home(&self) -> bool {
        self.angle_mdeg == 0
    }

    /// Quarter-turn stop closed
    pub fn is_quarter_turn(&self) -> bool {
        self.angle_mdeg == MAX_ANGLE_MDEG
    }

    /// Position the table rests at, if it is on a stop
    pub fn position(&self) -> Option<RotationState> {
        if self.is_home() {
            Some(RotationState::Rot0)
        } else if self.is_quarter_turn() {
            Some(RotationState::Rot90)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_turn_duration() {
        let mut table = Turntable::new(RotationState::Rot0, 45);
        table.set_command(RotationCommand::ClockWise);

        // 90° at 45°/s takes two seconds
        for _ in 0..199 {
            table.advance(10);
        }
        assert!(!table.is_quarter_turn());
        assert_eq!(table.position(), None);

        table.advance(10);
        assert!(table.is_quarter_turn());
        assert_eq!(table.position(), Some(RotationState::Rot90));
    }

    #[test]
    fn test_stops_hold_table() {
        let mut table = Turntable::new(RotationState::Rot90, 45);
        table.set_command(RotationCommand::ClockWise);
        table.advance(10_000);
        assert_eq!(table.angle_mdeg(), MAX_ANGLE_MDEG);

        table.set_command(RotationCommand::CounterClockWise);
        table.advance(10_000);
        assert!(table.is_home());
    }

    #[test]
    fn test_jam() {
        let mut table = Turntable::new(RotationState::Rot0, 45);
        table.jam();
        table.set_command(RotationCommand::ClockWise);
        table.advance(10_000);
        assert!(table.is_home());
    }
}
