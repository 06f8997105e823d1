//! Phase stall watchdog
//!
//! Tracks how long the machine has stayed in its current phase and reports
//! a stall once that exceeds the configured limit for the phase.

use crate::config::WatchdogConfig;
use crate::state::Phase;

/// Wait that has exceeded its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StallKind {
    /// Limit switch never closed
    Rotation,
    /// Neighbor never cleared the hand-over
    Handshake,
    /// Item never arrived, or the neighbor never confirmed it
    Translation,
}

/// Watchdog verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SafetyStatus {
    /// Current wait within limits
    Ok,
    /// Current wait exceeded its limit
    Stalled(StallKind),
}

/// Stall watchdog
///
/// Feed it the machine's phase with a timestamp as often as the machine is
/// ticked. Re-entering a phase restarts its timer.
#[derive(Debug, Clone)]
pub struct StallWatchdog {
    config: WatchdogConfig,
    /// Phase seen on the last observation
    phase: Phase,
    /// When `phase` was entered (ms)
    entered_ms: u64,
}

impl StallWatchdog {
    /// Create a new watchdog
    pub fn new(config: WatchdogConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            entered_ms: 0,
        }
    }

    /// Record the machine's phase at `now_ms` and check its age
    pub fn observe(&mut self, phase: Phase, now_ms: u64) -> SafetyStatus {
        if phase != self.phase {
            self.phase = phase;
            self.entered_ms = now_ms;
        }

        let Some((kind, limit_ms)) = self.limit(phase) else {
            return SafetyStatus::Ok;
        };

        if self.elapsed_ms(now_ms) >= u64::from(limit_ms) {
            SafetyStatus::Stalled(kind)
        } else {
            SafetyStatus::Ok
        }
    }

    /// Time spent in the current phase
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.entered_ms)
    }

    /// Phase seen on the last observation
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Forget timing history, as if idle since `now_ms`
    pub fn reset(&mut self, now_ms: u64) {
        self.phase = Phase::Idle;
        self.entered_ms = now_ms;
    }

    fn limit(&self, phase: Phase) -> Option<(StallKind, u32)> {
        match phase {
            Phase::Idle => None,
            Phase::Orienting => self
                .config
                .rotation_timeout_ms
                .map(|t| (StallKind::Rotation, t)),
            Phase::Handshaking => self
                .config
                .handshake_timeout_ms
                .map(|t| (StallKind::Handshake, t)),
            Phase::Translating => self
                .config
                .translation_timeout_ms
                .map(|t| (StallKind::Translation, t)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> WatchdogConfig {
        WatchdogConfig {
            rotation_timeout_ms: Some(1000),
            handshake_timeout_ms: Some(500),
            translation_timeout_ms: None,
        }
    }

    #[test]
    fn test_idle_never_stalls() {
        let mut wd = StallWatchdog::new(config());
        assert_eq!(wd.observe(Phase::Idle, 0), SafetyStatus::Ok);
        assert_eq!(wd.observe(Phase::Idle, 1_000_000), SafetyStatus::Ok);
    }

    #[test]
    fn test_rotation_stall() {
        let mut wd = StallWatchdog::new(config());
        assert_eq!(wd.observe(Phase::Orienting, 100), SafetyStatus::Ok);
        assert_eq!(wd.observe(Phase::Orienting, 1099), SafetyStatus::Ok);
        assert_eq!(
            wd.observe(Phase::Orienting, 1100),
            SafetyStatus::Stalled(StallKind::Rotation)
        );
        // Reported for as long as the condition persists
        assert_eq!(
            wd.observe(Phase::Orienting, 5000),
            SafetyStatus::Stalled(StallKind::Rotation)
        );
    }

    #[test]
    fn test_phase_change_restarts_timer() {
        let mut wd = StallWatchdog::new(config());
        wd.observe(Phase::Orienting, 0);
        assert_eq!(wd.observe(Phase::Handshaking, 900), SafetyStatus::Ok);
        assert_eq!(wd.elapsed_ms(900), 0);
        assert_eq!(
            wd.observe(Phase::Handshaking, 1400),
            SafetyStatus::Stalled(StallKind::Handshake)
        );
    }

    #[test]
    fn test_disabled_limit() {
        let mut wd = StallWatchdog::new(config());
        wd.observe(Phase::Translating, 0);
        assert_eq!(wd.observe(Phase::Translating, u64::MAX), SafetyStatus::Ok);
    }

    #[test]
    fn test_reset() {
        let mut wd = StallWatchdog::new(config());
        wd.observe(Phase::Orienting, 0);
        wd.reset(2000);
        assert_eq!(wd.phase(), Phase::Idle);
        assert_eq!(wd.observe(Phase::Orienting, 2500), SafetyStatus::Ok);
    }

    #[test]
    fn test_clock_going_backwards_is_not_a_stall() {
        let mut wd = StallWatchdog::new(config());
        wd.observe(Phase::Orienting, 5000);
        assert_eq!(wd.observe(Phase::Orienting, 10), SafetyStatus::Ok);
    }
}
