//! Configuration type definitions

use crate::safety::StallKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Slowest supported link speed
pub const MIN_BAUDRATE: u32 = 1200;

/// Fastest supported link speed
pub const MAX_BAUDRATE: u32 = 921_600;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Tick interval of 0 ms
    ZeroTickInterval,
    /// Baud rate outside [`MIN_BAUDRATE`]..=[`MAX_BAUDRATE`]
    InvalidBaudrate(u32),
    /// A stall limit of 0 ms would fire immediately
    ZeroTimeout(StallKind),
    /// A stall limit shorter than one tick
    TimeoutShorterThanTick(StallKind),
}

/// Sensor wiring polarity
///
/// A `true` flag means the sensor pulls its pin low when triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SensorPolarity {
    pub light_barrier_inverted: bool,
    pub home_switch_inverted: bool,
    pub quarter_switch_inverted: bool,
}

/// Stall limits per phase (ms); `None` disables the check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WatchdogConfig {
    pub rotation_timeout_ms: Option<u32>,
    pub handshake_timeout_ms: Option<u32>,
    pub translation_timeout_ms: Option<u32>,
}

impl WatchdogConfig {
    /// Quarter turns are bounded by mechanics; neighbor waits depend on
    /// routing and are unbounded.
    pub const DEFAULT: Self = Self {
        rotation_timeout_ms: Some(5000),
        handshake_timeout_ms: None,
        translation_timeout_ms: None,
    };

    /// No stall checks at all
    pub const DISABLED: Self = Self {
        rotation_timeout_ms: None,
        handshake_timeout_ms: None,
        translation_timeout_ms: None,
    };

    fn limits(&self) -> [(StallKind, Option<u32>); 3] {
        [
            (StallKind::Rotation, self.rotation_timeout_ms),
            (StallKind::Handshake, self.handshake_timeout_ms),
            (StallKind::Translation, self.translation_timeout_ms),
        ]
    }
}

impl Default for WatchdogConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete cell configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CellConfig {
    /// Control loop period (ms)
    pub tick_interval_ms: u32,
    /// Neighbor link speed
    pub baudrate: u32,
    /// Sensor wiring
    pub sensors: SensorPolarity,
    /// Stall limits
    pub watchdog: WatchdogConfig,
}

impl CellConfig {
    pub const DEFAULT: Self = Self {
        tick_interval_ms: 10,
        baudrate: 115200,
        sensors: SensorPolarity {
            light_barrier_inverted: false,
            home_switch_inverted: false,
            quarter_switch_inverted: false,
        },
        watchdog: WatchdogConfig::DEFAULT,
    };

    /// Check the configuration for values the firmware cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        if !(MIN_BAUDRATE..=MAX_BAUDRATE).contains(&self.baudrate) {
            return Err(ConfigError::InvalidBaudrate(self.baudrate));
        }

        for (kind, limit) in self.watchdog.limits() {
            match limit {
                Some(0) => return Err(ConfigError::ZeroTimeout(kind)),
                Some(ms) if ms < self.tick_interval_ms => {
                    return Err(ConfigError::TimeoutShorterThanTick(kind))
                }
                _ => {}
            }
        }

        Ok(())
    }
}

impl Default for CellConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
