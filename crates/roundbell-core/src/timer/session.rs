use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Immutable per-run session configuration. Durations are whole seconds;
/// internal arithmetic happens in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Length of a fighting phase, seconds.
    pub round_secs: u64,
    /// Length of the resting phase between rounds, seconds. May be zero.
    pub rest_secs: u64,
    /// Number of fighting phases in the session.
    pub total_rounds: u32,
    /// Threshold before round end at which the one-time warning fires,
    /// seconds. Must be shorter than the round.
    pub warning_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            round_secs: 180,
            rest_secs: 60,
            total_rounds: 3,
            warning_secs: 10,
        }
    }
}

impl SessionConfig {
    /// Round length in milliseconds.
    ///
    /// Uses saturating arithmetic to prevent overflow with large values.
    pub fn round_ms(&self) -> u64 {
        self.round_secs.saturating_mul(1000)
    }

    pub fn rest_ms(&self) -> u64 {
        self.rest_secs.saturating_mul(1000)
    }

    pub fn warning_ms(&self) -> u64 {
        self.warning_secs.saturating_mul(1000)
    }

    /// Total session length assuming no pauses: all rounds plus the rests
    /// between them (no rest after the final round).
    pub fn total_secs(&self) -> u64 {
        let rests = u64::from(self.total_rounds.saturating_sub(1));
        self.round_secs
            .saturating_mul(u64::from(self.total_rounds))
            .saturating_add(self.rest_secs.saturating_mul(rests))
    }

    /// Validate before a run starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.round_secs == 0 {
            return Err(ConfigError::ZeroRoundDuration);
        }
        if self.total_rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        if self.warning_secs >= self.round_secs {
            return Err(ConfigError::WarningExceedsRound {
                warning_secs: self.warning_secs,
                round_secs: self.round_secs,
            });
        }
        Ok(())
    }
}

/// A named session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub config: SessionConfig,
    /// True for user-defined presets stored in the app config.
    #[serde(default)]
    pub custom: bool,
}

/// The built-in presets, in display order.
pub fn builtin_presets() -> Vec<Preset> {
    fn preset(id: &str, name: &str, config: SessionConfig) -> Preset {
        Preset {
            id: id.into(),
            name: name.into(),
            config,
            custom: false,
        }
    }

    vec![
        preset(
            "boxing",
            "Boxing",
            SessionConfig {
                round_secs: 180,
                rest_secs: 60,
                total_rounds: 3,
                warning_secs: 10,
            },
        ),
        preset(
            "mma",
            "MMA",
            SessionConfig {
                round_secs: 300,
                rest_secs: 60,
                total_rounds: 5,
                warning_secs: 10,
            },
        ),
        preset(
            "sparring",
            "Sparring",
            SessionConfig {
                round_secs: 120,
                rest_secs: 30,
                total_rounds: 6,
                warning_secs: 10,
            },
        ),
        preset(
            "hiit",
            "HIIT",
            SessionConfig {
                round_secs: 40,
                rest_secs: 20,
                total_rounds: 8,
                warning_secs: 5,
            },
        ),
    ]
}
