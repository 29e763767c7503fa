//! Core error types for roundbell-core.

use thiserror::Error;

/// Core error type for roundbell-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Session configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Effect port errors
    #[error("Effect port error: {0}")]
    Port(#[from] PortError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Preference file parse errors
    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// Preference file serialization errors
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Invalid session configurations, rejected fail-fast by
/// [`TimerEngine::start`](crate::TimerEngine::start) with no state mutated.
/// These are caller programming errors, not runtime faults.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Round duration must be positive
    #[error("round duration must be positive")]
    ZeroRoundDuration,

    /// Total rounds must be positive
    #[error("total rounds must be positive")]
    ZeroRounds,

    /// Warning threshold must leave room inside the round
    #[error("warning time ({warning_secs}s) must be shorter than the round ({round_secs}s)")]
    WarningExceedsRound { warning_secs: u64, round_secs: u64 },
}

/// Failures raised by effect-port implementations.
///
/// These never escape the engine: every port call is dispatched through a
/// logging boundary that reports the failure and drops the effect for that
/// transition. The worst case is a missing bell, never a stalled timer.
#[derive(Error, Debug)]
pub enum PortError {
    /// The capability is missing on this device profile
    #[error("capability not supported on this device profile")]
    Unsupported,

    /// Audio backend failure
    #[error("audio backend error: {0}")]
    Audio(String),

    /// Any other port-internal failure
    #[error("{0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
