use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Status;

/// Every state change in the engine produces an Event.
/// The presentation layer observes command and `tick()` return values, or
/// polls [`snapshot`](crate::TimerEngine::snapshot) -- it never mutates
/// timer state itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SessionStarted {
        total_rounds: u32,
        round_secs: u64,
        at: DateTime<Utc>,
    },
    /// A new fighting phase began (round 2 onward; round 1 is part of
    /// `SessionStarted`).
    RoundStarted {
        round: u32,
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    RestStarted {
        after_round: u32,
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    /// One-time end-of-round warning.
    Warning {
        round: u32,
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    SessionPaused {
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    SessionResumed {
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    /// The current phase was reset to its configured duration.
    RoundRestarted {
        round: u32,
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    SessionCompleted {
        rounds: u32,
        at: DateTime<Utc>,
    },
    SessionStopped {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        status: Status,
        current_round: u32,
        total_rounds: u32,
        remaining_ms: u64,
        phase_total_ms: u64,
        is_warning: bool,
        at: DateTime<Utc>,
    },
}
