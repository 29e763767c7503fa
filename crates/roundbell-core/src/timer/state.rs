use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Idle,
    Fighting,
    Resting,
    Paused,
    /// Terminal for the run; `stop` resets back to `Idle`.
    Complete,
}

impl Status {
    /// Whether ticks decrement time in this status.
    pub fn is_counting(self) -> bool {
        matches!(self, Status::Fighting | Status::Resting)
    }
}

/// Observable timer state.
///
/// Owned and mutated only by [`TimerEngine`](crate::TimerEngine); the
/// presentation layer reads it via `state()` or snapshot events. State
/// mutation always completes before the effects for a transition fire, so
/// a read immediately after a command sees post-transition values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub status: Status,
    /// 0 when idle/complete, else 1..=total_rounds.
    pub current_round: u32,
    /// Milliseconds remaining in the current phase. Never underflows.
    pub remaining_ms: u64,
    /// True iff fighting and within the warning threshold.
    pub is_warning: bool,
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            status: Status::Idle,
            current_round: 0,
            remaining_ms: 0,
            is_warning: false,
        }
    }
}

impl TimerState {
    /// Seconds remaining, rounded up so a display never shows 0:00 early.
    pub fn remaining_secs_ceil(&self) -> u64 {
        self.remaining_ms.div_ceil(1000)
    }
}
