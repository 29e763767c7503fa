//! Round timer engine.
//!
//! The engine is a wall-clock-delta state machine. It does not use
//! internal threads - the host loop is responsible for calling `tick()`
//! periodically, at whatever rate it can sustain (frame callbacks, a
//! 100ms sleep loop, throttled background scheduling). Each tick
//! decrements by the measured delta rather than a fixed step, so a phase
//! always ends at the correct absolute time regardless of callback jitter.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Fighting <-> Resting -> ... -> Complete -> (stop) -> Idle
//!               \_____ Paused _____/
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new(ports, Arc::new(MonotonicClock::new()));
//! engine.start(SessionConfig::default())?;
//! // In a loop:
//! engine.tick(); // Returns Some(Event) on warnings and phase boundaries
//! ```

use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use super::session::SessionConfig;
use super::state::{Status, TimerState};
use crate::clock::Clock;
use crate::error::{ConfigError, PortError};
use crate::events::Event;
use crate::ports::{PortSet, SoundKind};

/// Vibration patterns per transition: alternating on/off milliseconds.
const PULSE_ROUND_START: &[u64] = &[200];
const PULSE_WARNING: &[u64] = &[100];
const PULSE_REST_START: &[u64] = &[200, 100, 200];
const PULSE_COMPLETE: &[u64] = &[200, 100, 200, 100, 200];

/// Core round timer engine.
///
/// Owns the observable [`TimerState`] and the active [`SessionConfig`].
/// Commands return the resulting [`Event`], or `None` when the command
/// does not apply in the current status. Feedback is best-effort: port
/// failures are logged at the dispatch boundary and the effect is dropped
/// for that transition, never interrupting the countdown.
pub struct TimerEngine {
    config: SessionConfig,
    state: TimerState,
    ports: PortSet,
    clock: Arc<dyn Clock>,
    /// Monotonic ms of the previous tick. `None` whenever no tick is
    /// pending (idle, paused, complete) - clearing it is what cancels the
    /// countdown on `pause`/`stop`.
    last_tick_ms: Option<u64>,
    /// Latched once per fighting phase; cleared on every phase entry.
    warning_fired: bool,
    /// Phase that was active when `pause` was called.
    paused_phase: Option<Status>,
}

impl TimerEngine {
    /// Create an engine bound to the given ports and clock.
    ///
    /// Capability selection happens before construction (device profile
    /// to [`PortSet`]); the engine only ever talks to the trait objects
    /// and never learns which concrete variant is active.
    pub fn new(ports: PortSet, clock: Arc<dyn Clock>) -> Self {
        Self {
            config: SessionConfig::default(),
            state: TimerState::default(),
            ports,
            clock,
            last_tick_ms: None,
            warning_fired: false,
            paused_phase: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn status(&self) -> Status {
        self.state.status
    }

    /// Total length of the current phase in milliseconds.
    pub fn phase_total_ms(&self) -> u64 {
        match self.state.status {
            Status::Fighting => self.config.round_ms(),
            Status::Resting => self.config.rest_ms(),
            Status::Paused => match self.paused_phase {
                Some(Status::Resting) => self.config.rest_ms(),
                _ => self.config.round_ms(),
            },
            Status::Idle | Status::Complete => 0,
        }
    }

    /// 0.0 .. 1.0 progress within the current phase.
    pub fn phase_progress(&self) -> f64 {
        let total = self.phase_total_ms();
        if total == 0 {
            return 0.0;
        }
        1.0 - (self.state.remaining_ms as f64 / total as f64)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            status: self.state.status,
            current_round: self.state.current_round,
            total_rounds: self.config.total_rounds,
            remaining_ms: self.state.remaining_ms,
            phase_total_ms: self.phase_total_ms(),
            is_warning: self.state.is_warning,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Validate `config` and begin a session.
    ///
    /// Fails fast on an invalid config with nothing mutated. If a run is
    /// already active (any non-idle status, `Complete` included) it is
    /// fully stopped first, resources released - the engine never drives
    /// two runs at once.
    pub fn start(&mut self, config: SessionConfig) -> Result<Event, ConfigError> {
        config.validate()?;
        if self.state.status != Status::Idle {
            self.stop_internal();
        }
        self.config = config;

        // Acquire feedback resources up front. All best-effort: a failed
        // wake lock or missing audio device must not block the start.
        report("sound.initialize", self.ports.sound.initialize());
        report(
            "sound.start_background_loop",
            self.ports.sound.start_background_loop(),
        );
        report("wake_lock.acquire", self.ports.wake_lock.acquire());

        self.state.status = Status::Fighting;
        self.state.current_round = 1;
        self.state.remaining_ms = self.config.round_ms();
        self.state.is_warning = false;
        self.warning_fired = false;
        self.paused_phase = None;
        self.last_tick_ms = Some(self.clock.now_ms());

        report("sound.play", self.ports.sound.play(SoundKind::Bell));
        report(
            "haptic.vibrate",
            self.ports.haptic.vibrate(PULSE_ROUND_START),
        );

        Ok(Event::SessionStarted {
            total_rounds: self.config.total_rounds,
            round_secs: self.config.round_secs,
            at: Utc::now(),
        })
    }

    /// Freeze the countdown.
    ///
    /// Elapsed time up to the pause instant is flushed first; the pause
    /// gap itself is never counted against the remaining time.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.state.status.is_counting() {
            return None;
        }
        self.flush_elapsed();
        self.paused_phase = Some(self.state.status);
        self.state.status = Status::Paused;
        self.last_tick_ms = None;
        Some(Event::SessionPaused {
            remaining_ms: self.state.remaining_ms,
            at: Utc::now(),
        })
    }

    /// Resume the phase that was active at pause time.
    ///
    /// Re-anchors the tick clock to now, so the pause was a true freeze
    /// rather than a suppressed decrement.
    pub fn resume(&mut self) -> Option<Event> {
        if self.state.status != Status::Paused {
            return None;
        }
        self.state.status = match self.paused_phase.take() {
            Some(phase) if self.state.current_round > 0 => phase,
            _ => Status::Idle,
        };
        if self.state.status.is_counting() {
            self.last_tick_ms = Some(self.clock.now_ms());
        }
        Some(Event::SessionResumed {
            remaining_ms: self.state.remaining_ms,
            at: Utc::now(),
        })
    }

    /// Stop the run and reset to idle.
    ///
    /// Idempotent: safe to call at any time, including twice in a row,
    /// after completion, or when never started. Releases the wake lock
    /// and audio resources on every path.
    pub fn stop(&mut self) -> Event {
        self.stop_internal();
        Event::SessionStopped { at: Utc::now() }
    }

    /// Apply the current phase's timeout transition immediately, with the
    /// same effects as a natural expiry.
    ///
    /// Allowed while paused: the transition applies to the phase that was
    /// active at pause time and the engine stays paused in the new phase.
    pub fn skip_round(&mut self) -> Option<Event> {
        match self.state.status {
            Status::Fighting | Status::Resting => Some(self.handle_timeout()),
            Status::Paused => {
                let phase = self.paused_phase?;
                self.state.status = phase;
                let event = self.handle_timeout();
                if self.state.status.is_counting() {
                    self.paused_phase = Some(self.state.status);
                    self.state.status = Status::Paused;
                } else {
                    // Completed while paused - nothing left to resume.
                    self.paused_phase = None;
                }
                Some(event)
            }
            Status::Idle | Status::Complete => None,
        }
    }

    /// Reset the current phase to its configured duration.
    ///
    /// Not a phase entry for the bell - no effects fire, but the warning
    /// latch is cleared so the warning can fire again this round.
    pub fn restart_round(&mut self) -> Option<Event> {
        match self.state.status {
            Status::Fighting => {
                self.state.remaining_ms = self.config.round_ms();
                self.state.is_warning = false;
                self.warning_fired = false;
            }
            Status::Resting => {
                self.state.remaining_ms = self.config.rest_ms();
            }
            Status::Idle | Status::Paused | Status::Complete => return None,
        }
        Some(Event::RoundRestarted {
            round: self.state.current_round,
            remaining_ms: self.state.remaining_ms,
            at: Utc::now(),
        })
    }

    /// Advance the countdown. Call periodically from the host loop.
    ///
    /// The tick anchor moves to now before any other work, so a slow
    /// effect call cannot bleed into the next delta. A single huge delta
    /// (long background suspension) fast-forwards the phase to zero and
    /// the transition fires on this tick - no per-second catch-up.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.state.status.is_counting() {
            return None;
        }
        self.flush_elapsed();

        if self.state.status == Status::Fighting {
            self.state.is_warning = self.state.remaining_ms <= self.config.warning_ms();
            if self.state.is_warning && !self.warning_fired && self.state.remaining_ms > 0 {
                self.warning_fired = true;
                report("sound.play", self.ports.sound.play(SoundKind::Warning));
                report("haptic.vibrate", self.ports.haptic.vibrate(PULSE_WARNING));
                return Some(Event::Warning {
                    round: self.state.current_round,
                    remaining_ms: self.state.remaining_ms,
                    at: Utc::now(),
                });
            }
        }

        if self.state.remaining_ms == 0 {
            return Some(self.handle_timeout());
        }
        None
    }

    /// Forward a volume preference to the sound port.
    pub fn set_volume(&mut self, volume: f32) {
        report("sound.set_volume", self.ports.sound.set_volume(volume));
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn flush_elapsed(&mut self) {
        if let Some(last) = self.last_tick_ms {
            let now = self.clock.now_ms();
            let delta = now.saturating_sub(last);
            // Anchor first: anything slow below must not stretch the next
            // delta.
            self.last_tick_ms = Some(now);
            self.state.remaining_ms = self.state.remaining_ms.saturating_sub(delta);
        }
    }

    /// Phase expiry: the fighting/resting transition table. Only called
    /// while fighting or resting.
    fn handle_timeout(&mut self) -> Event {
        if self.state.status == Status::Resting {
            self.state.status = Status::Fighting;
            self.state.current_round += 1;
            self.state.remaining_ms = self.config.round_ms();
            self.state.is_warning = false;
            self.warning_fired = false;
            let event = Event::RoundStarted {
                round: self.state.current_round,
                remaining_ms: self.state.remaining_ms,
                at: Utc::now(),
            };
            report("sound.play", self.ports.sound.play(SoundKind::Bell));
            report(
                "haptic.vibrate",
                self.ports.haptic.vibrate(PULSE_ROUND_START),
            );
            return event;
        }

        if self.state.current_round < self.config.total_rounds {
            let after_round = self.state.current_round;
            self.state.status = Status::Resting;
            self.state.remaining_ms = self.config.rest_ms();
            self.state.is_warning = false;
            self.warning_fired = false;
            let event = Event::RestStarted {
                after_round,
                remaining_ms: self.state.remaining_ms,
                at: Utc::now(),
            };
            report("sound.play", self.ports.sound.play(SoundKind::Bell));
            report("haptic.vibrate", self.ports.haptic.vibrate(PULSE_REST_START));
            return event;
        }

        // Final round done.
        let rounds = self.state.current_round;
        self.state.status = Status::Complete;
        self.state.current_round = 0;
        self.state.remaining_ms = 0;
        self.state.is_warning = false;
        self.last_tick_ms = None;
        let event = Event::SessionCompleted {
            rounds,
            at: Utc::now(),
        };
        report("sound.play", self.ports.sound.play(SoundKind::Bell));
        report("haptic.vibrate", self.ports.haptic.vibrate(PULSE_COMPLETE));
        // Completion releases everything a stop would, without waiting
        // for the caller.
        self.release_resources();
        event
    }

    fn stop_internal(&mut self) {
        self.last_tick_ms = None;
        self.paused_phase = None;
        self.warning_fired = false;
        self.state = TimerState::default();
        self.release_resources();
    }

    /// Release every held feedback resource. Safe to call redundantly -
    /// the ports' `release`/`cleanup` are idempotent.
    fn release_resources(&mut self) {
        report("wake_lock.release", self.ports.wake_lock.release());
        report(
            "sound.stop_background_loop",
            self.ports.sound.stop_background_loop(),
        );
        report("sound.cleanup", self.ports.sound.cleanup());
    }
}

/// The port dispatch boundary: log the failure, drop the effect.
fn report(op: &str, result: Result<(), PortError>) {
    if let Err(e) = result {
        warn!(op, error = %e, "effect port failure, dropping effect");
    }
}
