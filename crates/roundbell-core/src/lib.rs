//! # Roundbell Core Library
//!
//! Core business logic for Roundbell, a round-based interval timer for
//! combat-sport training: fighting and resting phases alternate over a
//! fixed round count, with a one-time warning near the end of each round.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a wall-clock-delta state machine with no internal
//!   threads -- the host loop calls `tick()` periodically, and each tick
//!   decrements by the measured delta so throttled or suspended hosts never
//!   lose wall-clock accuracy
//! - **Effect Ports**: capability traits for sound, haptic, and wake-lock
//!   feedback, with no-op-safe null implementations; failures are logged
//!   and dropped, never propagated into the tick loop
//! - **Storage**: TOML-based preferences and custom presets
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: phase/round state machine and effect orchestration
//! - [`SessionConfig`] / [`TimerState`]: the caller-visible data model
//! - [`PortSet`]: one concrete implementation per effect port, selected
//!   for a [`DeviceProfile`] before engine construction
//! - [`Clock`]: monotonic time source, swappable for a simulated clock

pub mod clock;
pub mod error;
pub mod events;
pub mod ports;
pub mod storage;
pub mod timer;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use error::{ConfigError, CoreError, PortError};
pub use events::Event;
pub use ports::{
    DeviceProfile, HapticPort, NullHaptic, NullSound, NullWakeLock, PortSet, SoundKind, SoundPort,
    WakeLockPort,
};
pub use storage::AppConfig;
pub use timer::{builtin_presets, Preset, SessionConfig, Status, TimerEngine, TimerState};
