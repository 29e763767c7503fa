use serde::{Deserialize, Serialize};

use crate::error::PortError;

/// The sounds the engine can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundKind {
    /// Phase-boundary bell.
    Bell,
    /// One-time end-of-round warning.
    Warning,
}

/// Audio feedback channel.
///
/// `initialize`/`cleanup` bracket a run; `cleanup` runs on every exit
/// path (stop or completion) and must be idempotent. The background loop
/// keeps a near-silent signal going so a backgrounded host does not
/// throttle the tick callbacks - profiles that don't need it no-op.
pub trait SoundPort: Send {
    /// Acquire the underlying audio resources.
    fn initialize(&mut self) -> Result<(), PortError>;

    /// Fire-and-forget playback.
    fn play(&mut self, kind: SoundKind) -> Result<(), PortError>;

    fn start_background_loop(&mut self) -> Result<(), PortError>;

    fn stop_background_loop(&mut self) -> Result<(), PortError>;

    /// Volume in `0.0..=1.0`; implementations clamp out-of-range input.
    fn set_volume(&mut self, volume: f32) -> Result<(), PortError>;

    /// Release audio resources. Idempotent, safe when never initialized.
    fn cleanup(&mut self) -> Result<(), PortError>;
}
