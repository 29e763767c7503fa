//! Effect-port contracts.
//!
//! Feedback channels (sound, haptic, wake lock) vary by device
//! capability. Each is a small trait with a no-op-safe null
//! implementation; exactly one concrete implementation per port is bound
//! before engine construction via a [`PortSet`], and the engine only ever
//! calls the trait. A capability that is missing on the host is not an
//! error: the port no-ops and answers `is_supported() == false`.

mod haptic;
mod null;
mod sound;
mod wake_lock;

pub use haptic::HapticPort;
pub use null::{NullHaptic, NullSound, NullWakeLock};
pub use sound::{SoundKind, SoundPort};
pub use wake_lock::WakeLockPort;

use serde::{Deserialize, Serialize};

/// Capability profile of the host, evaluated once to pick the port
/// implementations for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceProfile {
    /// Interactive host with an audio backend.
    Desktop,
    /// No feedback channels at all (CI, scripts, `--silent`).
    Headless,
}

/// One concrete implementation per effect port.
///
/// The selector that builds this from a [`DeviceProfile`] lives with the
/// platform code; the engine consumes the set opaquely.
pub struct PortSet {
    pub sound: Box<dyn SoundPort>,
    pub haptic: Box<dyn HapticPort>,
    pub wake_lock: Box<dyn WakeLockPort>,
}

impl PortSet {
    /// The safe default: every port is a no-op.
    pub fn null() -> Self {
        Self {
            sound: Box::new(NullSound),
            haptic: Box::new(NullHaptic),
            wake_lock: Box::new(NullWakeLock),
        }
    }
}
