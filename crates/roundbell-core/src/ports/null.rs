//! No-op port implementations - the safe default for any profile.

use super::{HapticPort, SoundKind, SoundPort, WakeLockPort};
use crate::error::PortError;

/// Sound port that plays nothing.
#[derive(Debug, Default)]
pub struct NullSound;

impl SoundPort for NullSound {
    fn initialize(&mut self) -> Result<(), PortError> {
        Ok(())
    }

    fn play(&mut self, _kind: SoundKind) -> Result<(), PortError> {
        Ok(())
    }

    fn start_background_loop(&mut self) -> Result<(), PortError> {
        Ok(())
    }

    fn stop_background_loop(&mut self) -> Result<(), PortError> {
        Ok(())
    }

    fn set_volume(&mut self, _volume: f32) -> Result<(), PortError> {
        Ok(())
    }

    fn cleanup(&mut self) -> Result<(), PortError> {
        Ok(())
    }
}

/// Haptic port for hosts without a vibration motor.
#[derive(Debug, Default)]
pub struct NullHaptic;

impl HapticPort for NullHaptic {
    fn vibrate(&mut self, _pattern: &[u64]) -> Result<(), PortError> {
        Ok(())
    }

    fn is_supported(&self) -> bool {
        false
    }
}

/// Wake-lock port for hosts without a wake-lock API.
#[derive(Debug, Default)]
pub struct NullWakeLock;

impl WakeLockPort for NullWakeLock {
    fn acquire(&mut self) -> Result<(), PortError> {
        Ok(())
    }

    fn release(&mut self) -> Result<(), PortError> {
        Ok(())
    }

    fn is_supported(&self) -> bool {
        false
    }
}
