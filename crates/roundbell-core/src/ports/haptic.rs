use crate::error::PortError;

/// Vibration feedback channel.
pub trait HapticPort: Send {
    /// Play a vibration pattern: alternating vibrate/pause durations in
    /// milliseconds, starting with a vibration. Best-effort; hosts
    /// without a motor no-op.
    fn vibrate(&mut self, pattern: &[u64]) -> Result<(), PortError>;

    fn is_supported(&self) -> bool;
}
