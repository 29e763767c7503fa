use crate::error::PortError;

/// Screen-stay-awake request channel.
///
/// `acquire` is best-effort: a platform rejection must not prevent the
/// session from starting. `release` is idempotent and safe to call when
/// the lock was never acquired - the underlying subsystem is shared with
/// the rest of the process.
pub trait WakeLockPort: Send {
    fn acquire(&mut self) -> Result<(), PortError>;

    fn release(&mut self) -> Result<(), PortError>;

    fn is_supported(&self) -> bool;
}
