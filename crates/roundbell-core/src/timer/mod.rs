mod engine;
mod session;
mod state;

pub use engine::TimerEngine;
pub use session::{builtin_presets, Preset, SessionConfig};
pub use state::{Status, TimerState};
