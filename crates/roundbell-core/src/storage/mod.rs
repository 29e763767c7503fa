mod config;

pub use config::{AppConfig, NotificationsConfig};

use std::path::PathBuf;

/// Returns `~/.config/roundbell[-dev]/` based on ROUNDBELL_ENV.
///
/// Set ROUNDBELL_ENV=dev to keep development preferences separate.
pub fn config_dir() -> PathBuf {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("ROUNDBELL_ENV").unwrap_or_else(|_| "production".to_string());

    if env == "dev" {
        base_dir.join("roundbell-dev")
    } else {
        base_dir.join("roundbell")
    }
}
