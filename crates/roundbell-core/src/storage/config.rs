//! TOML-based application preferences.
//!
//! Stores user preferences including:
//! - Notification settings (sound, volume, vibration)
//! - An optional device-profile override
//! - User-defined presets
//!
//! Preferences are stored at `~/.config/roundbell/config.toml`. A missing
//! file means defaults; unknown or missing fields fall back per-field.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::config_dir;
use crate::error::CoreError;
use crate::ports::DeviceProfile;
use crate::timer::{builtin_presets, Preset};

/// Notification preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub sound: bool,
    /// Volume 0-100.
    #[serde(default = "default_volume")]
    pub volume: u32,
    #[serde(default = "default_true")]
    pub vibration: bool,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            sound: true,
            volume: default_volume(),
            vibration: true,
        }
    }
}

/// Application preferences.
///
/// Serialized to/from TOML at `~/.config/roundbell/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub notifications: NotificationsConfig,
    /// Force a device profile instead of probing the host.
    #[serde(default)]
    pub profile: Option<DeviceProfile>,
    /// User-defined presets, listed after the built-ins.
    #[serde(default)]
    pub presets: Vec<Preset>,
}

impl AppConfig {
    pub fn path() -> PathBuf {
        config_dir().join("config.toml")
    }

    /// Load preferences, falling back to defaults when the file is absent.
    pub fn load() -> Result<Self, CoreError> {
        Self::load_from(&Self::path())
    }

    pub fn load_from(path: &Path) -> Result<Self, CoreError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn save(&self) -> Result<(), CoreError> {
        self.save_to(&Self::path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), CoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Built-in presets followed by the user's custom ones.
    pub fn all_presets(&self) -> Vec<Preset> {
        let mut presets = builtin_presets();
        presets.extend(self.presets.iter().cloned());
        presets
    }

    pub fn find_preset(&self, id: &str) -> Option<Preset> {
        self.all_presets().into_iter().find(|p| p.id == id)
    }

    /// Volume as the `0.0..=1.0` gain the sound port expects.
    pub fn volume_gain(&self) -> f32 {
        self.notifications.volume.min(100) as f32 / 100.0
    }
}

fn default_true() -> bool {
    true
}

fn default_volume() -> u32 {
    80
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::SessionConfig;

    #[test]
    fn missing_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(loaded, AppConfig::default());
    }

    #[test]
    fn save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.notifications.volume = 35;
        config.profile = Some(DeviceProfile::Headless);
        config.presets.push(Preset {
            id: "my-drill".into(),
            name: "My Drill".into(),
            config: SessionConfig {
                round_secs: 90,
                rest_secs: 15,
                total_rounds: 10,
                warning_secs: 5,
            },
            custom: true,
        });

        config.save_to(&path).unwrap();
        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_toml_fills_field_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[notifications]\nvolume = 10\n").unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.notifications.volume, 10);
        assert!(loaded.notifications.sound);
        assert!(loaded.notifications.vibration);
        assert!(loaded.presets.is_empty());
        assert_eq!(loaded.profile, None);
    }

    #[test]
    fn custom_presets_follow_builtins() {
        let mut config = AppConfig::default();
        config.presets.push(Preset {
            id: "custom".into(),
            name: "Custom".into(),
            config: SessionConfig::default(),
            custom: true,
        });

        let all = config.all_presets();
        assert_eq!(all.last().unwrap().id, "custom");
        assert!(config.find_preset("boxing").is_some());
        assert!(config.find_preset("custom").is_some());
        assert!(config.find_preset("nope").is_none());
    }

    #[test]
    fn volume_gain_clamps_to_unit_range() {
        let mut config = AppConfig::default();
        config.notifications.volume = 250;
        assert_eq!(config.volume_gain(), 1.0);
        config.notifications.volume = 50;
        assert_eq!(config.volume_gain(), 0.5);
    }
}
