use clap::Subcommand;
use roundbell_core::AppConfig;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print current preferences as TOML
    Show,
    /// Set notification volume (0-100)
    SetVolume { volume: u32 },
    /// Enable or disable sounds
    SetSound { enabled: bool },
    /// Enable or disable vibration
    SetVibration { enabled: bool },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = AppConfig::load()?;
    match action {
        ConfigAction::Show => {
            print!("{}", toml::to_string_pretty(&app)?);
            return Ok(());
        }
        ConfigAction::SetVolume { volume } => {
            if volume > 100 {
                return Err("volume must be 0-100".into());
            }
            app.notifications.volume = volume;
        }
        ConfigAction::SetSound { enabled } => {
            app.notifications.sound = enabled;
        }
        ConfigAction::SetVibration { enabled } => {
            app.notifications.vibration = enabled;
        }
    }
    app.save()?;
    Ok(())
}
