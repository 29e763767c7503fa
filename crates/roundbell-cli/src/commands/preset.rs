use clap::Subcommand;
use roundbell_core::{AppConfig, Preset, SessionConfig};

#[derive(Subcommand)]
pub enum PresetAction {
    /// List built-in and custom presets
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a single preset as JSON
    Show { id: String },
    /// Save a custom preset (replaces an existing one with the same id)
    Save {
        id: String,
        /// Display name, defaults to the id
        #[arg(long)]
        name: Option<String>,
        /// Fighting phase length in seconds
        #[arg(long, default_value_t = 180)]
        round_secs: u64,
        /// Rest phase length in seconds
        #[arg(long, default_value_t = 60)]
        rest_secs: u64,
        /// Number of rounds
        #[arg(long, default_value_t = 3)]
        rounds: u32,
        /// Warning threshold before round end, in seconds
        #[arg(long, default_value_t = 10)]
        warning_secs: u64,
    },
    /// Delete a custom preset
    Delete { id: String },
}

pub fn run(action: PresetAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = AppConfig::load()?;
    match action {
        PresetAction::List { json } => {
            let presets = app.all_presets();
            if json {
                println!("{}", serde_json::to_string_pretty(&presets)?);
            } else {
                for p in presets {
                    let tag = if p.custom { " (custom)" } else { "" };
                    println!(
                        "{:<12} {} x {}s fight / {}s rest, warn at {}s{}",
                        p.id,
                        p.config.total_rounds,
                        p.config.round_secs,
                        p.config.rest_secs,
                        p.config.warning_secs,
                        tag
                    );
                }
            }
        }
        PresetAction::Show { id } => {
            let preset = app
                .find_preset(&id)
                .ok_or_else(|| format!("no preset named '{id}'"))?;
            println!("{}", serde_json::to_string_pretty(&preset)?);
        }
        PresetAction::Save {
            id,
            name,
            round_secs,
            rest_secs,
            rounds,
            warning_secs,
        } => {
            let config = SessionConfig {
                round_secs,
                rest_secs,
                total_rounds: rounds,
                warning_secs,
            };
            config.validate()?;
            app.presets.retain(|p| p.id != id);
            app.presets.push(Preset {
                id: id.clone(),
                name: name.unwrap_or_else(|| id.clone()),
                config,
                custom: true,
            });
            app.save()?;
            println!("saved preset '{id}'");
        }
        PresetAction::Delete { id } => {
            let before = app.presets.len();
            app.presets.retain(|p| p.id != id);
            if app.presets.len() == before {
                return Err(format!("no custom preset named '{id}'").into());
            }
            app.save()?;
            println!("deleted preset '{id}'");
        }
    }
    Ok(())
}
