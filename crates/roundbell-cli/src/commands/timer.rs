use std::io::{self, Write};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use clap::Subcommand;
use roundbell_core::{AppConfig, Event, MonotonicClock, SessionConfig, Status, TimerEngine};

use crate::platform;

/// How often the host loop ticks the engine. The engine is delta-based,
/// so this only bounds display latency, not accuracy.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run a session in the foreground until it completes
    Run {
        /// Preset id to load (see `preset list`)
        #[arg(long, conflicts_with_all = ["round_secs", "rest_secs", "rounds", "warning_secs"])]
        preset: Option<String>,
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
        /// Override the configured volume for this run (0-100)
        #[arg(long)]
        volume: Option<u32>,
        /// Disable all feedback channels
        #[arg(long)]
        silent: bool,
        /// Print transition events as JSON lines instead of text
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimerAction::Run {
            preset,
            round_secs,
            rest_secs,
            rounds,
            warning_secs,
            volume,
            silent,
            json,
        } => {
            let app = AppConfig::load()?;
            let config = match preset {
                Some(id) => {
                    app.find_preset(&id)
                        .ok_or_else(|| format!("no preset named '{id}'"))?
                        .config
                }
                None => SessionConfig {
                    round_secs,
                    rest_secs,
                    total_rounds: rounds,
                    warning_secs,
                },
            };

            let profile = platform::detect_profile(silent, &app);
            let ports = platform::ports_for(profile);
            let mut engine = TimerEngine::new(ports, Arc::new(MonotonicClock::new()));
            let gain = match volume {
                Some(v) => v.min(100) as f32 / 100.0,
                None => app.volume_gain(),
            };
            engine.set_volume(gain);

            let started = engine.start(config)?;
            print_event(&started, json)?;

            while engine.status() != Status::Complete {
                thread::sleep(TICK_INTERVAL);
                if let Some(event) = engine.tick() {
                    print_event(&event, json)?;
                }
                if !json {
                    print_countdown(&engine);
                }
            }
            if !json {
                println!();
            }
            engine.stop();
        }
    }
    Ok(())
}

fn print_event(event: &Event, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string(event)?);
        return Ok(());
    }
    match event {
        Event::SessionStarted {
            total_rounds,
            round_secs,
            ..
        } => println!("session started: {total_rounds} rounds of {round_secs}s -- round 1, fight"),
        Event::RoundStarted { round, .. } => {
            println!();
            println!("round {round} -- fight");
        }
        Event::RestStarted { after_round, .. } => {
            println!();
            println!("round {after_round} done -- rest");
        }
        Event::Warning { .. } => {
            println!();
            println!("round ending soon");
        }
        Event::SessionCompleted { rounds, .. } => {
            println!();
            println!("session complete: {rounds} rounds");
        }
        _ => {}
    }
    Ok(())
}

fn print_countdown(engine: &TimerEngine) {
    let state = engine.state();
    let label = match state.status {
        Status::Fighting => "fight",
        Status::Resting => "rest ",
        _ => return,
    };
    let secs = state.remaining_secs_ceil();
    print!(
        "\r[round {}] {} {:02}:{:02} ",
        state.current_round,
        label,
        secs / 60,
        secs % 60
    );
    let _ = io::stdout().flush();
}
