//! Platform port implementations and the capability selector.
//!
//! A terminal host gets tone playback through the default audio output,
//! falling back to the terminal bell when no output device exists. There
//! is no vibration motor or screen wake-lock to drive from a terminal, so
//! those ports stay at their null defaults and answer unsupported.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};

use roundbell_core::{AppConfig, DeviceProfile, PortError, PortSet, SoundKind, SoundPort};

/// Decide the capability profile for this invocation.
pub fn detect_profile(silent: bool, app: &AppConfig) -> DeviceProfile {
    if silent || !app.notifications.sound {
        return DeviceProfile::Headless;
    }
    app.profile.unwrap_or(DeviceProfile::Desktop)
}

/// Capability selector: one concrete implementation per port, chosen once
/// before the engine is constructed.
pub fn ports_for(profile: DeviceProfile) -> PortSet {
    match profile {
        DeviceProfile::Desktop => PortSet {
            sound: Box::new(TerminalSound::new()),
            ..PortSet::null()
        },
        DeviceProfile::Headless => PortSet::null(),
    }
}

/// Sound port for terminal hosts.
///
/// The output stream is not kept across calls: each playback spawns a
/// short-lived thread that opens the default device, plays the tone, and
/// drops it. That keeps the port `Send` and makes cleanup trivially
/// idempotent.
pub struct TerminalSound {
    available: bool,
    volume: f32,
}

impl TerminalSound {
    pub fn new() -> Self {
        Self {
            available: false,
            volume: 0.8,
        }
    }

    fn play_tone(&self, freq: f32, length: Duration) {
        if !self.available {
            // No audio device: the terminal bell is the whole effect.
            print!("\x07");
            let _ = io::stdout().flush();
            return;
        }
        let volume = self.volume;
        thread::spawn(move || {
            let Ok((_stream, handle)) = OutputStream::try_default() else {
                return;
            };
            let Ok(sink) = Sink::try_new(&handle) else {
                return;
            };
            sink.set_volume(volume);
            sink.append(SineWave::new(freq).take_duration(length).amplify(0.9));
            sink.sleep_until_end();
        });
    }
}

impl Default for TerminalSound {
    fn default() -> Self {
        Self::new()
    }
}

impl SoundPort for TerminalSound {
    fn initialize(&mut self) -> Result<(), PortError> {
        // Probe once; a missing device is a capability gap, not an error.
        match OutputStream::try_default() {
            Ok(_) => self.available = true,
            Err(e) => {
                tracing::debug!(error = %e, "no audio output, falling back to terminal bell");
                self.available = false;
            }
        }
        Ok(())
    }

    fn play(&mut self, kind: SoundKind) -> Result<(), PortError> {
        match kind {
            SoundKind::Bell => self.play_tone(880.0, Duration::from_millis(600)),
            SoundKind::Warning => self.play_tone(440.0, Duration::from_millis(250)),
        }
        Ok(())
    }

    fn start_background_loop(&mut self) -> Result<(), PortError> {
        // Terminal processes are not throttled while backgrounded.
        Ok(())
    }

    fn stop_background_loop(&mut self) -> Result<(), PortError> {
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) -> Result<(), PortError> {
        self.volume = volume.clamp(0.0, 1.0);
        Ok(())
    }

    fn cleanup(&mut self) -> Result<(), PortError> {
        self.available = false;
        Ok(())
    }
}
