//! Fire-and-forget speech playback.
//!
//! Responses are handed to an external speech surface as one-way playback
//! instructions. Nothing is awaited and no acknowledgment comes back.

use crate::speech::voice::VoiceSettings;
use crossbeam_channel::{bounded, Receiver, Sender};
use std::thread::{self, JoinHandle};
use tracing::{debug, info};

/// A single playback instruction for the external surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub voice: String,
    pub pitch: f32,
    pub rate: f32,
}

impl Utterance {
    /// Build an utterance from response text and the session's voice
    /// settings. Line breaks are flattened so the instruction stays a
    /// single line.
    pub fn new(text: &str, settings: &VoiceSettings) -> Self {
        Self {
            text: text.replace(['\n', '\r'], " "),
            voice: settings.voice.clone(),
            pitch: settings.pitch,
            rate: settings.rate,
        }
    }
}

/// External rendering surface for spoken output. The caller never waits for
/// playback to start or finish, so implementations must not block.
pub trait SpeechSurface: Send {
    fn speak(&self, utterance: Utterance);
}

/// Default surface: logs the playback instruction.
pub struct LoggingSurface;

impl SpeechSurface for LoggingSurface {
    fn speak(&self, utterance: Utterance) {
        info!(
            voice = %utterance.voice,
            pitch = utterance.pitch,
            rate = utterance.rate,
            "speak: {}",
            utterance.text
        );
    }
}

/// Command sent to the speech pipeline. There is no event channel back.
#[derive(Clone, Debug)]
pub enum SpeechCommand {
    Speak {
        text: String,
        settings: VoiceSettings,
    },
    Shutdown,
}

/// Channel-fed worker that forwards utterances to the speech surface.
pub struct SpeechPipeline {
    command_tx: Sender<SpeechCommand>,
    command_rx: Receiver<SpeechCommand>,
}

impl SpeechPipeline {
    pub fn new() -> Self {
        let (command_tx, command_rx) = bounded(100);
        Self {
            command_tx,
            command_rx,
        }
    }

    /// Get a sender for commands.
    pub fn command_sender(&self) -> Sender<SpeechCommand> {
        self.command_tx.clone()
    }

    /// Start the worker thread that hands utterances to the surface.
    pub fn start_worker(self, surface: Box<dyn SpeechSurface>) -> JoinHandle<()> {
        let command_rx = self.command_rx;

        thread::spawn(move || {
            info!("Speech pipeline worker starting");

            loop {
                match command_rx.recv() {
                    Ok(SpeechCommand::Speak { text, settings }) => {
                        debug!("Speaking response ({} chars)", text.len());
                        surface.speak(Utterance::new(&text, &settings));
                    }
                    Ok(SpeechCommand::Shutdown) => {
                        info!("Speech pipeline worker shutting down");
                        break;
                    }
                    Err(e) => {
                        debug!("Speech command channel closed: {}", e);
                        break;
                    }
                }
            }

            info!("Speech pipeline worker stopped");
        })
    }
}

impl Default for SpeechPipeline {
    fn default() -> Self {
        Self::new()
    }
}
