//! Session wiring.
//!
//! A session owns the background workers for one conversation and hands
//! the shell an explicit handle instead of ambient global state.

use crate::assistant::{AssistantCommand, AssistantEvent, AssistantPipeline};
use crate::config::AppConfig;
use crate::speech::{LoggingSurface, SpeechCommand, SpeechPipeline, SpeechSurface, VoiceSettings};
use crate::Result;
use crossbeam_channel::{Receiver, Sender};
use tracing::info;

/// Channel endpoints the shell uses to talk to the background workers.
#[derive(Clone)]
pub struct SessionHandle {
    pub assistant_tx: Sender<AssistantCommand>,
    pub assistant_events: Receiver<AssistantEvent>,
    pub speech_tx: Sender<SpeechCommand>,
    /// Voice settings the session starts with.
    pub initial_voice: VoiceSettings,
}

/// Start the assistant and speech workers for one session, speaking
/// through the default logging surface.
pub fn start(config: AppConfig) -> Result<SessionHandle> {
    start_with_surface(config, Box::new(LoggingSurface))
}

/// Start a session with a custom speech surface.
pub fn start_with_surface(
    config: AppConfig,
    surface: Box<dyn SpeechSurface>,
) -> Result<SessionHandle> {
    config.validate();

    let assistant = AssistantPipeline::new(config.assistant.clone());
    let assistant_tx = assistant.command_sender();
    let assistant_events = assistant.event_receiver();
    assistant.start_worker()?;

    let speech = SpeechPipeline::new();
    let speech_tx = speech.command_sender();
    speech.start_worker(surface);

    info!("Session started");

    Ok(SessionHandle {
        assistant_tx,
        assistant_events,
        speech_tx,
        initial_voice: config.voice,
    })
}
