//! Shell state for one chat session.

use crate::assistant::{AssistantCommand, AssistantEvent};
use crate::messages::{Message, MessageStorage};
use crate::session::SessionHandle;
use crate::speech::{SpeechCommand, VoiceSettings};
use crossbeam_channel::{Receiver, Sender as ChannelSender};
use tracing::debug;
use uuid::Uuid;

/// Central shell state. One query is in flight at a time; the shell
/// disables input while a response is pending.
pub struct AppState {
    /// Conversation history (thread-safe)
    pub messages: MessageStorage,

    /// Current text input
    pub input_text: String,

    /// Voice used for spoken replies
    pub voice: VoiceSettings,

    /// True while a query is in flight
    pub awaiting_response: bool,

    /// Request the shell is waiting on
    pending_request: Option<Uuid>,

    /// Channel to send assistant commands
    pub assistant_tx: Option<ChannelSender<AssistantCommand>>,

    /// Channel to receive assistant events
    pub assistant_events: Option<Receiver<AssistantEvent>>,

    /// Channel to send speech commands (fire-and-forget)
    pub speech_tx: Option<ChannelSender<SpeechCommand>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create a detached state with no backend connected. Queries are still
    /// appended to the history; no replies will arrive.
    pub fn new() -> Self {
        Self {
            messages: MessageStorage::new(),
            input_text: String::new(),
            voice: VoiceSettings::default(),
            awaiting_response: false,
            pending_request: None,
            assistant_tx: None,
            assistant_events: None,
            speech_tx: None,
        }
    }

    /// Create a state wired to a running session.
    pub fn connect(handle: SessionHandle) -> Self {
        Self {
            voice: handle.initial_voice.clone(),
            assistant_tx: Some(handle.assistant_tx),
            assistant_events: Some(handle.assistant_events),
            speech_tx: Some(handle.speech_tx),
            ..Self::new()
        }
    }

    /// Submit a query: append the user message and dispatch it to the
    /// assistant. Empty input and double submissions are filtered here.
    pub fn submit_query(&mut self, text: impl Into<String>) {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() || self.awaiting_response {
            return;
        }

        self.messages.add(Message::user(trimmed));

        if let Some(tx) = &self.assistant_tx {
            let request_id = Uuid::new_v4();
            let command = AssistantCommand::Respond {
                query: trimmed.to_string(),
                request_id,
            };
            if tx.send(command).is_ok() {
                self.pending_request = Some(request_id);
                self.awaiting_response = true;
            }
        }
    }

    /// Submit the contents of the input field.
    pub fn send_message(&mut self) {
        let text = self.input_text.trim().to_string();
        if text.is_empty() || self.awaiting_response {
            return;
        }

        self.input_text.clear();
        self.submit_query(text);
    }

    /// Drain pipeline events. A completed reply is appended to the history
    /// and handed to the speech surface with the session's current voice.
    pub fn poll_events(&mut self) {
        let Some(rx) = &self.assistant_events else {
            return;
        };

        let mut completed = Vec::new();
        while let Ok(event) = rx.try_recv() {
            match event {
                AssistantEvent::Complete {
                    response,
                    request_id,
                    elapsed_ms,
                } => {
                    if self.pending_request == Some(request_id) {
                        self.pending_request = None;
                        self.awaiting_response = false;
                    }
                    debug!("Assistant reply in {}ms", elapsed_ms);
                    completed.push(response);
                }
                AssistantEvent::Shutdown => {
                    debug!("Assistant pipeline shut down");
                    self.awaiting_response = false;
                    self.pending_request = None;
                }
            }
        }

        for response in completed {
            self.messages.add(Message::assistant(response.clone()));
            self.speak(response);
        }
    }

    /// Hand a reply to the speech surface. Never awaited.
    fn speak(&self, text: String) {
        if let Some(tx) = &self.speech_tx {
            let _ = tx.send(SpeechCommand::Speak {
                text,
                settings: self.voice.clone(),
            });
        }
    }

    /// Re-establish the slider bounds after any voice control update.
    pub fn apply_voice_bounds(&mut self) {
        self.voice.clamp();
    }

    /// Clear the conversation.
    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }
}
