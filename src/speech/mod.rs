//! Voice settings and fire-and-forget speech playback.

pub mod synthesis;
pub mod voice;

pub use synthesis::{LoggingSurface, SpeechCommand, SpeechPipeline, SpeechSurface, Utterance};
pub use voice::{VoiceSettings, SPEECH_PARAM_MAX, SPEECH_PARAM_MIN, VOICE_NAMES};
