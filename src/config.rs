//! Application configuration.
//!
//! API keys come from the environment; everything else has working
//! defaults. A missing key is not fatal: the lookup fails and the
//! assistant answers with its apology line instead.

use crate::assistant::AssistantConfig;
use crate::speech::VoiceSettings;
use std::time::Duration;
use tracing::warn;

/// Environment variable holding the weather API key.
pub const WEATHER_KEY_VAR: &str = "OPENWEATHER_API_KEY";

/// Environment variable holding the news API key.
pub const NEWS_KEY_VAR: &str = "NEWSAPI_API_KEY";

/// Configuration for a complete session.
#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub assistant: AssistantConfig,
    /// Voice the session starts with; the user can change it at runtime.
    pub voice: VoiceSettings,
}

impl AppConfig {
    /// Build a configuration with API keys taken from the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.assistant.weather.api_key = std::env::var(WEATHER_KEY_VAR).unwrap_or_default();
        config.assistant.news.api_key = std::env::var(NEWS_KEY_VAR).unwrap_or_default();
        config
    }

    pub fn with_thinking_delay(mut self, thinking_delay: Duration) -> Self {
        self.assistant.thinking_delay = thinking_delay;
        self
    }

    pub fn with_voice(mut self, voice: VoiceSettings) -> Self {
        self.voice = voice;
        self
    }

    /// Warn about keys that will send every live lookup down the apology
    /// path.
    pub fn validate(&self) {
        if self.assistant.weather.api_key.is_empty() {
            warn!("{WEATHER_KEY_VAR} is not set; weather queries will be unavailable");
        }
        if self.assistant.news.api_key.is_empty() {
            warn!("{NEWS_KEY_VAR} is not set; news queries will be unavailable");
        }
    }
}
