//! Live weather lookup for the monitored float region.

use crate::{FloatChatError, Result};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Caller-facing text when the lookup fails for any reason.
pub const WEATHER_UNAVAILABLE: &str = "Sorry, I couldn't fetch weather data right now.";

/// Configuration for the weather-by-coordinates endpoint.
#[derive(Clone, Debug)]
pub struct WeatherConfig {
    pub base_url: String,
    pub api_key: String,
    /// Observation point. The assistant reports one fixed spot in the
    /// central Indian Ocean regardless of the query text.
    pub latitude: f64,
    pub longitude: f64,
    pub timeout: Duration,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openweathermap.org/data/2.5/weather".to_string(),
            api_key: String::new(),
            latitude: -10.0,
            longitude: 80.0,
            timeout: Duration::from_secs(5),
        }
    }
}

impl WeatherConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    main: MainReadings,
    weather: Vec<Condition>,
    wind: Wind,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f64,
}

/// Client for the current-weather endpoint.
pub struct WeatherClient {
    client: reqwest::Client,
    config: WeatherConfig,
}

impl WeatherClient {
    pub fn new(config: WeatherConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FloatChatError::Config(format!("HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// One-line summary of current conditions, or the apology string.
    /// Timeouts, HTTP errors, and malformed payloads all collapse into the
    /// same caller-facing text.
    pub async fn current_summary(&self) -> String {
        match self.fetch().await {
            Ok(summary) => summary,
            Err(e) => {
                debug!("Weather lookup failed: {e}");
                WEATHER_UNAVAILABLE.to_string()
            }
        }
    }

    async fn fetch(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("lat", self.config.latitude.to_string()),
                ("lon", self.config.longitude.to_string()),
                ("appid", self.config.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: WeatherResponse = response.json().await?;
        let condition = body
            .weather
            .first()
            .ok_or_else(|| FloatChatError::Payload("no weather conditions in response".into()))?;

        Ok(format!(
            "Current weather: {}, Temperature: {}°C, Wind Speed: {} m/s.",
            capitalize(&condition.description),
            body.main.temp,
            body.wind.speed
        ))
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
