pub mod assistant;
pub mod config;
pub mod fetch;
pub mod messages;
pub mod session;
pub mod speech;
pub mod ui;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum FloatChatError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Malformed payload: {0}")]
    Payload(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Channel error: {0}")]
    Channel(String),
}

impl From<reqwest::Error> for FloatChatError {
    fn from(e: reqwest::Error) -> Self {
        FloatChatError::Http(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FloatChatError>;
