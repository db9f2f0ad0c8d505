//! External data fetchers.
//!
//! Each fetcher issues one GET with a short timeout and collapses every
//! failure kind into a single caller-facing apology string.

pub mod news;
pub mod weather;

pub use news::{NewsClient, NewsConfig, NEWS_UNAVAILABLE, NO_NEWS_FOUND};
pub use weather::{WeatherClient, WeatherConfig, WEATHER_UNAVAILABLE};
