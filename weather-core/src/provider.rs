use crate::{WeatherQuery, WeatherReport};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Errors a provider can report for a single query.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider could not resolve the queried location. Recovered by the
    /// caller with a fixed user-facing reply; never retried.
    #[error("location '{location}' not found: {message}")]
    LocationNotFound { location: String, message: String },

    /// Transport, body-read, or decode failure. The query stays unanswered.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A source of current weather conditions, keyed by free-form location text.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherReport, ProviderError>;
}
