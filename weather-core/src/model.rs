use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One location query, as typed by the user. Lives for one handler invocation.
#[derive(Debug, Clone)]
pub struct WeatherQuery {
    /// City name, optionally with a two-letter country code ("Moscow, US").
    pub location: String,
}

/// Current conditions for one resolved location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    pub country: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    /// Provider's categorical label, e.g. "Clear", "Clouds", "Rain".
    pub condition: String,
    pub observation_time: DateTime<Utc>,
}
