use anyhow::{Context, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::model::{WeatherQuery, WeatherReport};

use super::{ProviderError, WeatherProvider};

const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org/data/2.5";

/// Client for the OpenWeather current-conditions endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different host, e.g. a mock server in tests.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(
        &self,
        query: &WeatherQuery,
    ) -> Result<WeatherReport, ProviderError> {
        let url = format!("{}/weather", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", query.location.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .context("Failed to send request to OpenWeather (current weather)")?;

        // The body is read regardless of HTTP status: OpenWeather reports
        // semantic failures (unknown city, bad key) as a JSON error envelope.
        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather current response body")?;

        parse_current(&query.location, &body)
    }
}

fn parse_current(location: &str, body: &str) -> Result<WeatherReport, ProviderError> {
    let envelope: OwErrorEnvelope =
        serde_json::from_str(body).context("Failed to parse OpenWeather current JSON")?;

    if !envelope.message.is_empty() {
        return Err(ProviderError::LocationNotFound {
            location: location.to_string(),
            message: envelope.message,
        });
    }

    let parsed: OwCurrentResponse = serde_json::from_str(body)
        .context("Failed to parse OpenWeather current weather JSON")?;

    let condition = parsed
        .weather
        .first()
        .map(|w| w.main.clone())
        .ok_or_else(|| anyhow!("OpenWeather response contained no weather entries"))?;

    let observation_time = unix_to_utc(parsed.dt).unwrap_or_else(Utc::now);

    Ok(WeatherReport {
        city: parsed.name,
        country: parsed.sys.country,
        temperature_c: parsed.main.temp,
        feels_like_c: parsed.main.feels_like,
        condition,
        observation_time,
    })
}

/// Error shape shared by all OpenWeather failure responses. Success bodies
/// carry no `message`, so it defaults to empty.
#[derive(Debug, Deserialize)]
struct OwErrorEnvelope {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    #[serde(default)]
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    sys: OwSys,
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(ts, 0)
}
