use anyhow::{Result, anyhow};
use std::env;

/// Environment variable holding the Telegram bot token.
pub const BOT_TOKEN_VAR: &str = "TG_WEATHER_BOT_TOKEN";

/// Environment variable holding the OpenWeather API key.
pub const API_KEY_VAR: &str = "TG_WEATHER_APIKEY";

/// Process-wide configuration, read once at startup and passed to constructors.
#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub openweather_api_key: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A missing or empty variable is a fatal startup error; there is no
    /// config file fallback.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`Config::from_env`], but with an injectable variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            bot_token: require_var(&lookup, BOT_TOKEN_VAR)?,
            openweather_api_key: require_var(&lookup, API_KEY_VAR)?,
        })
    }
}

fn require_var<F>(lookup: &F, name: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let value =
        lookup(name).ok_or_else(|| anyhow!("Required environment variable {name} is not set"))?;

    if value.trim().is_empty() {
        return Err(anyhow!("Environment variable {name} is set but empty"));
    }

    Ok(value)
}
