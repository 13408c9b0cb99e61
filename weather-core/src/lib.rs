//! Core library for the weather Telegram bot.
//!
//! This crate defines:
//! - Configuration read from the process environment
//! - Abstraction over weather providers
//! - Shared domain models (queries, reports)
//!
//! It is used by `weather-bot`, but can also be reused by other binaries or services.

pub mod config;
pub mod model;
pub mod provider;

pub use config::Config;
pub use model::{WeatherQuery, WeatherReport};
pub use provider::{ProviderError, WeatherProvider};
