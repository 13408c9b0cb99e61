//! Binary crate for the weather Telegram bot.
//!
//! This crate focuses on:
//! - Transport wiring (long polling, dispatch)
//! - The per-message handler
//! - Human-friendly reply formatting

use std::sync::Arc;

use teloxide::{dptree, error_handlers::LoggingErrorHandler, prelude::*};
use weather_core::{Config, WeatherProvider, provider::openweather::OpenWeatherProvider};

mod handler;
mod reply;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Missing credentials terminate the process before any network activity.
    let config = Config::from_env()?;

    let bot = Bot::new(config.bot_token);
    let provider: Arc<dyn WeatherProvider> =
        Arc::new(OpenWeatherProvider::new(config.openweather_api_key));

    tracing::info!("Starting weather bot");

    let schema = Update::filter_message().endpoint(handler::handle_message);

    Dispatcher::builder(bot, schema)
        .dependencies(dptree::deps![provider])
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Message handling failed",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
