use std::sync::Arc;

use teloxide::{
    prelude::*,
    types::{ForceReply, ReplyMarkup},
    utils::html,
};
use weather_core::{ProviderError, WeatherProvider, WeatherQuery};

use crate::reply;

const START_PROMPT: &str = "Введите город";
const HELP_TEXT: &str = "Бот показывает текущую погоду. Введите название города для показа. \
                         Для уточнения можно добавить двухбуквенный код страны через запятую, \
                         например, Moscow, US";
const NOT_FOUND_TEXT: &str = "Город не найден";

/// What the bot sends back for one inbound text message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotReply {
    /// Fixed prompt asking for a city, with a force-reply affordance.
    Prompt,
    Text(String),
}

/// Dispatcher endpoint: one text message in, at most one chat message out.
///
/// Non-text messages are ignored. Errors other than "city not found" bubble
/// up to the dispatcher's error handler; no partial reply is sent for them.
pub async fn handle_message(
    bot: Bot,
    msg: Message,
    provider: Arc<dyn WeatherProvider>,
) -> anyhow::Result<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    match respond(text, provider.as_ref()).await? {
        BotReply::Prompt => {
            bot.send_message(msg.chat.id, START_PROMPT)
                .reply_markup(ReplyMarkup::ForceReply(ForceReply::new()))
                .await?;
        }
        BotReply::Text(text) => {
            bot.send_message(msg.chat.id, text).await?;
        }
    }

    Ok(())
}

/// Decide the reply for one message. Stateless; the transport glue above is
/// the only thing this function does not cover.
pub async fn respond(
    raw_text: &str,
    provider: &dyn WeatherProvider,
) -> anyhow::Result<BotReply> {
    // User input is embedded into the outbound request and the reply, so
    // HTML-sensitive characters are neutralized up front.
    let text = html::escape(raw_text);

    match text.as_str() {
        "/start" => Ok(BotReply::Prompt),
        "/help" => Ok(BotReply::Text(HELP_TEXT.to_string())),
        _ => {
            let query = WeatherQuery { location: text };

            match provider.current_weather(&query).await {
                Ok(report) => Ok(BotReply::Text(reply::format_report(&report))),
                Err(ProviderError::LocationNotFound { location, message }) => {
                    tracing::warn!(%location, %message, "location not found");
                    Ok(BotReply::Text(NOT_FOUND_TEXT.to_string()))
                }
                Err(ProviderError::Other(err)) => Err(err),
            }
        }
    }
}
