use teloxide::prelude::*;
use teloxide::types::InputFile;
use std::error::Error;

use crate::bot_state::BotState;
use crate::cards;
use crate::handlers::utils::{card_caption, card_image_url};
use crate::intent::{interpret, Intent};
use crate::weather::{Units, WeatherClient};

const CITY_PROMPT: &str =
    "Please provide a city name after 'weather' to get weather information.";

pub async fn message_handler(
    bot: Bot,
    msg: Message,
    state: BotState,
    weather: WeatherClient,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    // Commands are already handled in command_handler.
    if text.starts_with('/') {
        return Ok(());
    }

    match interpret(text) {
        Intent::PromptForCity => {
            bot.send_message(msg.chat.id, CITY_PROMPT).await?;
        }
        Intent::ToggleUnits => {
            let use_imperial = state.toggle_units(msg.chat.id).await;
            let units = Units::from_toggle(use_imperial);
            bot.send_message(
                msg.chat.id,
                format!("Temperature units toggled to {}.", units.name()),
            )
            .await?;
        }
        Intent::WeatherRequest { city } => {
            let _ = bot
                .send_chat_action(msg.chat.id, teloxide::types::ChatAction::Typing)
                .await;

            let units = Units::from_toggle(state.use_imperial(msg.chat.id).await);
            let lookup = weather.current(&city, units).await;
            let card = cards::weather_card(&lookup, units);

            log::info!("Weather card built for '{}' ({})", city, units.as_query());

            // Telegram has no Adaptive Card renderer, so the card is adapted:
            // its image becomes the photo, its text blocks become the caption.
            let caption = format!(
                "Here is the weather information:\n\n{}",
                card_caption(&card)
            );

            match card_image_url(&card) {
                Some(url) => {
                    bot.send_photo(msg.chat.id, InputFile::url(url.parse()?))
                        .caption(caption)
                        .await?;
                }
                None => {
                    bot.send_message(msg.chat.id, caption).await?;
                }
            }
        }
        Intent::Unhandled => {}
    }

    Ok(())
}
