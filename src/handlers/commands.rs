use teloxide::prelude::*;
use teloxide::types::ParseMode;
use std::error::Error;

use crate::Command;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    match cmd {
        Command::Start => handle_start(bot, msg).await?,
        Command::Help => handle_help(bot, msg).await?,
    }
    Ok(())
}

async fn handle_start(bot: Bot, msg: Message) -> Result<(), Box<dyn Error + Send + Sync>> {
    let start_text = "🌤 *Welcome to the Open Weather Cards Bot\\!*\n\n\
        Type `weather <city>` to get a current weather card\\.\n\
        Type `toggle units` to switch between Celsius and Fahrenheit\\.\n\n\
        Weather data comes from OpenWeather\\.";

    bot.send_message(msg.chat.id, start_text)
        .parse_mode(ParseMode::MarkdownV2)
        .await?;

    Ok(())
}

async fn handle_help(bot: Bot, msg: Message) -> Result<(), Box<dyn Error + Send + Sync>> {
    bot.send_message(
        msg.chat.id,
        "🌤 *Help*\n\n\
        /start \\- start the bot\n\
        /help \\- show this help\n\n\
        `weather <city>` \\- current weather for a city\n\
        `weather` \\- you will be asked for a city\n\
        `toggle units` \\- switch between Celsius and Fahrenheit",
    )
    .parse_mode(ParseMode::MarkdownV2)
    .await?;

    Ok(())
}
