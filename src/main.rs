use teloxide::{prelude::*, utils::command::BotCommands};
use std::env;

mod bot_state;
mod cards;
mod handlers;
mod intent;
mod models;
mod weather;

use crate::bot_state::BotState;
use crate::handlers::{command_handler, message_handler, new_members_handler};
use crate::weather::{WeatherClient, WeatherConfig};

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
enum Command {
    #[command(description = "start the bot")]
    Start,
    #[command(description = "show help")]
    Help,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Starting weather cards bot...");

    let api_key = env::var("OPENWEATHER_API_KEY")
        .expect("OPENWEATHER_API_KEY must be set");

    let weather = WeatherClient::new(WeatherConfig::new(api_key));
    let state = BotState::new();

    let bot = Bot::from_env();

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_handler)
        )
        .branch(
            Update::filter_message()
                .filter(|msg: Message| msg.new_chat_members().is_some())
                .endpoint(new_members_handler)
        )
        .branch(Update::filter_message().endpoint(message_handler));

    log::info!("🚀 Starting dispatcher...");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state, weather])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
