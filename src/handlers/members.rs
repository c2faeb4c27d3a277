use teloxide::prelude::*;
use teloxide::types::Me;
use std::error::Error;

/// Greet every member added to the chat, skipping the bot itself.
pub async fn new_members_handler(
    bot: Bot,
    msg: Message,
    me: Me,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let Some(members) = msg.new_chat_members() else {
        return Ok(());
    };

    for member in members {
        if member.id == me.user.id {
            continue;
        }

        bot.send_message(
            msg.chat.id,
            format!(
                "Welcome to the Open Weather Adaptive Cards Bot, {}. \
                Type 'weather' followed by a city name to see weather information. \
                You can also type 'toggle units' to switch between Celsius and Fahrenheit.",
                member.first_name
            ),
        )
        .await?;
    }

    Ok(())
}
