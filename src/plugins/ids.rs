//! User and chat ID commands.

use teloxide::prelude::*;
use teloxide::types::ParseMode;

use super::GROUPS_ONLY;
use crate::bot::ThrottledBot;

/// Handle /myid - show the sender's user ID.
pub async fn myid_command(bot: ThrottledBot, msg: Message) -> anyhow::Result<()> {
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };

    bot.send_message(msg.chat.id, format!("<b>Your ID:</b> <code>{}</code>", user.id))
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

/// Handle /chatid - show the chat ID (groups and channels only).
pub async fn chatid_command(bot: ThrottledBot, msg: Message) -> anyhow::Result<()> {
    let chat_id = msg.chat.id;

    if msg.chat.is_private() {
        bot.send_message(chat_id, GROUPS_ONLY).await?;
        return Ok(());
    }

    bot.send_message(chat_id, format!("<b>Chat ID:</b> <code>{chat_id}</code>"))
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}
