//! Chat information commands.

use teloxide::prelude::*;
use teloxide::types::{BotCommand, ParseMode};
use tracing::warn;

use super::GROUPS_ONLY;
use super::dump::json_block;
use crate::bot::ThrottledBot;
use crate::formatting::escape_html;

/// Render commands as an HTML list inside a blockquote.
pub fn commands_html(commands: &[BotCommand]) -> String {
    if commands.is_empty() {
        return "No commands are set.".to_string();
    }
    let list = commands
        .iter()
        .map(|cmd| {
            format!(
                "<b>/{}</b> - {}",
                escape_html(&cmd.command),
                escape_html(&cmd.description)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("<blockquote>{list}</blockquote>")
}

/// Handle /getcommands - list the commands registered with Telegram.
pub async fn getcommands_command(bot: ThrottledBot, msg: Message) -> anyhow::Result<()> {
    let commands = bot.get_my_commands().await?;
    bot.send_message(msg.chat.id, commands_html(&commands))
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

/// Handle /membercount - show how many members the chat has.
pub async fn membercount_command(bot: ThrottledBot, msg: Message) -> anyhow::Result<()> {
    let chat_id = msg.chat.id;

    if msg.chat.is_private() {
        bot.send_message(chat_id, GROUPS_ONLY).await?;
        return Ok(());
    }

    match bot.get_chat_member_count(chat_id).await {
        Ok(count) => {
            bot.send_message(chat_id, format!("👥 This chat has <b>{count}</b> members"))
                .parse_mode(ParseMode::Html)
                .await?;
        }
        Err(e) => {
            warn!("getChatMemberCount failed for {}: {}", chat_id, e);
            bot.send_message(chat_id, "❌ Could not get member count").await?;
        }
    }
    Ok(())
}

/// Handle /permissions - dump the default member permissions of a group.
pub async fn permissions_command(bot: ThrottledBot, msg: Message) -> anyhow::Result<()> {
    let chat_id = msg.chat.id;

    if msg.chat.is_private() {
        bot.send_message(chat_id, "⚠️ This command only works in groups").await?;
        return Ok(());
    }

    let permissions = match bot.get_chat(chat_id).await {
        Ok(chat) => chat.permissions(),
        Err(e) => {
            warn!("getChat failed for {}: {}", chat_id, e);
            None
        }
    };

    match permissions {
        Some(permissions) => {
            bot.send_message(
                chat_id,
                format!("<b>Chat Permissions:</b>\n{}", json_block(&permissions)?),
            )
            .parse_mode(ParseMode::Html)
            .await?;
        }
        None => {
            bot.send_message(chat_id, "❌ Could not get chat permissions").await?;
        }
    }
    Ok(())
}
