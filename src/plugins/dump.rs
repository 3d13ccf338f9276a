//! Object dump commands.
//!
//! Pretty-print Bot API objects as JSON inside `<pre>` blocks.

use serde::Serialize;
use teloxide::prelude::*;
use teloxide::types::{FileMeta, Me, ParseMode};
use tracing::{debug, warn};

use crate::bot::ThrottledBot;
use crate::formatting::escape_html;
use crate::utils::truncate;

/// Longest JSON text (in characters) put into one message.
const MAX_DUMP_CHARS: usize = 4000;

/// Render a value as escaped, pretty-printed JSON in a `<pre>` block.
pub fn json_block<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let json = serde_json::to_string_pretty(value)?;
    let json = truncate(&json, MAX_DUMP_CHARS, "…");
    Ok(format!("<pre>{}</pre>", escape_html(&json)))
}

async fn send_dump<T: Serialize>(bot: &ThrottledBot, chat_id: ChatId, value: &T) -> anyhow::Result<()> {
    bot.send_message(chat_id, json_block(value)?)
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

/// Handle /dumpuser - dump the sender.
pub async fn dumpuser_command(bot: ThrottledBot, msg: Message) -> anyhow::Result<()> {
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };
    send_dump(&bot, msg.chat.id, user).await
}

/// Handle /dumpchat - dump the current chat.
pub async fn dumpchat_command(bot: ThrottledBot, msg: Message) -> anyhow::Result<()> {
    send_dump(&bot, msg.chat.id, &msg.chat).await
}

/// Handle /dumpbot - dump the bot's own user.
pub async fn dumpbot_command(bot: ThrottledBot, msg: Message, me: Me) -> anyhow::Result<()> {
    send_dump(&bot, msg.chat.id, &me).await
}

/// File carried by a message: document, first photo size or video.
pub fn attached_file(msg: &Message) -> Option<&FileMeta> {
    msg.document()
        .map(|doc| &doc.file)
        .or_else(|| msg.photo().and_then(|sizes| sizes.first()).map(|photo| &photo.file))
        .or_else(|| msg.video().map(|video| &video.file))
}

/// Handle /dumpreply - dump the replied message and its file info.
pub async fn dumpreply_command(bot: ThrottledBot, msg: Message) -> anyhow::Result<()> {
    let chat_id = msg.chat.id;
    let Some(reply) = msg.reply_to_message() else {
        debug!("dumpreply without a reply in chat {}", chat_id);
        return Ok(());
    };

    send_dump(&bot, chat_id, reply).await?;

    let Some(file) = attached_file(reply) else {
        return Ok(());
    };

    match bot.get_file(file.id.clone()).await {
        Ok(info) => {
            bot.send_message(chat_id, format!("<b>File info:</b>\n{}", json_block(&info)?))
                .parse_mode(ParseMode::Html)
                .await?;
        }
        Err(e) => {
            warn!("getFile failed for {:?}: {}", file.id, e);
            bot.send_message(chat_id, "❌ Could not get file info.").await?;
        }
    }
    Ok(())
}
