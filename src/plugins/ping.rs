//! Ping command plugin.
//!
//! Measures the round trip of sending a message.

use std::time::Instant;

use teloxide::prelude::*;
use teloxide::types::{ParseMode, ReplyParameters};

use crate::bot::ThrottledBot;

const PONG: &str = "🏓 Pong!";

/// Text of the edited pong message.
pub fn pong_text(original: &str, ms: u128) -> String {
    format!("{original}\n<blockquote>⏱ <b>{ms}ms</b></blockquote>")
}

/// Handle the /ping command - reply, then edit the reply with the latency.
pub async fn ping_command(bot: ThrottledBot, msg: Message) -> anyhow::Result<()> {
    let start = Instant::now();
    let pong = bot
        .send_message(msg.chat.id, PONG)
        .reply_parameters(ReplyParameters::new(msg.id))
        .await?;
    let ms = start.elapsed().as_millis();

    let text = pong_text(pong.text().unwrap_or(PONG), ms);
    bot.edit_message_text(pong.chat.id, pong.id, text)
        .parse_mode(ParseMode::Html)
        .await?;

    Ok(())
}
