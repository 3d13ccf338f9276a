//! Reply keyboard removal.

use teloxide::prelude::*;
use teloxide::types::KeyboardRemove;

use crate::bot::ThrottledBot;

/// Handle /resetkb and its aliases - remove any custom reply keyboard.
pub async fn reset_keyboard_command(bot: ThrottledBot, msg: Message) -> anyhow::Result<()> {
    bot.send_message(msg.chat.id, "🗑 Keyboard has been removed!")
        .reply_markup(KeyboardRemove::new())
        .await?;
    Ok(())
}
