//! Block tracking for private chats.
//!
//! Logs when a user blocks or unblocks the bot.

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::ChatMemberUpdated;
use tracing::{debug, info};

use crate::chat::BlockStatus;

/// Returns the handler for `my_chat_member` updates in private chats.
pub fn handler() -> UpdateHandler<anyhow::Error> {
    dptree::filter(|update: ChatMemberUpdated| update.chat.is_private()).endpoint(block_handler)
}

async fn block_handler(update: ChatMemberUpdated) -> anyhow::Result<()> {
    let user = &update.from;
    let status = BlockStatus::from_update(Some(&update));

    if status.is_blocked {
        info!("User {} blocked the bot", user.id);
    } else if status.has_unblocked {
        info!("User {} unblocked the bot", user.id);
    } else {
        debug!(
            "Bot membership changed in chat {} without a block transition",
            update.chat.id
        );
    }
    Ok(())
}
