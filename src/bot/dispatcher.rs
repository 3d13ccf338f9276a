//! Update dispatcher setup.
//!
//! Builds the dispatcher with the debug commands and the chat member events.

use teloxide::adaptors::Throttle;
use teloxide::dispatching::{DefaultKey, UpdateHandler};
use teloxide::prelude::*;

use crate::{events, plugins};

/// Bot type with Throttle adaptor for automatic rate limiting.
pub type ThrottledBot = Throttle<Bot>;

/// Dispatcher type shared by the polling and webhook runners.
pub type BotDispatcher = Dispatcher<ThrottledBot, anyhow::Error, DefaultKey>;

/// Build the dispatcher with all handlers.
pub fn build_dispatcher(bot: ThrottledBot) -> BotDispatcher {
    Dispatcher::builder(bot, schema())
        .default_handler(|upd| async move {
            tracing::trace!("Unhandled update: {:?}", upd.kind);
        })
        .enable_ctrlc_handler()
        .build()
}

/// Build the handler schema.
pub fn schema() -> UpdateHandler<anyhow::Error> {
    let message_handler = Update::filter_message().branch(plugins::command_handler());

    let my_chat_member_handler =
        Update::filter_my_chat_member().branch(events::my_chat_member_handler());

    dptree::entry()
        .branch(message_handler)
        .branch(my_chat_member_handler)
}
