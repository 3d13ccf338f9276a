//! Event handler system.
//!
//! Add new event handlers by:
//! 1. Creating a new file in this directory
//! 2. Adding `pub mod your_event;` below
//! 3. Adding the handler to the matching builder below

pub mod block;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;

/// Build the handler for the bot's own membership updates.
pub fn my_chat_member_handler() -> UpdateHandler<anyhow::Error> {
    dptree::entry().branch(block::handler())
}
