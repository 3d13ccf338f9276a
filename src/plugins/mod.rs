//! Debug command handlers.
//!
//! Add new plugins by:
//! 1. Creating a new file in this directory
//! 2. Adding `pub mod your_plugin;` below
//! 3. Adding the variants to `Command` and the branches to `command_handler()`

pub mod chat_info;
pub mod dump;
pub mod ids;
pub mod keyboard;
pub mod ping;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

/// Reply sent when a group-only command is used in a private chat.
pub(crate) const GROUPS_ONLY: &str = "⚠️ This command only works in groups and channels";

/// All bot commands.
///
/// Aliases are separate variants routed to the same endpoint.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Debug commands:")]
pub enum Command {
    // Keyboard
    #[command(description = "Remove the reply keyboard")]
    Resetkb,
    #[command(description = "Remove the reply keyboard")]
    Resetkeyboard,
    #[command(description = "Remove the reply keyboard")]
    Clearkb,
    #[command(description = "Remove the reply keyboard")]
    Clearkeyboard,
    #[command(description = "Remove the reply keyboard")]
    Removekb,
    #[command(description = "Remove the reply keyboard")]
    Removekeyboard,

    #[command(description = "Measure API latency")]
    Ping,

    // IDs
    #[command(description = "Show your user ID")]
    Myid,
    #[command(description = "Show this chat's ID")]
    Chatid,

    // Dumps
    #[command(description = "Dump your user object")]
    Dumpuser,
    #[command(description = "Dump your user object")]
    Userdump,
    #[command(description = "Dump this chat object")]
    Dumpchat,
    #[command(description = "Dump this chat object")]
    Chatdump,
    #[command(description = "Dump the bot's user object")]
    Dumpbot,
    #[command(description = "Dump the bot's user object")]
    Botdump,
    #[command(description = "Dump the replied message")]
    Dumpreply,
    #[command(description = "Dump the replied message")]
    Replydump,

    // Chat info
    #[command(description = "List the bot's commands")]
    Getcommands,
    #[command(description = "List the bot's commands")]
    Listcommands,
    #[command(description = "Show the member count")]
    Membercount,
    #[command(description = "Show the member count")]
    Chatsize,
    #[command(description = "Show the chat permissions")]
    Permissions,
    #[command(description = "Show the chat permissions")]
    Chatperms,
}

/// Build the combined command handler.
pub fn command_handler() -> UpdateHandler<anyhow::Error> {
    use dptree::case;

    teloxide::filter_command::<Command, _>()
        // Keyboard
        .branch(case![Command::Resetkb].endpoint(keyboard::reset_keyboard_command))
        .branch(case![Command::Resetkeyboard].endpoint(keyboard::reset_keyboard_command))
        .branch(case![Command::Clearkb].endpoint(keyboard::reset_keyboard_command))
        .branch(case![Command::Clearkeyboard].endpoint(keyboard::reset_keyboard_command))
        .branch(case![Command::Removekb].endpoint(keyboard::reset_keyboard_command))
        .branch(case![Command::Removekeyboard].endpoint(keyboard::reset_keyboard_command))
        .branch(case![Command::Ping].endpoint(ping::ping_command))
        // IDs
        .branch(case![Command::Myid].endpoint(ids::myid_command))
        .branch(case![Command::Chatid].endpoint(ids::chatid_command))
        // Dumps
        .branch(case![Command::Dumpuser].endpoint(dump::dumpuser_command))
        .branch(case![Command::Userdump].endpoint(dump::dumpuser_command))
        .branch(case![Command::Dumpchat].endpoint(dump::dumpchat_command))
        .branch(case![Command::Chatdump].endpoint(dump::dumpchat_command))
        .branch(case![Command::Dumpbot].endpoint(dump::dumpbot_command))
        .branch(case![Command::Botdump].endpoint(dump::dumpbot_command))
        .branch(case![Command::Dumpreply].endpoint(dump::dumpreply_command))
        .branch(case![Command::Replydump].endpoint(dump::dumpreply_command))
        // Chat info
        .branch(case![Command::Getcommands].endpoint(chat_info::getcommands_command))
        .branch(case![Command::Listcommands].endpoint(chat_info::getcommands_command))
        .branch(case![Command::Membercount].endpoint(chat_info::membercount_command))
        .branch(case![Command::Chatsize].endpoint(chat_info::membercount_command))
        .branch(case![Command::Permissions].endpoint(chat_info::permissions_command))
        .branch(case![Command::Chatperms].endpoint(chat_info::permissions_command))
}
