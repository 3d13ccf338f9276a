//! tgkit - Telegram bot toolkit
//!
//! Helpers for bots that talk to the Telegram Bot API, plus the pieces of a
//! small debug bot built on top of them.
//!
//! ## Architecture
//!
//! - `formatting` - HTML escaping, sanitizing for Telegram and flattening to text
//! - `links` - URL validation and `t.me` message links
//! - `commands` - `command - description` lists
//! - `chat` - Member status and block detection
//! - `payments` - Telegram Stars conversion
//! - `localization` - Locale-aware numbers, dates, relative times and currency
//! - `utils` - Random picks, slicing, truncation, sleep and retry
//! - `config` - Environment configuration
//! - `bot` - Dispatcher and runners (with Throttle for API rate limiting)
//! - `plugins` - Debug command handlers
//! - `events` - Event handlers

pub mod bot;
pub mod chat;
pub mod commands;
pub mod config;
pub mod events;
pub mod formatting;
pub mod links;
pub mod localization;
pub mod payments;
pub mod plugins;
pub mod utils;
