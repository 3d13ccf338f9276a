//! Webhook mode implementation for the bot.
//!
//! Uses teloxide's built-in axum webhook support, which registers the
//! webhook with Telegram, serves updates over HTTP and removes the webhook
//! on shutdown.

use std::net::SocketAddr;

use anyhow::Context;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks::{self, Options};
use tracing::info;
use url::Url;

use super::dispatcher::{BotDispatcher, ThrottledBot};
use crate::config::{Config, ConfigError};

/// Webhook listener options derived from the configuration.
pub fn webhook_options(config: &Config) -> anyhow::Result<Options> {
    let webhook_url = config
        .webhook_url
        .as_deref()
        .ok_or(ConfigError::MissingWebhookUrl)?;
    let url = Url::parse(webhook_url).with_context(|| format!("invalid WEBHOOK_URL {webhook_url:?}"))?;

    // Listen on all interfaces at the configured port
    let address = SocketAddr::from(([0, 0, 0, 0], config.webhook_port));
    let mut options = Options::new(address, url);

    if let Some(secret) = &config.webhook_secret {
        options = options.secret_token(secret.clone());
    }
    Ok(options)
}

/// Start the bot in webhook mode.
pub async fn start_webhook(
    config: &Config,
    mut dispatcher: BotDispatcher,
    bot: ThrottledBot,
) -> anyhow::Result<()> {
    let options = webhook_options(config)?;

    info!("Setting webhook URL: {}", options.url);
    info!("Listening on: {}", options.address);
    if options.secret_token.is_some() {
        info!("Webhook secret token configured");
    }

    // Webhook setup only needs the plain Bot, not the Throttle adaptor.
    let listener = webhooks::axum(bot.inner().clone(), options)
        .await
        .context("failed to set up webhook")?;

    info!("Webhook setup complete, waiting for updates...");

    let error_handler = LoggingErrorHandler::with_custom_text("Error from update listener");
    dispatcher
        .dispatch_with_listener(listener, error_handler)
        .await;
    Ok(())
}
