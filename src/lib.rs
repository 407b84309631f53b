//! A chat-bot plugin that answers keyword messages with a GIF from Tenor.
//!
//! The host runtime delivers inbound [`Message`]s and dispatches the reply
//! strings this crate produces; process setup, the connection to the chat
//! server, and tracing subscriber installation all belong to the host.

pub mod config;
mod consts;
pub mod gifs;
pub mod message;
mod replies;
mod trigger;

pub use crate::config::{ConfigError, GifBotConfig};
pub use crate::gifs::GifError;
pub use crate::message::Message;

use tenor::error::Error as TenorError;
use tracing::{debug, instrument, warn};

/// The gifme bot: replies to keyword messages with a Tenor GIF link.
#[derive(Debug, Clone)]
pub struct GifBot<'tenor_config> {
    config: GifBotConfig,
    tenor: tenor::Client<'tenor_config>,
}

impl<'tenor_config> GifBot<'tenor_config> {
    #[must_use]
    pub fn new(config: GifBotConfig) -> GifBot<'tenor_config> {
        let tenor =
            tenor::Client::with_config(config.api_key.clone(), Some(consts::BASE_GIF_CONFIG));
        GifBot { config, tenor }
    }

    /// Build the bot around an existing tenor client, e.g. one pointed at
    /// a stub server.
    #[must_use]
    pub fn with_tenor(
        config: GifBotConfig,
        tenor: tenor::Client<'tenor_config>,
    ) -> GifBot<'tenor_config> {
        GifBot { config, tenor }
    }

    #[must_use]
    pub fn usage(&self) -> &'static str {
        "This bot replies with GIFs from Tenor. \
         Send it a message and it will reply with a GIF matching the text; \
         an empty message gets a random GIF."
    }

    /// Produce the reply for an inbound message.
    ///
    /// Returns `Ok(None)` when the message should not get a reply at all:
    /// the bot's own messages and, with trigger filtering enabled, messages
    /// that do not start with a trigger phrase.
    ///
    /// # Errors
    ///
    /// Connection failures and empty search results are turned into
    /// replies; anything else (error statuses, malformed responses) is
    /// returned to the host runtime.
    #[instrument(skip_all, fields(sender = %message.sender_email))]
    pub async fn handle_message(&self, message: &Message) -> Result<Option<String>, GifError> {
        if message.sender_email == self.config.bot_email {
            debug!("ignoring our own message");
            return Ok(None);
        }
        let Some(keyword) = trigger::extract_keyword(&message.content, self.config.trigger_filter)
        else {
            debug!("message does not match a trigger phrase");
            return Ok(None);
        };
        match gifs::fetch_gif_url(&self.tenor, &keyword).await {
            Ok(url) => Ok(Some(replies::click_to_enlarge(&url))),
            Err(GifError::Tenor(TenorError::Connection(error))) => {
                warn!("could not reach tenor: {error}");
                Ok(Some(replies::CONNECTION_FAILURE.to_owned()))
            }
            Err(GifError::NoGifs) => Ok(Some(replies::no_gif_found(&keyword))),
            Err(error) => Err(error),
        }
    }

    /// One-shot credential check, meant to run once at bot startup.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the trial search cannot reach tenor
    /// or tenor rejects the key.
    pub async fn validate_config(&self) -> Result<(), ConfigError> {
        match self
            .tenor
            .search(consts::TRIAL_SEARCH_TERM, Some(consts::SEARCH_CONFIG))
            .await
        {
            Ok(_) => Ok(()),
            Err(error) if error.status() == Some(tenor::StatusCode::FORBIDDEN) => {
                Err(ConfigError::InvalidKey(error))
            }
            Err(error) => Err(ConfigError::Validation(error)),
        }
    }
}
