use std::collections::HashMap;

use serde::Deserialize;

const API_KEY_ENTRY: &str = "api-key";
const TRIGGER_FILTER_ENTRY: &str = "trigger-filter";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing bot config entry `{0}`")]
    MissingEntry(&'static str),
    #[error("bot config entry `{entry}` has invalid value `{value}`")]
    InvalidEntry { entry: &'static str, value: String },
    #[error("could not validate the tenor api key: {0}")]
    Validation(#[source] tenor::error::Error),
    #[error("tenor rejected the trial search: {0}. This is likely due to an invalid key.")]
    InvalidKey(#[source] tenor::error::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GifBotConfig {
    /// Tenor api key, passed unmodified on every outbound request.
    pub api_key: String,
    /// The bot's own account identity; messages from it are never answered.
    pub bot_email: String,
    /// Only answer messages that start with a trigger phrase.
    #[serde(default)]
    pub trigger_filter: bool,
}

impl GifBotConfig {
    /// Build the config from the host runtime's string mapping. The bot
    /// identity is not part of the mapping; the host knows it and injects
    /// it here.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEntry`] when `api-key` is absent and
    /// [`ConfigError::InvalidEntry`] when `trigger-filter` is not a bool.
    pub fn from_map(
        entries: &HashMap<String, String>,
        bot_email: impl Into<String>,
    ) -> Result<GifBotConfig, ConfigError> {
        let api_key = entries
            .get(API_KEY_ENTRY)
            .ok_or(ConfigError::MissingEntry(API_KEY_ENTRY))?
            .clone();
        let trigger_filter = match entries.get(TRIGGER_FILTER_ENTRY) {
            None => false,
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidEntry {
                entry: TRIGGER_FILTER_ENTRY,
                value: value.clone(),
            })?,
        };
        Ok(GifBotConfig {
            api_key,
            bot_email: bot_email.into(),
            trigger_filter,
        })
    }
}
