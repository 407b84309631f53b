use std::borrow::Cow;
use std::sync::Arc;

use itertools::Itertools;
use tracing::debug;
use url::Url;

use error::Error;

use crate::models::{ContentFilter, Gif, MediaFilter, Response};

pub mod error;
pub mod models;

pub use reqwest::StatusCode;

/// Search and random lookups go through the same endpoint; the mode is
/// distinguished only by the parameter set sent.
pub const TENOR_ENDPOINT: &str = "https://g.tenor.com/v1/random";

#[derive(Debug, Clone)]
pub struct Client<'config> {
    api_key: Arc<str>,
    reqwest: reqwest::Client,
    endpoint: Cow<'static, str>,
    base_config: Option<Config<'config>>,
}

impl<'config> Client<'config> {
    #[must_use]
    pub fn new(api_key: String) -> Client<'config> {
        Self::with_config(api_key, None)
    }

    #[must_use]
    pub fn with_config(api_key: String, config: Option<Config<'config>>) -> Client<'config> {
        Client {
            api_key: api_key.into(),
            reqwest: reqwest::Client::new(),
            endpoint: Cow::Borrowed(TENOR_ENDPOINT),
            base_config: config,
        }
    }

    /// Point the client at a different endpoint, e.g. a local stub server.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Client<'config> {
        self.endpoint = Cow::Owned(endpoint.into());
        self
    }

    /// Search for GIFs matching the given query.
    ///
    /// # Errors
    ///
    /// Returns an error when tenor cannot be reached, responds with an
    /// error status, or the response cannot be parsed.
    pub async fn search(&self, query: &str, config: Option<Config<'_>>) -> Result<Vec<Gif>, Error> {
        self.request(Some(query), config).await
    }

    /// Fetch random GIFs; sends no search term at all.
    ///
    /// # Errors
    ///
    /// Returns an error when tenor cannot be reached, responds with an
    /// error status, or the response cannot be parsed.
    pub async fn random(&self, config: Option<Config<'_>>) -> Result<Vec<Gif>, Error> {
        self.request(None, config).await
    }

    async fn request(
        &self,
        query: Option<&str>,
        config: Option<Config<'_>>,
    ) -> Result<Vec<Gif>, Error> {
        let params = self.build_query_string(query, config);
        let url = Url::parse_with_params(&self.endpoint, &params)?;
        debug!(url = %url, "requesting gifs from tenor");
        let response = self.reqwest.get(url).send().await?.error_for_status()?;
        let result: Response<Vec<Gif>> = response.json().await?;
        Ok(result.results)
    }

    fn build_query_string<'a>(
        &'a self,
        query: Option<&'a str>,
        config: Option<Config<'a>>,
    ) -> Vec<(&'static str, Cow<'a, str>)> {
        // always overallocate to maximum capacity
        let mut params: Vec<(&str, Cow<'_, str>)> = Vec::with_capacity(6);
        params.push(("key", self.api_key.as_ref().into()));
        if let Some(query) = query {
            params.push(("q", Cow::Borrowed(query)));
        }
        if let Some(merged_config) = self.merge_config(config) {
            if let Some(locale) = merged_config.locale {
                params.push(("locale", Cow::Borrowed(locale)));
            }
            if let Some(content_filter) = merged_config.content_filter {
                let filter: &'static str = content_filter.into();
                params.push(("contentfilter", filter.into()));
            }
            if let Some(media_filter) = merged_config.media_filter {
                let filter = media_filter
                    .iter()
                    .map(Into::<&'static str>::into)
                    .join(",");
                params.push(("media_filter", Cow::Owned(filter)));
            }
            if let Some(limit) = merged_config.limit {
                params.push(("limit", limit.to_string().into()));
            }
        }
        params
    }

    fn merge_config<'a>(&'a self, config: Option<Config<'a>>) -> Option<Config<'a>> {
        match (self.base_config, config) {
            (None, None) => None,
            (Some(base_cfg), None) => Some(base_cfg),
            (None, Some(cfg)) => Some(cfg),
            (Some(base_cfg), Some(mut cfg)) => {
                cfg.locale = cfg.locale.or(base_cfg.locale);
                cfg.content_filter = cfg.content_filter.or(base_cfg.content_filter);
                cfg.media_filter = cfg.media_filter.or(base_cfg.media_filter);
                cfg.limit = cfg.limit.or(base_cfg.limit);
                Some(cfg)
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Config<'config> {
    locale: Option<&'config str>,
    /// Strongly recommended
    content_filter: Option<ContentFilter>,
    /// Strongly recommended
    media_filter: Option<&'config [MediaFilter]>,
    limit: Option<u8>,
}

impl<'config> Config<'config> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            locale: None,
            content_filter: None,
            media_filter: None,
            limit: None,
        }
    }

    #[must_use]
    pub const fn locale(mut self, locale: &'config str) -> Self {
        self.locale = Some(locale);
        self
    }

    #[must_use]
    pub const fn content_filter(mut self, content_filter: ContentFilter) -> Self {
        self.content_filter = Some(content_filter);
        self
    }

    #[must_use]
    pub const fn media_filter(mut self, media_filter: &'config [MediaFilter]) -> Self {
        self.media_filter = Some(media_filter);
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: u8) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl Default for Config<'static> {
    fn default() -> Self {
        Self::new()
    }
}
