use tenor::Config;
use tenor::models::{ContentFilter, MediaFilter};

/// Number of results requested from a keyword search.
pub(crate) const GIF_LIMIT: u8 = 1;
/// Search term used for the startup credential check.
pub(crate) const TRIAL_SEARCH_TERM: &str = "excited";
pub(crate) const BASE_GIF_CONFIG: Config = Config::new()
    .content_filter(ContentFilter::High)
    .media_filter(&[MediaFilter::Minimal]);
pub(crate) const SEARCH_CONFIG: Config = Config::new().limit(GIF_LIMIT);
