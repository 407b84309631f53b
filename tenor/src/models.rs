use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

use serde::Deserialize;
use strum_macros::{EnumString, IntoStaticStr};
use url::Url;

#[derive(Deserialize, Debug)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de> + Default"))]
pub struct Response<T> {
    /// Absent from the body when tenor has nothing at all to return.
    #[serde(default)]
    pub results: T,
    pub next: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MediaFormat {
    pub url: Url,
}

/// A single result from the v1 api.
///
/// With `media_filter=minimal` tenor only guarantees the media list; the
/// identification fields may be missing or empty.
#[derive(Deserialize, Clone)]
pub struct Gif {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub url: Option<Url>,
    #[serde(rename = "itemurl")]
    pub item_url: Option<Url>,
    /// One entry per result variant, keyed by format name.
    #[serde(default)]
    pub media: Vec<HashMap<MediaFilter, MediaFormat>>,
}

impl Debug for Gif {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gif")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("url", &self.url.as_ref().map(Url::as_str))
            .field("item_url", &self.item_url.as_ref().map(Url::as_str))
            .field("media", &self.media)
            .finish()
    }
}

/// Tenor supports filtering content based on ratings that map to the Motion Picture Association (MPA).
/// It's important to note that tenor doesn't surface the type of nudity that can be found in R-rated films.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, EnumString, IntoStaticStr)]
pub enum ContentFilter {
    /// Rated G
    #[strum(serialize = "high")]
    High,
    /// Rated G and PG
    #[strum(serialize = "medium")]
    Medium,
    /// Rated G, PG, and PG-13
    #[strum(serialize = "low")]
    Low,
    /// Rated G, PG, PG-13 and R (no nudity)
    #[default]
    #[strum(serialize = "off")]
    Off,
}

/// The media formats of the v1 api. Used both as request filter values and
/// as the keys of [`Gif::media`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumString, IntoStaticStr, Deserialize)]
pub enum MediaFilter {
    /// Request-only aggregate of `tinygif`, `gif`, and `mp4`.
    #[strum(serialize = "minimal")]
    #[serde(rename = "minimal")]
    Minimal,
    /// Request-only aggregate of `nanomp4`, `tinygif`, `tinymp4`, `gif`,
    /// `mp4`, and `nanogif`.
    #[strum(serialize = "basic")]
    #[serde(rename = "basic")]
    Basic,
    /// High-quality GIF format; largest file size available.
    #[strum(serialize = "gif")]
    #[serde(rename = "gif")]
    Gif,
    /// Small reduction in size of the GIF format.
    #[strum(serialize = "mediumgif")]
    #[serde(rename = "mediumgif")]
    MediumGif,
    /// Reduced size of the GIF format, up to 220 pixels wide. Use this
    /// size for previews and shares on mobile.
    #[strum(serialize = "tinygif")]
    #[serde(rename = "tinygif")]
    TinyGif,
    /// Smallest size of the GIF format, up to 90 pixels tall.
    #[strum(serialize = "nanogif")]
    #[serde(rename = "nanogif")]
    NanoGif,
    /// Highest quality video format; smaller than GIF.
    #[strum(serialize = "mp4")]
    #[serde(rename = "mp4")]
    Mp4,
    /// MP4 that runs a few times rather than only once.
    #[strum(serialize = "loopedmp4")]
    #[serde(rename = "loopedmp4")]
    LoopedMp4,
    /// Reduced size of the MP4 format.
    #[strum(serialize = "tinymp4")]
    #[serde(rename = "tinymp4")]
    TinyMp4,
    /// Smallest size of the MP4 format.
    #[strum(serialize = "nanomp4")]
    #[serde(rename = "nanomp4")]
    NanoMp4,
    /// Lower quality video format; smaller in size than MP4.
    #[strum(serialize = "webm")]
    #[serde(rename = "webm")]
    Webm,
    /// Reduced size of the WebM format.
    #[strum(serialize = "tinywebm")]
    #[serde(rename = "tinywebm")]
    TinyWebm,
    /// Smallest size of the WebM format.
    #[strum(serialize = "nanowebm")]
    #[serde(rename = "nanowebm")]
    NanoWebm,
}
