use tenor::models::{Gif, MediaFilter};
use url::Url;

use crate::consts;

#[derive(Debug, thiserror::Error)]
pub enum GifError {
    #[error(transparent)]
    Tenor(#[from] tenor::error::Error),
    #[error("no gifs found")]
    NoGifs,
}

/// Resolve a keyword to a single GIF url. An empty keyword asks tenor for
/// a random gif instead of a search. One attempt, no retries.
pub(crate) async fn fetch_gif_url(
    tenor: &tenor::Client<'_>,
    keyword: &str,
) -> Result<Url, GifError> {
    let gifs = if keyword.is_empty() {
        tenor.random(None).await?
    } else {
        tenor.search(keyword, Some(consts::SEARCH_CONFIG)).await?
    };
    gifs.into_iter()
        .next()
        .and_then(first_media_url)
        .ok_or(GifError::NoGifs)
}

fn first_media_url(gif: Gif) -> Option<Url> {
    let mut formats = gif.media.into_iter().next()?;
    formats
        .remove(&MediaFilter::TinyGif)
        .map(|format| format.url)
}
