use url::Url;

pub(crate) const CONNECTION_FAILURE: &str =
    "Uh oh, sorry :slightly_frowning_face:, I cannot process your request right now. \
     But, let's try again later! :grin:";

pub(crate) fn click_to_enlarge(url: &Url) -> String {
    format!("[Click to enlarge]({url})")
}

pub(crate) fn no_gif_found(keyword: &str) -> String {
    format!("Sorry, I don't have a GIF for \"{keyword}\"!:astonished:")
}
