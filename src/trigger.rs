//! Trigger-phrase filtering for inbound messages.
//!
//! Off by default: every message is treated as a search keyword, verbatim.
//! When enabled, only messages that start with one of the trigger phrases
//! get a reply, and the normalized remainder of the message is the keyword.

const TRIGGERS: [&str; 3] = ["gifme", "gif me", "@**gifme**"];

/// Returns the search keyword for a message, or `None` when the message
/// should be ignored.
pub(crate) fn extract_keyword(content: &str, trigger_filter: bool) -> Option<String> {
    if trigger_filter {
        strip_trigger(content).map(normalize_keyword)
    } else {
        Some(content.to_owned())
    }
}

/// The remainder of the message after its trigger phrase. The phrase must
/// be followed by whitespace or end-of-message, so "gifmeow" is not a
/// trigger.
fn strip_trigger(content: &str) -> Option<&str> {
    let content = content.trim_start();
    TRIGGERS.iter().find_map(|trigger| {
        let rest = content.strip_prefix(trigger)?;
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            Some(rest)
        } else {
            None
        }
    })
}

fn normalize_keyword(keyword: &str) -> String {
    keyword
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::extract_keyword;

    #[test]
    fn disabled_filter_passes_content_verbatim() {
        assert_eq!(
            extract_keyword("Dancing Cat", false),
            Some("Dancing Cat".to_owned())
        );
        assert_eq!(extract_keyword("", false), Some(String::new()));
    }

    #[test]
    fn strips_each_trigger_phrase() {
        assert_eq!(
            extract_keyword("gifme dancing cat", true),
            Some("dancing cat".to_owned())
        );
        assert_eq!(
            extract_keyword("gif me dancing cat", true),
            Some("dancing cat".to_owned())
        );
        assert_eq!(
            extract_keyword("@**gifme** dancing cat", true),
            Some("dancing cat".to_owned())
        );
    }

    #[test]
    fn bare_trigger_is_an_empty_keyword() {
        assert_eq!(extract_keyword("gifme", true), Some(String::new()));
        assert_eq!(extract_keyword("  gifme  ", true), Some(String::new()));
    }

    #[test]
    fn non_trigger_messages_are_ignored() {
        assert_eq!(extract_keyword("hello there", true), None);
        assert_eq!(extract_keyword("gifmeow", true), None);
        assert_eq!(extract_keyword("", true), None);
    }

    #[test]
    fn keyword_is_normalized() {
        assert_eq!(
            extract_keyword("gifme  Dancing   CAT ", true),
            Some("dancing cat".to_owned())
        );
    }
}
