//! Link helpers.

use url::Url;

/// Check whether a string parses as an absolute URL.
pub fn is_valid_url(input: &str) -> bool {
    Url::parse(input).is_ok()
}

/// Build a `t.me` link that opens a chat with `username` and pre-filled `text`.
///
/// Any `+` in the result is replaced by `%20`, since iOS clients show a
/// literal plus sign for form-encoded spaces.
///
/// ```
/// let link = tgkit::links::text_message_link("durov", "hello world").unwrap();
/// assert_eq!(link, "https://t.me/durov?text=hello%20world");
/// ```
pub fn text_message_link(username: &str, text: &str) -> Result<String, url::ParseError> {
    let mut url = Url::parse(&format!("https://t.me/{}", username))?;

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "text")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair("text", text);

    Ok(url.as_str().replace('+', "%20"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_url() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://example.com/path?query=1"));
        assert!(is_valid_url("tg://resolve?domain=durov"));
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url(""));
    }

    #[test]
    fn test_text_message_link() {
        assert_eq!(
            text_message_link("durov", "hello world").unwrap(),
            "https://t.me/durov?text=hello%20world"
        );
        assert_eq!(
            text_message_link("testuser", "test message").unwrap(),
            "https://t.me/testuser?text=test%20message"
        );
    }

    #[test]
    fn test_text_message_link_encodes_plus() {
        let link = text_message_link("durov", "hello+world").unwrap();
        assert_eq!(link, "https://t.me/durov?text=hello%2Bworld");
        assert!(!link.contains('+'));
    }

    #[test]
    fn test_text_message_link_special_characters() {
        let link = text_message_link("durov", "hello & world").unwrap();
        assert!(link.starts_with("https://t.me/durov"));
        assert!(link.contains("text=hello%20%26%20world"));
        assert!(!link.contains('+'));
    }

    #[test]
    fn test_text_message_link_empty_text() {
        assert_eq!(
            text_message_link("durov", "").unwrap(),
            "https://t.me/durov?text="
        );
    }

    #[test]
    fn test_text_message_link_replaces_existing_text() {
        assert_eq!(
            text_message_link("durov?text=old&start=x", "new").unwrap(),
            "https://t.me/durov?start=x&text=new"
        );
    }
}
