//! Telegram HTML formatting.
//!
//! - [`escape_html`] makes arbitrary text safe to embed in HTML messages
//! - [`sanitize_html_tags`] keeps only the tags Telegram understands
//! - [`clean_html_tags`] strips all markup, returning plain text
//!
//! Sanitizing and cleaning run a real parse over the input (see [`markup`])
//! and never fail, whatever the input looks like.

mod entities;
pub mod markup;
pub mod policy;

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use teloxide::types::UserId;

pub use policy::Policy;

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid line break pattern"));

/// Escape HTML special characters.
///
/// `&`, `<`, `>`, `"` and `'` become `&amp;`, `&lt;`, `&gt;`, `&quot;` and `&#039;`.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}

pub(crate) fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
}

/// Replace `<br>`, `<br/>`, `<BR />` and friends with `\n`.
pub fn normalize_line_breaks(text: &str) -> Cow<'_, str> {
    LINE_BREAK.replace_all(text, "\n")
}

/// Sanitize HTML, keeping only allowed Telegram formatting tags.
///
/// `strong`, `em`, `ins`, `strike` and `del` are renamed to their Telegram
/// equivalents. Links keep only an `href` with an `http`, `https`, `mailto`,
/// `tel` or `tg` scheme; links without one are unwrapped.
pub fn sanitize_html_tags(text: &str) -> String {
    sanitize_with(text, &policy::TELEGRAM)
}

/// Sanitize HTML with a custom policy.
pub fn sanitize_with(text: &str, policy: &Policy) -> String {
    let normalized = normalize_line_breaks(text);
    markup::serialize(&policy.filter(markup::parse(&normalized)))
}

/// Remove all HTML tags, returning the plain text content.
pub fn clean_html_tags(text: &str) -> String {
    let normalized = normalize_line_breaks(text);
    // The parser would turn `&nbsp;` into U+00A0; plain text wants a space.
    let normalized = normalized.replace("&nbsp;", " ");
    let flattened = markup::serialize(&policy::PLAIN_TEXT.filter(markup::parse(&normalized)));
    entities::decode_basic(&flattened)
}

/// HTML mention linking to a user by id.
pub fn mention_html(user_id: UserId, name: &str) -> String {
    format!(
        "<a href=\"tg://user?id={}\">{}</a>",
        user_id,
        escape_html(name)
    )
}
