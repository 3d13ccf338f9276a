//! HTML entity decoding.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// The entities produced by [`super::escape_html`], plus `&nbsp;`.
static BASIC_ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:amp|lt|gt|quot|#039|nbsp);").expect("valid entity pattern")
});

/// Decode every named and numeric entity in parsed text.
///
/// Unknown entities are left as they are.
pub fn decode_markup(raw: &str) -> String {
    htmlize::unescape(raw).into_owned()
}

/// Decode an attribute value.
///
/// A legacy entity without `;` that runs into `=` or an alphanumeric stays
/// literal, so query strings like `?a=1&reg=eu` survive.
pub fn decode_attribute(raw: &str) -> String {
    htmlize::unescape_attribute(raw).into_owned()
}

/// Decode the five escaper entities and `&nbsp;` (as a plain space).
///
/// Single pass, so `&amp;lt;` becomes `&lt;` and not `<`.
pub fn decode_basic(text: &str) -> String {
    BASIC_ENTITY
        .replace_all(text, |caps: &Captures| match &caps[0] {
            "&amp;" => "&",
            "&lt;" => "<",
            "&gt;" => ">",
            "&quot;" => "\"",
            "&#039;" => "'",
            _ => " ",
        })
        .into_owned()
}
