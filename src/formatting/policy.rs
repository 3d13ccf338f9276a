//! Sanitizing policy.
//!
//! A [`Policy`] is plain configuration data: allowed tags with their allowed
//! attributes, tag rewrites, URL-bearing attributes with their allowed
//! schemes, and attributes an element cannot survive without. The tree walk
//! in [`Policy::filter`] is the same for every policy.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use tracing::trace;

use super::markup::Node;

/// The formatting subset understood by Telegram's HTML parse mode.
pub static TELEGRAM: LazyLock<Policy> = LazyLock::new(Policy::telegram);

/// No tags at all; only text survives.
pub static PLAIN_TEXT: LazyLock<Policy> = LazyLock::new(Policy::empty);

/// Elements whose content is never shown to a reader.
const NON_RENDERABLE: &[&str] = &["script", "style", "textarea", "noscript", "option"];

/// Allow-list policy for [`Policy::filter`].
#[derive(Debug, Clone, Default)]
pub struct Policy {
    /// Allowed tag -> attributes allowed on it.
    tags: HashMap<&'static str, HashSet<&'static str>>,

    /// Input tag -> tag it is renamed to before the allow-list check.
    rewrites: HashMap<&'static str, &'static str>,

    /// Attributes holding a URL; their scheme must be in `url_schemes`.
    url_attributes: HashSet<&'static str>,

    url_schemes: HashSet<&'static str>,

    /// Tag -> attribute it needs, otherwise it is unwrapped.
    required_attributes: HashMap<&'static str, &'static str>,

    /// Disallowed tags removed together with their content.
    clean_content_tags: HashSet<&'static str>,
}

impl Policy {
    /// A policy allowing no tags, which still drops non-renderable content.
    pub fn empty() -> Self {
        Self::default().clean_content_tags(NON_RENDERABLE)
    }

    /// Telegram HTML: `b i u s tg-spoiler a code pre blockquote`.
    pub fn telegram() -> Self {
        Self::empty()
            .allow_tag("b", &[])
            .allow_tag("i", &[])
            .allow_tag("u", &[])
            .allow_tag("s", &[])
            .allow_tag("tg-spoiler", &[])
            .allow_tag("a", &["href"])
            .allow_tag("code", &["class"])
            .allow_tag("pre", &[])
            .allow_tag("blockquote", &["expandable"])
            .rewrite("strong", "b")
            .rewrite("em", "i")
            .rewrite("ins", "u")
            .rewrite("strike", "s")
            .rewrite("del", "s")
            .url_attribute("href")
            .url_schemes(&["http", "https", "mailto", "tel", "tg"])
            .require_attribute("a", "href")
    }

    /// Allow a tag with the given attributes.
    #[must_use]
    pub fn allow_tag(mut self, tag: &'static str, attributes: &[&'static str]) -> Self {
        self.tags
            .entry(tag)
            .or_default()
            .extend(attributes.iter().copied());
        self
    }

    /// Rename `from` to `to` before checking the allow-list.
    #[must_use]
    pub fn rewrite(mut self, from: &'static str, to: &'static str) -> Self {
        self.rewrites.insert(from, to);
        self
    }

    /// Treat an attribute as a URL that must use an allowed scheme.
    #[must_use]
    pub fn url_attribute(mut self, attribute: &'static str) -> Self {
        self.url_attributes.insert(attribute);
        self
    }

    #[must_use]
    pub fn url_schemes(mut self, schemes: &[&'static str]) -> Self {
        self.url_schemes.extend(schemes.iter().copied());
        self
    }

    /// Unwrap `tag` when `attribute` does not survive filtering.
    #[must_use]
    pub fn require_attribute(mut self, tag: &'static str, attribute: &'static str) -> Self {
        self.required_attributes.insert(tag, attribute);
        self
    }

    /// Drop these tags along with their content when they are not allowed.
    #[must_use]
    pub fn clean_content_tags(mut self, tags: &[&'static str]) -> Self {
        self.clean_content_tags.extend(tags.iter().copied());
        self
    }

    pub fn allows_tag(&self, tag: &str) -> bool {
        self.tags.contains_key(tag)
    }

    pub fn allows_attribute(&self, tag: &str, attribute: &str) -> bool {
        self.tags
            .get(tag)
            .is_some_and(|attributes| attributes.contains(attribute))
    }

    /// Whether `value` starts with an allowed URL scheme.
    ///
    /// Relative and scheme-less URLs are rejected.
    pub fn allows_url(&self, value: &str) -> bool {
        url_scheme(value).is_some_and(|scheme| {
            self.url_schemes
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(scheme))
        })
    }

    /// Apply the policy to a parsed tree.
    pub fn filter(&self, nodes: Vec<Node>) -> Vec<Node> {
        let mut out = Vec::with_capacity(nodes.len());
        self.filter_into(nodes, &mut out);
        out
    }

    fn filter_into(&self, nodes: Vec<Node>, out: &mut Vec<Node>) {
        for node in nodes {
            let mut element = match node {
                Node::Text(text) => {
                    push_text(out, text);
                    continue;
                }
                Node::Element(element) => element,
            };

            if let Some(to) = self.rewrites.get(element.name.as_str()) {
                element.name = (*to).to_string();
            }

            let Some(allowed) = self.tags.get(element.name.as_str()) else {
                if !self.clean_content_tags.contains(element.name.as_str()) {
                    self.filter_into(element.children, out);
                }
                continue;
            };

            element.attributes.retain(|(name, value)| {
                allowed.contains(name.as_str())
                    && (!self.url_attributes.contains(name.as_str()) || self.allows_url(value))
            });

            if let Some(required) = self.required_attributes.get(element.name.as_str()) {
                if element.attr(required).is_none() {
                    trace!("Unwrapping <{}> without {}", element.name, required);
                    self.filter_into(element.children, out);
                    continue;
                }
            }

            let children = std::mem::take(&mut element.children);
            element.children = self.filter(children);
            out.push(Node::Element(element));
        }
    }
}

/// Spliced-in children can leave two text runs side by side.
fn push_text(out: &mut Vec<Node>, text: String) {
    if let Some(Node::Text(previous)) = out.last_mut() {
        previous.push_str(&text);
    } else {
        out.push(Node::Text(text));
    }
}

/// RFC 3986 scheme of a URL: `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"`.
fn url_scheme(value: &str) -> Option<&str> {
    let (scheme, _) = value.trim().split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    let valid = first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(scheme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::markup::{parse, serialize};

    fn clean(policy: &Policy, input: &str) -> String {
        serialize(&policy.filter(parse(input)))
    }

    #[test]
    fn test_telegram_policy_tables() {
        let policy = Policy::telegram();
        for tag in ["b", "i", "u", "s", "tg-spoiler", "a", "code", "pre", "blockquote"] {
            assert!(policy.allows_tag(tag), "{tag} should be allowed");
        }
        assert!(!policy.allows_tag("strong"));
        assert!(!policy.allows_tag("span"));
        assert!(policy.allows_attribute("a", "href"));
        assert!(policy.allows_attribute("code", "class"));
        assert!(policy.allows_attribute("blockquote", "expandable"));
        assert!(!policy.allows_attribute("b", "class"));
        assert!(!policy.allows_attribute("a", "onclick"));
    }

    #[test]
    fn test_url_schemes() {
        let policy = Policy::telegram();
        assert!(policy.allows_url("https://example.com"));
        assert!(policy.allows_url("HTTP://EXAMPLE.COM"));
        assert!(policy.allows_url("  tg://user?id=1 "));
        assert!(policy.allows_url("mailto:a@b.c"));
        assert!(policy.allows_url("tel:+123"));
        assert!(!policy.allows_url("javascript:alert(1)"));
        assert!(!policy.allows_url("data:text/html,x"));
        assert!(!policy.allows_url("/relative/path"));
        assert!(!policy.allows_url("//example.com"));
        assert!(!policy.allows_url(""));
        assert!(!policy.allows_url("java script:x"));
    }

    #[test]
    fn test_rewrite_runs_before_allow_list() {
        let policy = Policy::empty().allow_tag("b", &[]).rewrite("strong", "b");
        assert_eq!(clean(&policy, "<strong>x</strong>"), "<b>x</b>");

        let no_target = Policy::empty().rewrite("strong", "b");
        assert_eq!(clean(&no_target, "<strong>x</strong>"), "x");
    }

    #[test]
    fn test_required_attribute_unwraps() {
        let policy = Policy::telegram();
        assert_eq!(clean(&policy, "<a>plain</a>"), "plain");
        assert_eq!(clean(&policy, r#"<a href="">empty</a>"#), "empty");
        assert_eq!(clean(&policy, r#"<a href="/rel">rel</a>"#), "rel");
        assert_eq!(
            clean(&policy, r#"<a href="https://e.com" title="t">ok</a>"#),
            r#"<a href="https://e.com">ok</a>"#
        );
    }

    #[test]
    fn test_clean_content_tags() {
        let policy = Policy::telegram();
        assert_eq!(clean(&policy, "<script>alert(1)</script><b>x</b>"), "<b>x</b>");
        assert_eq!(clean(&policy, "<noscript><b>x</b></noscript>y"), "y");
        assert_eq!(clean(&policy, "<span><b>x</b></span>"), "<b>x</b>");
    }

    #[test]
    fn test_allowed_tag_wins_over_clean_content() {
        let policy = Policy::empty().allow_tag("textarea", &[]);
        assert_eq!(clean(&policy, "<textarea>t</textarea>"), "<textarea>t</textarea>");
    }

    #[test]
    fn test_spliced_text_is_merged() {
        let policy = Policy::empty();
        let nodes = policy.filter(parse("a<span>b</span>c"));
        assert_eq!(nodes, vec![Node::Text("abc".to_string())]);
    }
}
