//! Markup tree: tolerant tokenizer, tree builder and serializer.
//!
//! Parsing never fails. Recovery rules:
//! - `<` that does not open a tag, comment or declaration is text
//! - a construct still open at end of input is text from its `<` onwards
//! - stray end tags are ignored, unclosed elements close at end of input
//! - comments, doctypes and processing instructions are dropped
//! - `script` and `style` bodies are raw text up to the matching close tag
//! - elements nested deeper than [`MAX_DEPTH`] lose their tag, not their content

use tracing::trace;

use super::entities::{decode_attribute, decode_markup};
use super::escape_into;

/// Maximum nesting depth of elements in a parsed tree.
pub const MAX_DEPTH: usize = 128;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// A node of the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with its attributes (in source order) and children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Value of the named attribute, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.name.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Token {
    StartTag {
        name: String,
        attributes: Vec<(String, String)>,
        self_closing: bool,
    },
    EndTag(String),
    Text(String),
}

/// Outcome of scanning markup that starts at a `<`.
enum Scan {
    /// Not markup; the `<` is literal text.
    Text,
    /// Comment or declaration, dropped. Holds the offset just past it.
    Skip(usize),
    /// A tag token and the offset just past it.
    Tag(Token, usize),
    /// Runs into the end of input.
    Unterminated,
}

/// Parse markup into a list of top-level nodes.
pub fn parse(input: &str) -> Vec<Node> {
    let mut builder = TreeBuilder::default();
    for token in tokenize(input) {
        builder.push(token);
    }
    builder.finish()
}

/// Serialize nodes back to markup, escaping text and attribute values.
pub fn serialize(nodes: &[Node]) -> String {
    let mut out = String::new();
    write_nodes(nodes, &mut out);
    out
}

fn write_nodes(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => escape_into(text, out),
            Node::Element(element) => {
                out.push('<');
                out.push_str(&element.name);
                for (name, value) in &element.attributes {
                    out.push(' ');
                    out.push_str(name);
                    if !value.is_empty() {
                        out.push_str("=\"");
                        escape_into(value, out);
                        out.push('"');
                    }
                }
                out.push('>');
                if element.is_void() {
                    continue;
                }
                write_nodes(&element.children, out);
                out.push_str("</");
                out.push_str(&element.name);
                out.push('>');
            }
        }
    }
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b':' | b'.')
}

fn is_attribute_name_byte(b: u8) -> bool {
    !b.is_ascii_whitespace() && !matches!(b, b'/' | b'>' | b'=' | b'"' | b'\'' | b'<')
}

fn find_ignore_ascii_case(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    (0..=haystack.len() - needle.len())
        .find(|&i| haystack[i..i + needle.len()].eq_ignore_ascii_case(needle))
}

/// Find the `</name` that ends a raw-text body.
///
/// The name must be followed by whitespace, `/`, `>` or the end of input,
/// so `</scripty>` does not close `script`.
fn find_raw_text_close(bytes: &[u8], from: usize, close: &[u8]) -> Option<usize> {
    let mut pos = from;
    while let Some(rel) = find_ignore_ascii_case(&bytes[pos..], close) {
        let start = pos + rel;
        match bytes.get(start + close.len()) {
            None | Some(b'/' | b'>') => return Some(start),
            Some(b) if b.is_ascii_whitespace() => return Some(start),
            _ => pos = start + 1,
        }
    }
    None
}

fn find_byte(bytes: &[u8], from: usize, byte: u8) -> Option<usize> {
    bytes[from..].iter().position(|&b| b == byte).map(|rel| from + rel)
}

// Slice offsets are only ever taken at ASCII bytes, so they stay on char boundaries.
fn tokenize(input: &str) -> Vec<Token> {
    let bytes = input.as_bytes();
    let mut out = Vec::new();
    let mut text_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'<' {
            i += 1;
            continue;
        }
        match scan_markup(input, i) {
            Scan::Text => i += 1,
            Scan::Skip(end) => {
                push_text(&mut out, &input[text_start..i]);
                i = end;
                text_start = end;
            }
            Scan::Tag(token, end) => {
                push_text(&mut out, &input[text_start..i]);
                i = end;
                text_start = end;

                let raw_text = match &token {
                    Token::StartTag {
                        name, self_closing, ..
                    } if !self_closing && RAW_TEXT_ELEMENTS.contains(&name.as_str()) => {
                        Some(name.clone())
                    }
                    _ => None,
                };
                out.push(token);

                if let Some(name) = raw_text {
                    let close = format!("</{name}");
                    let (body_end, resume) =
                        match find_raw_text_close(bytes, i, close.as_bytes()) {
                            Some(close_start) => {
                                let resume = find_byte(bytes, close_start, b'>')
                                    .map_or(bytes.len(), |gt| gt + 1);
                                (close_start, resume)
                            }
                            None => (bytes.len(), bytes.len()),
                        };
                    if body_end > i {
                        out.push(Token::Text(input[i..body_end].to_string()));
                    }
                    out.push(Token::EndTag(name));
                    i = resume;
                    text_start = resume;
                }
            }
            Scan::Unterminated => break,
        }
    }

    push_text(&mut out, &input[text_start..]);
    out
}

fn push_text(out: &mut Vec<Token>, raw: &str) {
    if !raw.is_empty() {
        out.push(Token::Text(decode_markup(raw)));
    }
}

fn scan_markup(input: &str, start: usize) -> Scan {
    let bytes = input.as_bytes();
    let rest = &bytes[start..];

    if rest.starts_with(b"<!--") {
        return match find_ignore_ascii_case(&rest[4..], b"-->") {
            Some(rel) => Scan::Skip(start + 4 + rel + 3),
            None => Scan::Unterminated,
        };
    }

    match rest.get(1).copied() {
        Some(b'!' | b'?') => match find_byte(bytes, start, b'>') {
            Some(gt) => Scan::Skip(gt + 1),
            None => Scan::Unterminated,
        },
        Some(b'/') if rest.get(2).is_some_and(u8::is_ascii_alphabetic) => {
            let name_start = start + 2;
            let mut j = name_start;
            while j < bytes.len() && is_name_byte(bytes[j]) {
                j += 1;
            }
            let name = input[name_start..j].to_ascii_lowercase();
            match find_byte(bytes, j, b'>') {
                Some(gt) => Scan::Tag(Token::EndTag(name), gt + 1),
                None => Scan::Unterminated,
            }
        }
        Some(b) if b.is_ascii_alphabetic() => scan_start_tag(input, start),
        _ => Scan::Text,
    }
}

fn scan_start_tag(input: &str, start: usize) -> Scan {
    let bytes = input.as_bytes();
    let len = bytes.len();

    let name_start = start + 1;
    let mut k = name_start;
    while k < len && is_name_byte(bytes[k]) {
        k += 1;
    }
    let name = input[name_start..k].to_ascii_lowercase();

    let mut attributes: Vec<(String, String)> = Vec::new();
    let mut self_closing = false;

    loop {
        while k < len && bytes[k].is_ascii_whitespace() {
            k += 1;
        }
        if k >= len {
            return Scan::Unterminated;
        }
        match bytes[k] {
            b'>' => {
                k += 1;
                break;
            }
            b'/' => {
                if bytes.get(k + 1) == Some(&b'>') {
                    self_closing = true;
                    k += 2;
                    break;
                }
                k += 1;
                continue;
            }
            _ => {}
        }

        let attr_start = k;
        while k < len && is_attribute_name_byte(bytes[k]) {
            k += 1;
        }
        if attr_start == k {
            // A stray quote or `=` where a name should be.
            k += 1;
            continue;
        }
        let attr_name = input[attr_start..k].to_ascii_lowercase();

        while k < len && bytes[k].is_ascii_whitespace() {
            k += 1;
        }
        let mut value = String::new();
        if k < len && bytes[k] == b'=' {
            k += 1;
            while k < len && bytes[k].is_ascii_whitespace() {
                k += 1;
            }
            if k < len && (bytes[k] == b'"' || bytes[k] == b'\'') {
                let quote = bytes[k];
                let value_start = k + 1;
                let Some(close) = find_byte(bytes, value_start, quote) else {
                    return Scan::Unterminated;
                };
                value = decode_attribute(&input[value_start..close]);
                k = close + 1;
            } else {
                let value_start = k;
                while k < len && !bytes[k].is_ascii_whitespace() && bytes[k] != b'>' {
                    k += 1;
                }
                value = decode_attribute(&input[value_start..k]);
            }
        }

        if !attributes.iter().any(|(existing, _)| *existing == attr_name) {
            attributes.push((attr_name, value));
        }
    }

    Scan::Tag(
        Token::StartTag {
            name,
            attributes,
            self_closing,
        },
        k,
    )
}

#[derive(Default)]
struct TreeBuilder {
    root: Vec<Node>,
    open: Vec<Element>,
}

impl TreeBuilder {
    fn children(&mut self) -> &mut Vec<Node> {
        match self.open.last_mut() {
            Some(element) => &mut element.children,
            None => &mut self.root,
        }
    }

    fn push(&mut self, token: Token) {
        match token {
            Token::Text(text) => {
                let children = self.children();
                if let Some(Node::Text(previous)) = children.last_mut() {
                    previous.push_str(&text);
                } else {
                    children.push(Node::Text(text));
                }
            }
            Token::StartTag {
                name,
                attributes,
                self_closing,
            } => {
                let element = Element {
                    name,
                    attributes,
                    children: Vec::new(),
                };
                if self_closing || element.is_void() {
                    self.children().push(Node::Element(element));
                } else if self.open.len() >= MAX_DEPTH {
                    trace!("Nesting limit reached, dropping <{}>", element.name);
                } else {
                    self.open.push(element);
                }
            }
            Token::EndTag(name) => {
                if let Some(pos) = self.open.iter().rposition(|element| element.name == name) {
                    while self.open.len() > pos {
                        self.close_innermost();
                    }
                }
            }
        }
    }

    fn close_innermost(&mut self) {
        if let Some(element) = self.open.pop() {
            self.children().push(Node::Element(element));
        }
    }

    fn finish(mut self) -> Vec<Node> {
        while !self.open.is_empty() {
            self.close_innermost();
        }
        self.root
    }
}
