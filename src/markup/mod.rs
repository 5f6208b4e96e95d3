//! Chapter markup document model.
//!
//! [`parse`] turns sanitized chapter markup into a [`TextNode`] tree: a
//! typed, read-only structure the rendering engine walks. Tag names map
//! onto a closed [`NodeKind`] set; the `class` attribute is split into
//! tokens and kept apart from the remaining attributes; adjacent character
//! data is whitespace-collapsed and coalesced into single text nodes.

mod sanitize;

use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{Error, Result};

/// Structural kind of a [`TextNode`], derived from its tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The synthetic wrapper element produced by the sanitizer.
    Root,
    /// Block-level container (`div`, `p`).
    Block,
    Table,
    Row,
    Cell,
    /// Inline container (`span` and any unrecognized element).
    Span,
    /// Leaf character data.
    Text,
}

impl NodeKind {
    fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case(sanitize::SYNTHETIC_ROOT) {
            return NodeKind::Root;
        }
        match tag.to_ascii_lowercase().as_str() {
            "div" | "p" => NodeKind::Block,
            "table" => NodeKind::Table,
            "tr" => NodeKind::Row,
            "td" | "th" => NodeKind::Cell,
            _ => NodeKind::Span,
        }
    }
}

/// One node of the parsed markup tree.
///
/// Built once by [`parse`] and read-only afterward; the rendering engine
/// borrows the tree without mutating it.
#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    pub tag_name: String,
    pub kind: NodeKind,
    /// Coalesced character data. Only meaningful for [`NodeKind::Text`].
    pub text: String,
    pub children: Vec<TextNode>,
    /// Whitespace-split tokens of the `class` attribute, in order.
    pub classes: Vec<String>,
    /// Remaining attributes, `class` excluded.
    pub attributes: HashMap<String, String>,
}

impl TextNode {
    fn element(tag_name: String, classes: Vec<String>, attributes: HashMap<String, String>) -> Self {
        Self {
            kind: NodeKind::from_tag(&tag_name),
            tag_name,
            text: String::new(),
            children: Vec::new(),
            classes,
            attributes,
        }
    }

    fn character_data(text: String) -> Self {
        Self {
            tag_name: String::new(),
            kind: NodeKind::Text,
            text,
            children: Vec::new(),
            classes: Vec::new(),
            attributes: HashMap::new(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if self.kind == NodeKind::Text {
            out.push_str(&self.text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }
}

/// Parse chapter markup into a tree.
///
/// Returns the first real child of the synthetic root, or `Ok(None)` when
/// the markup yields no nodes at all. Malformed markup (mismatched tags,
/// broken attribute syntax) surfaces as [`Error::MarkupParse`].
pub fn parse(markup: &str) -> Result<Option<TextNode>> {
    let prepared = sanitize::prepare(markup);
    let mut reader = Reader::from_str(&prepared);

    let mut stack: Vec<TextNode> = Vec::new();
    let mut root: Option<TextNode> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => stack.push(element_node(&e)),
            Ok(Event::Empty(e)) => {
                let node = element_node(&e);
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(node);
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(parent) = stack.last_mut() {
                    append_character_data(parent, &String::from_utf8_lossy(e.as_ref()));
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if let Some(parent) = stack.last_mut() {
                    let entity = String::from_utf8_lossy(e.as_ref());
                    if let Some(resolved) = resolve_entity(&entity) {
                        append_character_data(parent, &resolved);
                    }
                }
            }
            Ok(Event::End(_)) => {
                if let Some(node) = stack.pop() {
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(node),
                        None => root = Some(node),
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {} // comments, declarations, processing instructions
            Err(e) => return Err(Error::MarkupParse(e)),
        }
    }

    Ok(root.and_then(|r| r.children.into_iter().next()))
}

fn element_node(e: &BytesStart<'_>) -> TextNode {
    let tag_name = String::from_utf8_lossy(e.name().as_ref()).into_owned();

    let mut classes = Vec::new();
    let mut attributes = HashMap::new();
    for attr in e.attributes().flatten() {
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = String::from_utf8_lossy(attr.value.as_ref()).into_owned();
        if key == "class" {
            classes = value.split_whitespace().map(str::to_string).collect();
        } else {
            attributes.insert(key, value);
        }
    }

    TextNode::element(tag_name, classes, attributes)
}

/// Append raw character data to `parent`, collapsing whitespace runs to
/// single spaces and coalescing with a trailing text child when present.
/// One leading/trailing space survives as a marker when the raw data had
/// surrounding whitespace.
fn append_character_data(parent: &mut TextNode, raw: &str) {
    let has_leading = raw.starts_with(char::is_whitespace);
    let has_trailing = raw.ends_with(char::is_whitespace);
    let words: Vec<&str> = raw.split_whitespace().collect();

    if words.is_empty() {
        // Whitespace-only run: keep a single space marker on the trailing
        // text child, if any.
        if !raw.is_empty()
            && let Some(last) = parent.children.last_mut()
            && last.kind == NodeKind::Text
            && !last.text.ends_with(' ')
        {
            last.text.push(' ');
        }
        return;
    }

    let mut fragment = String::new();
    if has_leading && !parent.children.is_empty() {
        fragment.push(' ');
    }
    fragment.push_str(&words.join(" "));
    if has_trailing {
        fragment.push(' ');
    }

    match parent.children.last_mut() {
        Some(last) if last.kind == NodeKind::Text => {
            if last.text.ends_with(' ') && fragment.starts_with(' ') {
                fragment.remove(0);
            }
            last.text.push_str(&fragment);
        }
        _ => parent.children.push(TextNode::character_data(fragment)),
    }
}

/// Fixed entity table: the XML five, the HTML names chapter markup uses,
/// and numeric character references.
fn resolve_entity(entity: &str) -> Option<String> {
    let named = match entity {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => "\u{a0}",
        "shy" => "\u{ad}",
        "mdash" => "\u{2014}",
        "ndash" => "\u{2013}",
        "ldquo" => "\u{201c}",
        "rdquo" => "\u{201d}",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "hellip" => "\u{2026}",
        _ => "",
    };
    if !named.is_empty() {
        return Some(named.to_string());
    }

    if let Some(hex) = entity.strip_prefix("#x") {
        if let Ok(code) = u32::from_str_radix(hex, 16)
            && let Some(c) = char::from_u32(code)
        {
            return Some(c.to_string());
        }
    } else if let Some(dec) = entity.strip_prefix('#')
        && let Ok(code) = dec.parse::<u32>()
        && let Some(c) = char::from_u32(code)
    {
        return Some(c.to_string());
    }

    None
}
