//! Document tree access
//!
//! The scanner only needs a handful of questions answered about a node, captured by
//! [`MarkupNode`]. The html5ever rcdom handle implements it; anything else that can answer the
//! same questions can be scanned too.

use crate::error::{Result, ScrapeError};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::Read;

/// Any whitespace run holding a line break, as left by the source markup's indentation
static LINE_INDENTATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\n\s*").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
    /// Documents, comments, doctypes, processing instructions
    Other,
}

/// Read-only view of a node in a parsed markup tree
pub trait MarkupNode: Sized {
    fn kind(&self) -> NodeKind;

    /// Local tag name, for element nodes
    fn tag_name(&self) -> Option<String>;

    /// Value of the attribute `key`, for element nodes
    fn attribute(&self, key: &str) -> Option<String>;

    fn children(&self) -> Vec<Self>;

    /// Character data, for text nodes
    fn text(&self) -> Option<String>;

    /// Whether this is an element named `tag`
    fn is_element(&self, tag: &str) -> bool {
        self.kind() == NodeKind::Element && self.tag_name().as_deref() == Some(tag)
    }
}

impl MarkupNode for Handle {
    fn kind(&self) -> NodeKind {
        match self.data {
            NodeData::Element { .. } => NodeKind::Element,
            NodeData::Text { .. } => NodeKind::Text,
            _ => NodeKind::Other,
        }
    }

    fn tag_name(&self) -> Option<String> {
        match &self.data {
            NodeData::Element { name, .. } => Some(name.local.to_string()),
            _ => None,
        }
    }

    fn attribute(&self, key: &str) -> Option<String> {
        match &self.data {
            NodeData::Element { attrs, .. } => attrs
                .borrow()
                .iter()
                .find(|attr| &*attr.name.local == key)
                .map(|attr| attr.value.to_string()),
            _ => None,
        }
    }

    fn children(&self) -> Vec<Self> {
        self.children.borrow().clone()
    }

    fn text(&self) -> Option<String> {
        match &self.data {
            NodeData::Text { contents } => Some(contents.borrow().to_string()),
            _ => None,
        }
    }
}

/// Parse an HTML byte stream into an rcdom tree
///
/// html5ever recovers from malformed markup, so only I/O failures on the stream end up here.
pub fn parse_html<R: Read>(mut reader: R) -> Result<RcDom> {
    parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .read_from(&mut reader)
        .map_err(|e| ScrapeError::Parse(format!("failed to read document: {}", e)))
}

/// Depth-first search for the first element named `tag`, starting with `node` itself
pub fn find_first<N: MarkupNode + Clone>(node: &N, tag: &str) -> Option<N> {
    if node.is_element(tag) {
        return Some(node.clone());
    }
    node.children()
        .iter()
        .find_map(|child| find_first(child, tag))
}

/// Concatenated text of every descendant text node
///
/// Whitespace runs containing a line break collapse to a single space, and the result is
/// trimmed.
pub fn gather_text<N: MarkupNode>(node: &N) -> String {
    let mut buffer = String::new();
    collect_text(node, &mut buffer);
    buffer.trim().to_string()
}

fn collect_text<N: MarkupNode>(node: &N, buffer: &mut String) {
    match node.kind() {
        NodeKind::Text => {
            if let Some(text) = node.text() {
                buffer.push_str(&LINE_INDENTATION.replace_all(&text, " "));
            }
        }
        _ => {
            for child in node.children() {
                collect_text(&child, buffer);
            }
        }
    }
}
