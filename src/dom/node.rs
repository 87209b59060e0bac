// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Markup tree types
//!
//! A document is an owned tree of [`MarkupNode`]s. Each sanitize call
//! builds its own tree, rewrites it in place and serializes it back; no
//! node outlives the call.

/// An attribute attached to an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name, including any namespace prefix (`xlink:href`)
    pub name: String,
    /// Decoded attribute value
    pub value: String,
}

impl Attribute {
    /// Create a new attribute
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Name lower-cased for allow-list lookups
    pub fn lookup_name(&self) -> String {
        self.name.to_ascii_lowercase()
    }
}

/// An element with its ordered attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name as produced by the parser
    pub name: String,
    /// Attributes in source order
    pub attributes: Vec<Attribute>,
    /// Child nodes in source order
    pub children: Vec<MarkupNode>,
}

impl Element {
    /// Create an empty element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Tag name in lowercase
    pub fn local_name(&self) -> String {
        self.name.to_ascii_lowercase()
    }

    /// Get an attribute value
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, keeping its position if it already exists
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self
            .attributes
            .iter_mut()
            .find(|a| a.name.eq_ignore_ascii_case(name))
        {
            Some(attr) => attr.value = value,
            None => self.attributes.push(Attribute::new(name, value)),
        }
    }
}

/// A node in the markup tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    /// Element node (like <div>, <p>, etc.)
    Element(Element),
    /// Text node, decoded
    Text(String),
    /// Comment node
    Comment(String),
}

impl MarkupNode {
    /// Create an element node
    pub fn element(element: Element) -> Self {
        MarkupNode::Element(element)
    }

    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        MarkupNode::Text(content.into())
    }

    /// Borrow the element, if any
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            MarkupNode::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Get text content
    pub fn text_content(&self) -> String {
        match self {
            MarkupNode::Text(text) => text.clone(),
            MarkupNode::Element(el) => el.children.iter().map(|c| c.text_content()).collect(),
            MarkupNode::Comment(_) => String::new(),
        }
    }

    /// Serialize this node to HTML
    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        serialize_node(self, &mut out);
        out
    }
}

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

const NEWLINE_EATING_ELEMENTS: &[&str] = &["pre", "textarea", "listing"];

/// Serialize a node list to an HTML string
pub fn serialize(nodes: &[MarkupNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        serialize_node(node, &mut out);
    }
    out
}

fn serialize_node(node: &MarkupNode, out: &mut String) {
    match node {
        MarkupNode::Text(text) => out.push_str(&escape_text(text)),
        MarkupNode::Comment(text) => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
        MarkupNode::Element(el) => {
            out.push('<');
            out.push_str(&el.name);
            for attr in &el.attributes {
                // Always quoted, so a reparse yields the same attribute
                out.push(' ');
                out.push_str(&attr.name);
                out.push_str("=\"");
                out.push_str(&escape_attr(&attr.value));
                out.push('"');
            }
            out.push('>');

            // The parser eats one leading newline in these, so give it one
            if NEWLINE_EATING_ELEMENTS.contains(&el.local_name().as_str()) {
                if let Some(MarkupNode::Text(text)) = el.children.first() {
                    if text.starts_with('\n') {
                        out.push('\n');
                    }
                }
            }

            if VOID_ELEMENTS.contains(&el.local_name().as_str()) {
                return;
            }
            for child in &el.children {
                serialize_node(child, out);
            }
            out.push_str("</");
            out.push_str(&el.name);
            out.push('>');
        }
    }
}

/// Escape text content.
///
/// Quotes are escaped too, so in serialized output a raw quote only ever
/// delimits an attribute value.
pub fn escape_text(s: &str) -> String {
    escape_attr(s)
}

/// Escape an attribute value for a double-quoted context
pub fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Reverse [`escape_attr`] on a value this serializer produced
pub fn unescape_attr(s: &str) -> String {
    s.replace("&#39;", "'")
        .replace("&quot;", "\"")
        .replace("&gt;", ">")
        .replace("&lt;", "<")
        .replace("&amp;", "&")
}
