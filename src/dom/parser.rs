// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTML fragment parser using html5ever

use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{parse_fragment as parse_html_fragment, LocalName, Namespace, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use super::node::{Attribute, Element, MarkupNode};
use crate::error::{Error, Result};

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Parse an HTML fragment the way `innerHTML` on a `<div>` would
pub fn parse_fragment(html: &str) -> Result<Vec<MarkupNode>> {
    parse_fragment_with_depth(html, usize::MAX)
}

/// Parse an HTML fragment, rejecting element nesting deeper than `max_depth`
pub fn parse_fragment_with_depth(html: &str, max_depth: usize) -> Result<Vec<MarkupNode>> {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: true,
            ..Default::default()
        },
        ..Default::default()
    };
    let context = QualName::new(
        None,
        Namespace::from(HTML_NAMESPACE),
        LocalName::from("div"),
    );

    let dom = parse_html_fragment(RcDom::default(), opts, context, Vec::new())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|e| Error::html_parse(e.to_string()))?;

    // Fragment parsing hangs the content off a synthetic <html> root
    let document = dom.document.children.borrow();
    let root = document
        .first()
        .ok_or_else(|| Error::html_parse("fragment parser produced no root"))?;

    let converter = TreeConverter::new(max_depth);
    converter.convert_children(root, 0)
}

/// Converts html5ever's shared-handle tree into an owned tree
struct TreeConverter {
    max_depth: usize,
}

impl TreeConverter {
    fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    fn convert_children(&self, handle: &Handle, depth: usize) -> Result<Vec<MarkupNode>> {
        let mut out = Vec::new();
        for child in handle.children.borrow().iter() {
            if let Some(node) = self.convert_node(child, depth)? {
                out.push(node);
            }
        }
        Ok(out)
    }

    fn convert_node(&self, handle: &Handle, depth: usize) -> Result<Option<MarkupNode>> {
        let node = match handle.data {
            RcNodeData::Text { ref contents } => MarkupNode::Text(contents.borrow().to_string()),
            RcNodeData::Comment { ref contents } => MarkupNode::Comment(contents.to_string()),
            RcNodeData::Element {
                ref name,
                ref attrs,
                ..
            } => {
                let depth = depth + 1;
                if depth > self.max_depth {
                    return Err(Error::nesting_too_deep(depth, self.max_depth));
                }

                let mut element = Element::new(name.local.to_string());
                for attr in attrs.borrow().iter() {
                    let attr_name = match attr.name.prefix {
                        Some(ref prefix) => format!("{}:{}", prefix, attr.name.local),
                        None => attr.name.local.to_string(),
                    };
                    element
                        .attributes
                        .push(Attribute::new(attr_name, attr.value.to_string()));
                }
                element.children = self.convert_children(handle, depth)?;
                MarkupNode::Element(element)
            }
            // Doctypes and processing instructions never reach the output
            RcNodeData::Document
            | RcNodeData::Doctype { .. }
            | RcNodeData::ProcessingInstruction { .. } => return Ok(None),
        };
        Ok(Some(node))
    }
}
