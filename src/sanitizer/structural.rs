// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Stage 2: allow-list walk over the parsed tree

use tracing::debug;

use crate::dom::{parse_fragment_with_depth, serialize, Element, MarkupNode};
use crate::error::Result;
use crate::policy::AllowPolicy;
use crate::security::{filter_css_with, is_external_http, is_safe_src, is_safe_url};

const EXTERNAL_LINK_REL: &str = "noopener noreferrer";

/// Tree-walking sanitizer bound to one policy
pub struct StructuralSanitizer<'a> {
    policy: &'a AllowPolicy,
}

impl<'a> StructuralSanitizer<'a> {
    /// Create a sanitizer for a policy
    pub fn new(policy: &'a AllowPolicy) -> Self {
        Self { policy }
    }

    /// Parse a fragment and walk it
    pub fn sanitize_tree(&self, html: &str) -> Result<Vec<MarkupNode>> {
        let nodes = parse_fragment_with_depth(html, self.policy.depth_limit())?;
        Ok(self.sanitize_nodes(nodes))
    }

    /// Parse, walk and serialize a fragment
    pub fn sanitize_html(&self, html: &str) -> Result<String> {
        Ok(serialize(&self.sanitize_tree(html)?))
    }

    /// Walk a node list depth-first, pre-order.
    ///
    /// Disallowed elements are excised and their children take their place,
    /// unless the element is one whose content must go with it. Text left
    /// adjacent by a removal is merged into one node.
    pub fn sanitize_nodes(&self, nodes: Vec<MarkupNode>) -> Vec<MarkupNode> {
        let mut out = Vec::with_capacity(nodes.len());
        for node in nodes {
            match node {
                MarkupNode::Text(text) => push_text(&mut out, text),
                MarkupNode::Comment(_) => {}
                MarkupNode::Element(mut element) => {
                    let tag = element.local_name();
                    let children = std::mem::take(&mut element.children);

                    if !self.policy.allows_tag(&tag) {
                        if self.policy.drops_content(&tag) {
                            debug!(tag = %tag, "Dropped element with its content");
                        } else {
                            debug!(tag = %tag, "Flattened disallowed element");
                            for child in self.sanitize_nodes(children) {
                                match child {
                                    MarkupNode::Text(text) => push_text(&mut out, text),
                                    other => out.push(other),
                                }
                            }
                        }
                        continue;
                    }

                    self.clean_attributes(&mut element);
                    element.children = self.sanitize_nodes(children);
                    out.push(MarkupNode::Element(element));
                }
            }
        }
        out
    }

    /// Drop every attribute the policy does not allow, vet URL and style values
    pub fn clean_attributes(&self, element: &mut Element) {
        let tag = element.local_name();

        for mut attr in std::mem::take(&mut element.attributes) {
            let name = attr.lookup_name();
            if !self.policy.allows_attr(&name) {
                debug!(tag = %tag, attribute = %name, "Dropped attribute");
                continue;
            }

            match name.as_str() {
                "href" if !is_safe_url(&attr.value) => {
                    debug!(tag = %tag, attribute = %name, "Dropped unsafe URL");
                    continue;
                }
                "src" if !is_safe_src(&attr.value) => {
                    debug!(tag = %tag, attribute = %name, "Dropped unsafe URL");
                    continue;
                }
                "style" => {
                    let filtered = filter_css_with(&attr.value, self.policy);
                    if filtered.is_empty() {
                        debug!(tag = %tag, "Dropped empty style");
                        continue;
                    }
                    attr.value = filtered;
                }
                _ => {}
            }
            element.attributes.push(attr);
        }

        if tag == "iframe" {
            element.set_attribute("sandbox", "");
        }

        if tag == "a" && self.policy.hardens_external_links() {
            let external = element
                .get_attribute("href")
                .map(is_external_http)
                .unwrap_or(false);
            if external {
                element.set_attribute("rel", EXTERNAL_LINK_REL);
            }
        }
    }
}

fn push_text(out: &mut Vec<MarkupNode>, text: String) {
    match out.last_mut() {
        Some(MarkupNode::Text(last)) => last.push_str(&text),
        _ => out.push(MarkupNode::Text(text)),
    }
}
