// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Stage 3: pattern passes after the structural walk
//!
//! The residue sweep runs over the cleaned tree, on decoded text and
//! attribute values, so a match can never reach across markup. The recheck
//! then runs on the serialized string and only looks inside open tags.
//! Failing attribute values are neutralized in place (`href="#"`,
//! `src=""`) instead of removed, which keeps the markup well formed.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;

use super::StructuralSanitizer;
use crate::dom::{escape_attr, unescape_attr, MarkupNode};
use crate::error::Result;
use crate::policy::AllowPolicy;
use crate::security::patterns::{
    strip_until_stable, CSS_EXECUTION, EVENT_HANDLER, JAVASCRIPT_PROTOCOL, SCRIPT_DATA_URL,
    VBSCRIPT_PROTOCOL,
};
use crate::security::{filter_css_with, is_safe_src, is_safe_url};

lazy_static! {
    static ref OPEN_TAG: Regex = Regex::new(r"<[a-zA-Z][^<>]*>").unwrap();
    static ref QUOTED_ATTR: Regex = Regex::new(r#"(\s+)([^\s"'=<>/]+)="([^"]*)""#).unwrap();
}

/// Attribute kinds the recheck looks at, matched by name or name suffix
const RECHECKED: &[&str] = &["style", "href", "src"];

fn residue_patterns() -> [&'static Regex; 5] {
    [
        &*EVENT_HANDLER,
        &*JAVASCRIPT_PROTOCOL,
        &*VBSCRIPT_PROTOCOL,
        &*SCRIPT_DATA_URL,
        &*CSS_EXECUTION,
    ]
}

/// Remove script vectors left in decoded text and attribute values.
///
/// Attributes whose name itself matches a vector are dropped. An element
/// whose values changed goes through the structural attribute check again.
pub fn sweep_nodes(nodes: &mut [MarkupNode], policy: &AllowPolicy) -> Result<()> {
    let structural = StructuralSanitizer::new(policy);
    sweep(nodes, &structural)
}

fn sweep(nodes: &mut [MarkupNode], structural: &StructuralSanitizer<'_>) -> Result<()> {
    let patterns = residue_patterns();

    for node in nodes.iter_mut() {
        match node {
            MarkupNode::Text(text) => {
                let swept = strip_until_stable(text, &patterns)?;
                if swept != *text {
                    debug!("Swept script residue from text");
                    *text = swept;
                }
            }
            MarkupNode::Comment(_) => {}
            MarkupNode::Element(element) => {
                let before = element.attributes.len();
                element.attributes.retain(|attr| {
                    let assignment = format!("{}=", attr.name);
                    !patterns.iter().any(|p| p.is_match(&assignment))
                });
                let mut changed = element.attributes.len() != before;

                for attr in element.attributes.iter_mut() {
                    let swept = strip_until_stable(&attr.value, &patterns)?;
                    if swept != attr.value {
                        attr.value = swept;
                        changed = true;
                    }
                }
                if changed {
                    debug!(tag = %element.name, "Swept script residue from attributes");
                    structural.clean_attributes(element);
                }

                sweep(&mut element.children, structural)?;
            }
        }
    }
    Ok(())
}

/// Re-check `style`, `href` and `src` values in serialized output
pub fn postfilter(html: &str, policy: &AllowPolicy) -> Result<String> {
    Ok(OPEN_TAG
        .replace_all(html, |tag: &Captures| {
            QUOTED_ATTR
                .replace_all(&tag[0], |attr: &Captures| recheck_attribute(attr, policy))
                .into_owned()
        })
        .into_owned())
}

fn recheck_attribute(caps: &Captures, policy: &AllowPolicy) -> String {
    let (space, name) = (&caps[1], &caps[2]);
    let value = unescape_attr(&caps[3]);

    match rechecked_kind(name) {
        Some("style") => {
            let filtered = if policy.inline_styles_allowed() {
                filter_css_with(&value, policy)
            } else {
                String::new()
            };
            if filtered.is_empty() {
                debug!(attribute = %name, "Removed inline style");
                return String::new();
            }
            format!("{}{}=\"{}\"", space, name, escape_attr(&filtered))
        }
        Some("href") if !is_safe_url(&value) => {
            debug!(attribute = %name, "Neutralized href");
            format!("{}{}=\"#\"", space, name)
        }
        Some("src") if !is_safe_src(&value) => {
            debug!(attribute = %name, "Neutralized src");
            format!("{}{}=\"\"", space, name)
        }
        _ => caps[0].to_string(),
    }
}

/// `href`, `data-href` and `xlink:href` all count as `href`
fn rechecked_kind(name: &str) -> Option<&'static str> {
    let name = name.to_ascii_lowercase();
    RECHECKED.iter().copied().find(|kind| match name.strip_suffix(*kind) {
        Some("") => true,
        Some(rest) => rest.ends_with('-') || rest.ends_with(':'),
        None => false,
    })
}
