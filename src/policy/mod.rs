// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Allow-list policy
//!
//! An [`AllowPolicy`] is an immutable value handed to every sanitize call.
//! The effective allow-list of a call is always the built-in lists unioned
//! with the policy's custom extensions; feature flags only narrow it.

pub mod defaults;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorContext, Result};

/// Sanitizer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AllowPolicy {
    /// Keep allow-listed `on*` handlers in the structural pass
    allow_inline_scripts: bool,
    /// Keep filtered `style` attributes
    allow_inline_styles: bool,
    /// Keep sandboxed `iframe` elements
    allow_iframes: bool,
    /// Add `rel="noopener noreferrer"` to external links
    harden_external_links: bool,
    /// Extra element names
    custom_tags: HashSet<String>,
    /// Extra attribute names
    custom_attrs: HashSet<String>,
    /// Input size cap in bytes
    max_input_len: usize,
    /// Element nesting cap
    max_depth: usize,
}

impl Default for AllowPolicy {
    fn default() -> Self {
        Self {
            allow_inline_scripts: true,
            allow_inline_styles: true,
            allow_iframes: false,
            harden_external_links: false,
            custom_tags: HashSet::new(),
            custom_attrs: HashSet::new(),
            max_input_len: defaults::DEFAULT_MAX_INPUT_LEN,
            max_depth: defaults::DEFAULT_MAX_DEPTH,
        }
    }
}

impl AllowPolicy {
    /// Create the default policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Policy for the write boundary, right after generation
    pub fn for_ingest() -> Self {
        Self::default()
    }

    /// Policy for the read boundary, right before display
    pub fn for_render() -> Self {
        Self {
            harden_external_links: true,
            ..Default::default()
        }
    }

    /// Parse a policy from JSON; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let policy = serde_json::from_str::<Self>(json).context("parsing policy")?;
        policy.checked()
    }

    /// Load a policy from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .context(&format!("reading policy {}", path.display()))?;
        Self::from_json(&json)
    }

    fn checked(mut self) -> Result<Self> {
        if self.max_input_len == 0 {
            return Err(Error::policy("maxInputLen must be greater than zero"));
        }
        if self.max_depth == 0 {
            return Err(Error::policy("maxDepth must be greater than zero"));
        }
        // Extensions are matched case-insensitively like everything else
        self.custom_tags = self.custom_tags.iter().map(|t| t.to_ascii_lowercase()).collect();
        self.custom_attrs = self.custom_attrs.iter().map(|a| a.to_ascii_lowercase()).collect();
        Ok(self)
    }

    /// Enable/disable inline event handlers
    pub fn allow_inline_scripts(mut self, allow: bool) -> Self {
        self.allow_inline_scripts = allow;
        self
    }

    /// Enable/disable inline styles
    pub fn allow_inline_styles(mut self, allow: bool) -> Self {
        self.allow_inline_styles = allow;
        self
    }

    /// Enable/disable sandboxed iframes
    pub fn allow_iframes(mut self, allow: bool) -> Self {
        self.allow_iframes = allow;
        self
    }

    /// Enable/disable external link hardening
    pub fn harden_external_links(mut self, harden: bool) -> Self {
        self.harden_external_links = harden;
        self
    }

    /// Add a custom element name
    pub fn custom_tag(mut self, tag: impl Into<String>) -> Self {
        self.custom_tags.insert(tag.into().to_ascii_lowercase());
        self
    }

    /// Add a custom attribute name
    pub fn custom_attr(mut self, attr: impl Into<String>) -> Self {
        self.custom_attrs.insert(attr.into().to_ascii_lowercase());
        self
    }

    /// Set the input size cap
    pub fn max_input_len(mut self, len: usize) -> Self {
        self.max_input_len = len.max(1);
        self
    }

    /// Set the nesting cap
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.max(1);
        self
    }

    pub fn inline_scripts_allowed(&self) -> bool {
        self.allow_inline_scripts
    }

    pub fn inline_styles_allowed(&self) -> bool {
        self.allow_inline_styles
    }

    pub fn iframes_allowed(&self) -> bool {
        self.allow_iframes
    }

    pub fn hardens_external_links(&self) -> bool {
        self.harden_external_links
    }

    pub fn input_limit(&self) -> usize {
        self.max_input_len
    }

    pub fn depth_limit(&self) -> usize {
        self.max_depth
    }

    /// Check an element name against the effective element set
    pub fn allows_tag(&self, tag: &str) -> bool {
        let tag = tag.to_ascii_lowercase();
        if defaults::DENIED_TAGS.contains(&tag.as_str()) {
            return false;
        }
        if tag == "iframe" {
            return self.allow_iframes;
        }
        defaults::ALLOWED_TAGS.contains(&tag.as_str()) || self.custom_tags.contains(&tag)
    }

    /// Whether a disallowed element takes its content with it
    pub fn drops_content(&self, tag: &str) -> bool {
        defaults::DROP_CONTENT_TAGS.contains(&tag.to_ascii_lowercase().as_str())
    }

    /// Check an attribute name against the effective attribute rules.
    ///
    /// Exact names are checked first, then the wildcard families. Flags
    /// are applied last and can only reject.
    pub fn allows_attr(&self, attr: &str) -> bool {
        let attr = attr.to_ascii_lowercase();
        if defaults::DENIED_ATTRS.contains(&attr.as_str()) {
            return false;
        }
        let listed = defaults::ALLOWED_ATTRS.contains(&attr.as_str())
            || self.custom_attrs.contains(&attr)
            || defaults::ALLOWED_ATTR_PREFIXES
                .iter()
                .any(|prefix| attr.len() > prefix.len() && attr.starts_with(prefix));
        if !listed {
            return false;
        }
        if attr.starts_with("on") && !self.allow_inline_scripts {
            return false;
        }
        if attr == "style" && !self.allow_inline_styles {
            return false;
        }
        true
    }

    /// Check a CSS property against the allowed set (exact, lower-cased)
    pub fn allows_css_property(&self, property: &str) -> bool {
        defaults::ALLOWED_CSS.contains(&property.to_ascii_lowercase().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let policy = AllowPolicy::default();
        assert!(policy.inline_scripts_allowed());
        assert!(policy.inline_styles_allowed());
        assert!(!policy.iframes_allowed());
        assert!(!policy.hardens_external_links());
        assert!(AllowPolicy::for_render().hardens_external_links());
    }

    #[test]
    fn test_tag_rules() {
        let policy = AllowPolicy::default().custom_tag("Widget");
        assert!(policy.allows_tag("div"));
        assert!(policy.allows_tag("DIV"));
        assert!(policy.allows_tag("widget"));
        assert!(!policy.allows_tag("script"));
        assert!(!policy.allows_tag("iframe"));
        assert!(policy.clone().allow_iframes(true).allows_tag("iframe"));
    }

    #[test]
    fn test_denied_tags_beat_custom_tags() {
        let policy = AllowPolicy::default()
            .custom_tag("script")
            .custom_tag("OBJECT")
            .custom_tag("embed");
        assert!(!policy.allows_tag("script"));
        assert!(!policy.allows_tag("object"));
        assert!(!policy.allows_tag("embed"));

        let policy = AllowPolicy::from_json(r#"{"customTags": ["script", "x-ok"]}"#).unwrap();
        assert!(!policy.allows_tag("script"));
        assert!(policy.allows_tag("x-ok"));
    }

    #[test]
    fn test_attr_wildcards() {
        let policy = AllowPolicy::default();
        assert!(policy.allows_attr("data-id"));
        assert!(policy.allows_attr("aria-label"));
        assert!(!policy.allows_attr("data-"));
        assert!(!policy.allows_attr("srcdoc"));
        assert!(!policy.allows_attr("formaction"));
    }

    #[test]
    fn test_hard_denied_handlers() {
        let policy = AllowPolicy::default().custom_attr("onerror").custom_attr("onfocus");
        assert!(!policy.allows_attr("onerror"));
        assert!(!policy.allows_attr("onload"));
        assert!(!policy.allows_attr("onmouseover"));
        assert!(policy.allows_attr("onfocus"));
    }

    #[test]
    fn test_flags_narrow() {
        let policy = AllowPolicy::default()
            .allow_inline_scripts(false)
            .allow_inline_styles(false)
            .custom_attr("onfocus");
        assert!(!policy.allows_attr("onclick"));
        assert!(!policy.allows_attr("onfocus"));
        assert!(!policy.allows_attr("style"));
        assert!(policy.allows_attr("class"));
    }

    #[test]
    fn test_css_properties() {
        let policy = AllowPolicy::default();
        assert!(policy.allows_css_property("color"));
        assert!(policy.allows_css_property("Background-Color"));
        assert!(!policy.allows_css_property("-webkit-transform"));
        assert!(!policy.allows_css_property("behavior"));
    }

    #[test]
    fn test_from_json() {
        let policy = AllowPolicy::from_json(
            r#"{"allowInlineScripts": false, "customTags": ["X-Card"], "maxDepth": 32}"#,
        )
        .unwrap();
        assert!(!policy.inline_scripts_allowed());
        assert!(policy.inline_styles_allowed());
        assert!(policy.allows_tag("x-card"));
        assert_eq!(policy.depth_limit(), 32);
        assert_eq!(policy.input_limit(), defaults::DEFAULT_MAX_INPUT_LEN);
    }

    #[test]
    fn test_from_json_rejects_zero_limits() {
        let err = AllowPolicy::from_json(r#"{"maxInputLen": 0}"#).unwrap_err();
        assert!(matches!(err, Error::Policy(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.json");
        std::fs::write(&path, r#"{"allowIframes": true}"#).unwrap();

        let policy = AllowPolicy::from_file(&path).unwrap();
        assert!(policy.iframes_allowed());

        assert!(AllowPolicy::from_file(dir.path().join("missing.json")).is_err());
    }
}
