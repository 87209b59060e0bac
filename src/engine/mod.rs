// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Boundary facade
//!
//! Generated markup crosses two boundaries: once when it is stored right
//! after generation, and again right before it is displayed. Both run the
//! same sanitizer core with their own policy, then gate on the validator.

use tracing::{info, warn};

use crate::error::Result;
use crate::policy::AllowPolicy;
use crate::render::{RenderConfig, RenderFrame};
use crate::sanitizer::Sanitizer;
use crate::validator::Validator;

/// Ingest and render gates over one sanitizer core
pub struct Engine {
    ingest: Sanitizer,
    render: Sanitizer,
    validator: Validator,
    render_config: RenderConfig,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create an engine with the boundary presets
    pub fn new() -> Self {
        Self::with_policies(AllowPolicy::for_ingest(), AllowPolicy::for_render())
    }

    /// Create an engine with explicit boundary policies
    pub fn with_policies(ingest: AllowPolicy, render: AllowPolicy) -> Self {
        Self {
            ingest: Sanitizer::new(ingest),
            render: Sanitizer::new(render),
            validator: Validator::new(),
            render_config: RenderConfig::default(),
        }
    }

    /// Set the render config
    pub fn render_config(mut self, config: RenderConfig) -> Self {
        self.render_config = config;
        self
    }

    /// Get the ingest sanitizer
    pub fn ingest_sanitizer(&self) -> &Sanitizer {
        &self.ingest
    }

    /// Get the render sanitizer
    pub fn render_sanitizer(&self) -> &Sanitizer {
        &self.render
    }

    /// Get the validator
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Sanitize freshly generated markup for storage.
    ///
    /// Fails with [`crate::Error::ValidationFailed`] if anything risky is
    /// left after sanitizing, or with a limit error for oversized input.
    pub fn ingest(&self, markup: &str) -> Result<String> {
        let sanitized = self.ingest.sanitize_bounded(markup)?;
        self.gate(&sanitized, "ingest")?;
        info!(
            input_len = markup.len(),
            output_len = sanitized.len(),
            "Markup accepted for storage"
        );
        Ok(sanitized)
    }

    /// Sanitize stored markup again and wrap it for sandboxed display
    pub fn admit(&self, markup: &str) -> Result<RenderFrame> {
        let sanitized = self.render.sanitize_bounded(markup)?;
        self.gate(&sanitized, "render")?;
        info!(output_len = sanitized.len(), "Markup admitted for display");
        Ok(RenderFrame::build(&sanitized, &self.render_config))
    }

    fn gate(&self, sanitized: &str, boundary: &'static str) -> Result<()> {
        let report = self.validator.validate(sanitized);
        if !report.is_valid() {
            warn!(boundary, violations = ?report.descriptions(), "Markup rejected");
        }
        report.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitizer::FALLBACK_HTML;
    use crate::validator::Violation;

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }

    #[test]
    fn test_ingest_sanitizes() {
        let engine = Engine::new();
        let out = engine
            .ingest(r#"<div onclick="x()"><script>alert(1)</script><p>ok</p></div>"#)
            .unwrap();
        assert_eq!(out, "<div><p>ok</p></div>");
    }

    #[test]
    fn test_ingest_rejects_residual_risk() {
        let policy = AllowPolicy::for_ingest().allow_iframes(true);
        let engine = Engine::with_policies(policy, AllowPolicy::for_render());

        let err = engine
            .ingest(r#"<iframe src="https://example.com"></iframe>"#)
            .unwrap_err();
        assert!(err.is_validation_failure());
        assert_eq!(err.violations(), &[Violation::EmbeddedContent]);
        assert!(!err.user_message().contains("iframe"));
    }

    #[test]
    fn test_ingest_surfaces_limits() {
        let policy = AllowPolicy::for_ingest().max_input_len(32);
        let engine = Engine::with_policies(policy, AllowPolicy::for_render());

        let err = engine.ingest(&"<p>x</p>".repeat(10)).unwrap_err();
        assert!(err.is_limit());
    }

    #[test]
    fn test_malformed_input_degrades() {
        let engine = Engine::new();
        let deep = "<div>".repeat(300);
        let policy_depth = engine.ingest_sanitizer().policy().depth_limit();
        assert!(300 > policy_depth);

        // Depth is a limit, so it is reported rather than replaced
        assert!(engine.ingest(&deep).unwrap_err().is_limit());

        let mut nested = String::from("expression(");
        for _ in 0..crate::security::patterns::MAX_STRIP_PASSES {
            nested = nested.replacen("expression(", "expexpression(ression(", 1);
        }
        assert_eq!(engine.ingest(&nested).unwrap(), FALLBACK_HTML);
    }

    #[test]
    fn test_admit_builds_hardened_frame() {
        let engine = Engine::new();
        assert!(engine.render_sanitizer().policy().hardens_external_links());
        assert!(!engine.ingest_sanitizer().policy().hardens_external_links());

        let frame = engine
            .admit(r#"<a href="https://example.com">x</a>"#)
            .unwrap();

        assert!(frame
            .document()
            .contains(r#"<a href="https://example.com" rel="noopener noreferrer">x</a>"#));
        assert!(frame.to_iframe().contains("sandbox=\"allow-scripts allow-forms\""));
    }

    #[test]
    fn test_round_trip_through_both_boundaries() {
        let engine = Engine::new();
        let stored = engine
            .ingest(r#"<customtag><p style="color: red; zoom: 2">hi</p></customtag>"#)
            .unwrap();
        assert_eq!(stored, r#"<p style="color: red">hi</p>"#);

        let frame = engine.admit(&stored).unwrap();
        assert!(frame.document().contains(&stored));
    }
}
