// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Post-hoc markup validator
//!
//! A read-only, pattern-based scan. It does not parse the markup and does
//! not assume the sanitizer ran, so it stays an independent second opinion
//! rather than a replay of the tree walk.

mod report;

pub use report::{ValidationReport, Violation};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::security::patterns::{CSS_EXECUTION, JAVASCRIPT_PROTOCOL};

lazy_static! {
    static ref SCRIPT_TAG: Regex = Regex::new(r"(?i)<script\b").unwrap();
    static ref EVENT_HANDLER_ATTR: Regex = Regex::new(r"(?i)\bon\w+\s*=").unwrap();
    static ref EMBEDDED_TAG: Regex = Regex::new(r"(?i)<(?:object|embed|iframe)\b").unwrap();
}

/// Markup validator
pub struct Validator {
    /// Checks in report order
    checks: Vec<(Violation, &'static Regex)>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Create new validator
    pub fn new() -> Self {
        let checks = Violation::ALL
            .into_iter()
            .map(|violation| (violation, pattern(violation)))
            .collect();
        Self { checks }
    }

    /// Scan markup and report every violated category once
    pub fn validate(&self, html: &str) -> ValidationReport {
        let violations: Vec<Violation> = self
            .checks
            .iter()
            .filter(|(_, pattern)| pattern.is_match(html))
            .map(|(violation, _)| *violation)
            .collect();

        if !violations.is_empty() {
            debug!(count = violations.len(), len = html.len(), "Markup failed validation");
        }
        ValidationReport::new(violations)
    }
}

fn pattern(violation: Violation) -> &'static Regex {
    match violation {
        Violation::ScriptBlock => &*SCRIPT_TAG,
        Violation::EventHandler => &*EVENT_HANDLER_ATTR,
        Violation::JavascriptProtocol => &*JAVASCRIPT_PROTOCOL,
        Violation::CssExecution => &*CSS_EXECUTION,
        Violation::EmbeddedContent => &*EMBEDDED_TAG,
    }
}

/// Validate markup with a default validator
pub fn validate(html: &str) -> ValidationReport {
    Validator::new().validate(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_markup() {
        let report = validate(r#"<div class="card"><a href="https://example.com">ok</a></div>"#);
        assert!(report.is_valid());
        assert!(report.violations().is_empty());
    }

    #[test]
    fn test_script_block() {
        let report = validate("<p>x</p><script>alert(1)</script>");
        assert_eq!(report.violations(), &[Violation::ScriptBlock]);

        // Unclosed script still counts
        assert!(!validate("<SCRIPT src=//evil.example>").is_valid());
    }

    #[test]
    fn test_event_handler() {
        let report = validate(r#"<img src="x" onerror="alert(1)">"#);
        assert_eq!(report.violations(), &[Violation::EventHandler]);
        assert!(validate(r#"<div data-config="a">b</div>"#).is_valid());
    }

    #[test]
    fn test_javascript_protocol() {
        let report = validate(r#"<a href="JAVASCRIPT:alert(1)">x</a>"#);
        assert_eq!(report.violations(), &[Violation::JavascriptProtocol]);
    }

    #[test]
    fn test_css_vectors() {
        for html in [
            r#"<div style="width: expression(alert(1))"></div>"#,
            r#"<div style="behavior:url(x.htc)"></div>"#,
            r#"<div style="-moz-binding: url(x.xml#y)"></div>"#,
        ] {
            assert_eq!(validate(html).violations(), &[Violation::CssExecution], "{}", html);
        }
    }

    #[test]
    fn test_embedded_content() {
        for html in [
            r#"<object data="x.swf"></object>"#,
            r#"<embed src="x.swf">"#,
            r#"<iframe src="https://example.com"></iframe>"#,
        ] {
            assert_eq!(validate(html).violations(), &[Violation::EmbeddedContent], "{}", html);
        }
    }

    #[test]
    fn test_reports_each_category_once_in_order() {
        let html = concat!(
            r#"<iframe></iframe><script>a</script><script>b</script>"#,
            r#"<a href="javascript:x" onclick="y" onmouseover="z">q</a>"#,
        );
        let report = validate(html);
        assert_eq!(
            report.violations(),
            &[
                Violation::ScriptBlock,
                Violation::EventHandler,
                Violation::JavascriptProtocol,
                Violation::EmbeddedContent,
            ]
        );
    }
}
