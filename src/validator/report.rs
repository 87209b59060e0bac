// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Validation report types

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// A category of residual risk found in markup.
///
/// Serialized as its description string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// A literal `<script>` element
    ScriptBlock,
    /// An `on<word>=` occurrence
    EventHandler,
    /// A `javascript:` occurrence
    JavascriptProtocol,
    /// `expression(`, `behavior:url(` or `moz-binding:url(`
    CssExecution,
    /// An `<object>`, `<embed>` or `<iframe>` element
    EmbeddedContent,
}

impl Violation {
    /// All categories, in report order
    pub const ALL: [Violation; 5] = [
        Violation::ScriptBlock,
        Violation::EventHandler,
        Violation::JavascriptProtocol,
        Violation::CssExecution,
        Violation::EmbeddedContent,
    ];

    /// Diagnostic description, for logs only
    pub fn description(&self) -> &'static str {
        match self {
            Violation::ScriptBlock => "script block detected",
            Violation::EventHandler => "event handler attribute detected",
            Violation::JavascriptProtocol => "javascript: pseudo-protocol detected",
            Violation::CssExecution => "CSS script execution vector detected",
            Violation::EmbeddedContent => "object/embed/iframe element detected",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl Serialize for Violation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.description())
    }
}

impl<'de> Deserialize<'de> for Violation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let description = String::deserialize(deserializer)?;
        Violation::ALL
            .into_iter()
            .find(|v| v.description() == description)
            .ok_or_else(|| de::Error::custom(format!("unknown violation: {}", description)))
    }
}

/// Outcome of validating one markup string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// True iff no violations were found
    is_valid: bool,
    /// One entry per violated category, in check order
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// Build a report from the violations found
    pub fn new(violations: Vec<Violation>) -> Self {
        Self {
            is_valid: violations.is_empty(),
            violations,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Violation descriptions, in order
    pub fn descriptions(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.to_string()).collect()
    }

    /// Turn a failing report into [`Error::ValidationFailed`]
    pub fn into_result(self) -> Result<()> {
        if self.is_valid {
            Ok(())
        } else {
            Err(Error::validation_failed(self.violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_valid() {
        let report = ValidationReport::new(vec![]);
        assert!(report.is_valid());
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn test_failing_report() {
        let report = ValidationReport::new(vec![Violation::ScriptBlock, Violation::CssExecution]);
        assert!(!report.is_valid());
        assert_eq!(
            report.descriptions(),
            vec!["script block detected", "CSS script execution vector detected"]
        );

        let err = report.into_result().unwrap_err();
        assert_eq!(err.violations(), &[Violation::ScriptBlock, Violation::CssExecution]);
    }

    #[test]
    fn test_report_json_shape() {
        let report = ValidationReport::new(vec![Violation::EventHandler]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "isValid": false,
                "violations": ["event handler attribute detected"]
            })
        );

        let back: ValidationReport = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
        assert!(serde_json::from_str::<Violation>(r#""event_handler""#).is_err());
    }
}
