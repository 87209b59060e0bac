// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Inline style declaration filter

use tracing::debug;

use super::patterns::CSS_EXECUTION;
use crate::policy::defaults::DENIED_CSS_VALUES;
use crate::policy::AllowPolicy;

/// A single `property: value` pair from a `style` attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssDeclaration {
    /// Property name, lower-cased
    pub property: String,
    /// Value as authored, trimmed
    pub value: String,
}

impl CssDeclaration {
    /// Split a declaration on its first `:`; both halves must be non-empty
    pub fn parse(piece: &str) -> Option<Self> {
        let (property, value) = piece.split_once(':')?;
        let (property, value) = (property.trim(), value.trim());
        if property.is_empty() || value.is_empty() {
            return None;
        }
        Some(Self {
            property: property.to_ascii_lowercase(),
            value: value.to_string(),
        })
    }

    /// Whether the value is free of script vectors.
    ///
    /// Checked case-folded. Escapes and comments are refused outright since
    /// either can hide a banned word from a substring check.
    pub fn has_safe_value(&self) -> bool {
        let value = self.value.to_ascii_lowercase();
        !DENIED_CSS_VALUES.iter().any(|denied| value.contains(denied))
            && !CSS_EXECUTION.is_match(&value)
            && !value.contains('\\')
            && !value.contains("/*")
    }
}

impl std::fmt::Display for CssDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.property, self.value)
    }
}

/// Filter a declaration list with the default policy
pub fn filter_css(raw: &str) -> String {
    filter_css_with(raw, &AllowPolicy::default())
}

/// Filter a declaration list down to allowed properties with safe values.
///
/// Order is preserved and duplicates are kept; the cascade decides.
pub fn filter_css_with(raw: &str, policy: &AllowPolicy) -> String {
    raw.split(';')
        .filter_map(CssDeclaration::parse)
        .filter(|decl| {
            let keep = policy.allows_css_property(&decl.property) && decl.has_safe_value();
            if !keep {
                debug!(property = %decl.property, "Dropped CSS declaration");
            }
            keep
        })
        .map(|decl| decl.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
