// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Capability flags for the render boundary
//!
//! Only capabilities that stay inside the frame can be expressed here.
//! Same-origin access, top-level navigation and popups have no flag, so a
//! frame built from these flags can never be granted them.

use serde::{Deserialize, Serialize};

/// Capabilities granted inside the sandboxed frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxFlags {
    /// Allow script execution inside the frame
    pub scripts: bool,
    /// Allow form submission inside the frame
    pub forms: bool,
}

impl Default for SandboxFlags {
    fn default() -> Self {
        Self {
            scripts: true,
            forms: true,
        }
    }
}

impl SandboxFlags {
    /// Fully locked down frame
    pub fn locked() -> Self {
        Self {
            scripts: false,
            forms: false,
        }
    }

    /// Value of the iframe `sandbox` attribute
    pub fn attribute_value(&self) -> String {
        let mut tokens = Vec::new();
        if self.scripts {
            tokens.push("allow-scripts");
        }
        if self.forms {
            tokens.push("allow-forms");
        }
        tokens.join(" ")
    }
}

impl std::fmt::Display for SandboxFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.attribute_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_value() {
        assert_eq!(SandboxFlags::default().attribute_value(), "allow-scripts allow-forms");
        assert_eq!(SandboxFlags::locked().attribute_value(), "");
        assert_eq!(
            SandboxFlags { scripts: true, forms: false }.to_string(),
            "allow-scripts"
        );
    }

    #[test]
    fn test_never_grants_escape_capabilities() {
        for scripts in [false, true] {
            for forms in [false, true] {
                let value = SandboxFlags { scripts, forms }.attribute_value();
                assert!(!value.contains("allow-same-origin"));
                assert!(!value.contains("allow-top-navigation"));
                assert!(!value.contains("allow-popups"));
            }
        }
    }
}
