// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for markguard
//!
//! Errors carry enough context for logs and diagnostics. None of that
//! context is meant for end users: [`Error::user_message`] gives the
//! generic text a caller should display instead.

use thiserror::Error;

use crate::validator::Violation;

/// Result type alias for markguard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for markguard
#[derive(Error, Debug)]
pub enum Error {
    /// HTML parsing failed
    #[error("HTML parsing error: {0}")]
    HtmlParse(String),

    /// Input is larger than the policy allows
    #[error("Input of {len} bytes exceeds limit of {limit} bytes")]
    InputTooLarge { len: usize, limit: usize },

    /// Element nesting is deeper than the policy allows
    #[error("Element nesting depth {depth} exceeds limit of {limit}")]
    NestingTooDeep { depth: usize, limit: usize },

    /// Pattern stripping did not reach a fixpoint
    #[error("Pattern stripping did not converge after {passes} passes")]
    Unstable { passes: usize },

    /// Markup failed independent validation
    #[error("Markup failed validation: {}", format_violations(.violations))]
    ValidationFailed { violations: Vec<Violation> },

    /// Policy configuration is invalid
    #[error("Policy error: {0}")]
    Policy(String),

    /// Render contract error
    #[error("Render error: {0}")]
    Render(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl Error {
    /// Create a new HTML parse error
    pub fn html_parse<S: Into<String>>(msg: S) -> Self {
        Error::HtmlParse(msg.into())
    }

    /// Create an input size error
    pub fn input_too_large(len: usize, limit: usize) -> Self {
        Error::InputTooLarge { len, limit }
    }

    /// Create a nesting depth error
    pub fn nesting_too_deep(depth: usize, limit: usize) -> Self {
        Error::NestingTooDeep { depth, limit }
    }

    /// Create a validation failure
    pub fn validation_failed(violations: Vec<Violation>) -> Self {
        Error::ValidationFailed { violations }
    }

    /// Create a new policy error
    pub fn policy<S: Into<String>>(msg: S) -> Self {
        Error::Policy(msg.into())
    }

    /// Create a new render error
    pub fn render<S: Into<String>>(msg: S) -> Self {
        Error::Render(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Check if the input itself was rejected before sanitizing
    pub fn is_limit(&self) -> bool {
        matches!(
            self,
            Error::InputTooLarge { .. } | Error::NestingTooDeep { .. }
        )
    }

    /// Check if this is a validation failure
    pub fn is_validation_failure(&self) -> bool {
        matches!(self, Error::ValidationFailed { .. })
    }

    /// Check if this is malformed input the sanitizer degrades on
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Error::HtmlParse(_)
                | Error::InputTooLarge { .. }
                | Error::NestingTooDeep { .. }
                | Error::Unstable { .. }
        )
    }

    /// Violations carried by a validation failure
    pub fn violations(&self) -> &[Violation] {
        match self {
            Error::ValidationFailed { violations } => violations,
            _ => &[],
        }
    }

    /// Generic message safe to show an end user.
    ///
    /// Never includes violation detail, so a rejected author learns nothing
    /// about which filter tripped.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::ValidationFailed { .. } => {
                "The generated content was blocked for security reasons. Please try again."
            }
            Error::InputTooLarge { .. } | Error::NestingTooDeep { .. } => {
                "The generated content is too large to display."
            }
            _ => "The content could not be displayed. Please try again.",
        }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

/// Helper trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add operation context to error
    fn context(self, msg: &str) -> Result<T>;
}

impl<T, E: Into<Error>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            match err {
                Error::Policy(inner) => Error::Policy(format!("{}: {}", msg, inner)),
                other => Error::Other(format!("{}: {}", msg, other)),
            }
        })
    }
}
