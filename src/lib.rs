// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # Markguard - Sanitizer for Untrusted Generated Markup
//!
//! Filters model-generated HTML down to an allow-listed subset and checks
//! the result with an independent validator before it is stored or shown.
//!
//! ## Features
//!
//! - Three-stage sanitizer: pattern pre-filter, tree walk, pattern post-filter
//! - Allow-listed elements, attributes (with `data-*`/`aria-*`) and CSS properties
//! - URL classification for `href`/`src` with inline image support
//! - Pattern-based validator with structured violation reports
//! - Fail-closed: internal errors yield inert fallback markup
//! - Sandboxed render frame with CSP and async resize/status tracking
//!
//! ## Example
//!
//! ```rust
//! use markguard::{validate, AllowPolicy, Sanitizer};
//!
//! let sanitizer = Sanitizer::new(AllowPolicy::default());
//! let clean = sanitizer.sanitize(r#"<div onclick="alert(1)">x</div>"#);
//!
//! assert_eq!(clean, "<div>x</div>");
//! assert!(validate(&clean).is_valid());
//! ```

pub mod dom;
pub mod engine;
pub mod error;
pub mod policy;
pub mod render;
pub mod sanitizer;
pub mod security;
pub mod validator;

// Re-exports for convenience

// Boundaries
pub use engine::Engine;

// Policy
pub use policy::AllowPolicy;

// Sanitizer
pub use sanitizer::{sanitize, sanitize_default, Sanitizer, StructuralSanitizer, FALLBACK_HTML};

// Validator
pub use validator::{validate, ValidationReport, Validator, Violation};

// Security primitives
pub use security::{filter_css, filter_css_with, is_safe_src, is_safe_url, CssDeclaration};

// DOM
pub use dom::{parse_fragment, Attribute, Element, MarkupNode};

// Render
pub use render::{
    FrameChannel, FrameEvent, FrameMessage, RenderConfig, RenderFrame, RenderOutcome,
    RenderSession, RenderStatus, SandboxFlags,
};

// Errors
pub use error::{Error, ErrorContext, Result};

/// Markguard version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
