// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Security primitives
//!
//! - URL classification
//! - Inline CSS filtering
//! - Shared script vector patterns

pub mod css;
pub mod patterns;
pub mod url;

pub use css::{filter_css, filter_css_with, CssDeclaration};
pub use url::{is_external_http, is_inline_image, is_safe_src, is_safe_url};
