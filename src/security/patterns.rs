// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Case-insensitive script vector patterns
//!
//! Shared by the pre-filter, the post-filter and the validator. Every
//! pattern is case-folded so `JavaScript:` is treated like `javascript:`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};

/// Upper bound on strip passes before giving up
pub const MAX_STRIP_PASSES: usize = 16;

lazy_static! {
    /// `<script>` open tag through its close tag
    pub static ref SCRIPT_BLOCK: Regex =
        Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").unwrap();

    /// `<object>` open tag through its close tag
    pub static ref OBJECT_BLOCK: Regex =
        Regex::new(r"(?is)<object\b[^>]*>.*?</object\s*>").unwrap();

    /// `<embed>` open tag through its close tag
    pub static ref EMBED_BLOCK: Regex =
        Regex::new(r"(?is)<embed\b[^>]*>.*?</embed\s*>").unwrap();

    /// `<iframe>` open tag through its close tag
    pub static ref IFRAME_BLOCK: Regex =
        Regex::new(r"(?is)<iframe\b[^>]*>.*?</iframe\s*>").unwrap();

    /// `on<word>=value`, value quoted or bare; a bare value stops at quotes and tags
    pub static ref EVENT_HANDLER: Regex =
        Regex::new(r#"(?i)\bon\w+\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'<>]*)"#).unwrap();

    /// `javascript:` and whatever follows it up to a delimiter
    pub static ref JAVASCRIPT_PROTOCOL: Regex =
        Regex::new(r#"(?i)javascript:\s*[^\s"'<>]*"#).unwrap();

    /// `vbscript:` and whatever follows it up to a delimiter
    pub static ref VBSCRIPT_PROTOCOL: Regex =
        Regex::new(r#"(?i)vbscript:\s*[^\s"'<>]*"#).unwrap();

    /// Script or document data URLs
    pub static ref SCRIPT_DATA_URL: Regex =
        Regex::new(r#"(?i)data:text/(?:javascript|html)[^\s"'<>]*"#).unwrap();

    /// CSS constructs that execute script
    pub static ref CSS_EXECUTION: Regex = Regex::new(concat!(
        r"(?i)expression\s*\(",
        r"|behavior\s*:\s*url\s*\(",
        r"|moz-binding\s*:\s*url\s*\(",
    ))
    .unwrap();
}

/// Delete every match of every pattern until the text stops changing.
///
/// Deleting one match can splice its neighbours into a new one
/// (`expexpression(ression(`), so a single pass is not enough.
pub fn strip_until_stable(input: &str, patterns: &[&Regex]) -> Result<String> {
    let mut current = input.to_string();
    for _ in 0..MAX_STRIP_PASSES {
        let mut next = current.clone();
        for pattern in patterns {
            if pattern.is_match(&next) {
                next = pattern.replace_all(&next, "").into_owned();
            }
        }
        if next == current {
            return Ok(current);
        }
        current = next;
    }
    Err(Error::Unstable {
        passes: MAX_STRIP_PASSES,
    })
}
