// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! URL classification for `href` and `src` values
//!
//! Absolute URLs are checked against a scheme allow-list. Anything the
//! parser cannot read as absolute (paths, fragments, queries) has no scheme
//! grammar to check, so it is only rejected on a literal prefix deny-list.

use url::Url;

use crate::policy::defaults::{DENIED_URL_PREFIXES, SAFE_SCHEMES};

/// Check whether a URL-valued attribute may be kept
pub fn is_safe_url(url: &str) -> bool {
    if url.trim().is_empty() {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => SAFE_SCHEMES.contains(&parsed.scheme()),
        Err(_) => {
            let normalized = normalize(url);
            !DENIED_URL_PREFIXES
                .iter()
                .any(|prefix| normalized.starts_with(prefix))
        }
    }
}

/// Like [`is_safe_url`], but also accepts inline `data:image/*` sources
pub fn is_safe_src(url: &str) -> bool {
    is_inline_image(url) || is_safe_url(url)
}

/// Check for a `data:image/*` URL
pub fn is_inline_image(url: &str) -> bool {
    normalize(url).starts_with("data:image/")
}

/// Check for an absolute `http`/`https` URL
pub fn is_external_http(url: &str) -> bool {
    Url::parse(url)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Strip what browsers ignore before reading a scheme, then lower-case
fn normalize(url: &str) -> String {
    url.trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect::<String>()
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_unsafe() {
        assert!(!is_safe_url(""));
        assert!(!is_safe_url("   "));
        assert!(!is_safe_src(""));
    }

    #[test]
    fn test_allowed_schemes() {
        assert!(is_safe_url("https://example.com/a?b=c"));
        assert!(is_safe_url("http://example.com"));
        assert!(is_safe_url("ftp://files.example.com/x"));
        assert!(is_safe_url("mailto:someone@example.com"));
        assert!(is_safe_url("tel:+358401234567"));
        assert!(is_safe_url("sms:+358401234567"));
    }

    #[test]
    fn test_rejected_schemes() {
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url("JavaScript:alert(1)"));
        assert!(!is_safe_url(" \tjava\nscript:alert(1)"));
        assert!(!is_safe_url("vbscript:msgbox(1)"));
        assert!(!is_safe_url("file:///etc/passwd"));
        assert!(!is_safe_url("data:text/html,<script>alert(1)</script>"));
        assert!(!is_safe_url("data:image/png;base64,iVBORw0KGgo="));
    }

    #[test]
    fn test_relative_urls() {
        assert!(is_safe_url("/dashboard"));
        assert!(is_safe_url("../img/logo.png"));
        assert!(is_safe_url("#section-2"));
        assert!(is_safe_url("?page=2"));
        assert!(is_safe_url("//cdn.example.com/x.png"));
    }

    #[test]
    fn test_inline_images_only_for_src() {
        let png = "data:image/png;base64,iVBORw0KGgo=";
        assert!(is_safe_src(png));
        assert!(is_safe_src("https://example.com/logo.png"));
        assert!(!is_safe_src("data:text/javascript,alert(1)"));
        assert!(!is_safe_src("javascript:alert(1)"));
    }

    #[test]
    fn test_external_http() {
        assert!(is_external_http("https://example.com"));
        assert!(!is_external_http("/local"));
        assert!(!is_external_http("mailto:a@b.c"));
    }
}
