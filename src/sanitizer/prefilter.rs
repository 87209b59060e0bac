// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Stage 1: pattern pass over the raw text
//!
//! Crude on purpose. It shrinks what the parser ever sees; it is not the
//! only line of defense.

use regex::Regex;

use crate::error::Result;
use crate::policy::AllowPolicy;
use crate::security::patterns::{
    strip_until_stable, EMBED_BLOCK, EVENT_HANDLER, IFRAME_BLOCK, JAVASCRIPT_PROTOCOL,
    OBJECT_BLOCK, SCRIPT_BLOCK, SCRIPT_DATA_URL, VBSCRIPT_PROTOCOL,
};

/// Strip script blocks, embedded content, handlers and pseudo-protocols
pub fn prefilter(html: &str, policy: &AllowPolicy) -> Result<String> {
    let mut patterns: Vec<&Regex> = vec![&*SCRIPT_BLOCK, &*OBJECT_BLOCK, &*EMBED_BLOCK];
    if !policy.iframes_allowed() {
        patterns.push(&*IFRAME_BLOCK);
    }
    patterns.extend([
        &*EVENT_HANDLER,
        &*JAVASCRIPT_PROTOCOL,
        &*VBSCRIPT_PROTOCOL,
        &*SCRIPT_DATA_URL,
    ]);
    strip_until_stable(html, &patterns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> String {
        prefilter(html, &AllowPolicy::default()).unwrap()
    }

    #[test]
    fn test_removes_script_blocks() {
        assert_eq!(run("<p>a</p><script>alert(1)</script><p>b</p>"), "<p>a</p><p>b</p>");
        assert_eq!(run("<scr<script>x</script>ipt>alert(1)</script>"), "");
    }

    #[test]
    fn test_removes_embedded_blocks() {
        assert_eq!(run(r#"<object data="x"><param></object>ok"#), "ok");
        assert_eq!(run(r#"<iframe src="https://x.example"></iframe>ok"#), "ok");
    }

    #[test]
    fn test_iframes_kept_when_allowed() {
        let policy = AllowPolicy::default().allow_iframes(true);
        let html = r#"<iframe src="https://x.example"></iframe>"#;
        assert_eq!(prefilter(html, &policy).unwrap(), html);
    }

    #[test]
    fn test_strips_event_handlers() {
        assert_eq!(run(r#"<div onclick="alert(1)">x</div>"#), "<div >x</div>");
        assert_eq!(run("<img src=x ONERROR=alert(1)>"), "<img src=x >");
    }

    #[test]
    fn test_strips_pseudo_protocols() {
        assert_eq!(run(r#"<a href="javascript:alert(1)">x</a>"#), r#"<a href="">x</a>"#);
        assert_eq!(run(r#"<a href="VBScript:msgbox(1)">x</a>"#), r#"<a href="">x</a>"#);
        assert_eq!(
            run(r#"<a href="data:text/html;base64,PHNjcmlwdD4=">x</a>"#),
            r#"<a href="">x</a>"#
        );
    }

    #[test]
    fn test_leaves_benign_markup() {
        let html = r#"<div class="card" data-config="a"><a href="https://example.com">x</a></div>"#;
        assert_eq!(run(html), html);
    }
}
