// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Sandboxed frame document

use serde::{Deserialize, Serialize};

use super::{RenderConfig, SandboxFlags};
use crate::dom::escape_attr;
use crate::error::Result;

/// Content-Security-Policy applied inside the frame
pub const CONTENT_SECURITY_POLICY: &str = "default-src 'none'; \
     script-src 'unsafe-inline'; style-src 'unsafe-inline'; \
     img-src http: https: data:; media-src http: https: data:; \
     connect-src 'none'; form-action 'none'; base-uri 'none'";

const STYLE_RESET: &str = "*{box-sizing:border-box;margin:0;padding:0}\
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,\
'Helvetica Neue',Arial,sans-serif;\
padding:1rem;background-color:white}";

/// Posts frame events to the host. Runs before any content.
const BRIDGE_SCRIPT: &str = r#"(function(){
var post=function(m){try{parent.postMessage(m,"*")}catch(e){}};
var height=function(){var b=document.body,h=document.documentElement;
return Math.ceil(Math.max(b?b.scrollHeight:0,b?b.offsetHeight:0,h.clientHeight,h.scrollHeight,h.offsetHeight))};
window.addEventListener("error",function(e){post({type:"error",message:String(e.message||"error")})});
window.addEventListener("load",function(){post({type:"loaded"});post({type:"resize",height:height()})});
if(window.ResizeObserver){new ResizeObserver(function(){post({type:"resize",height:height()})}).observe(document.documentElement)}
})();"#;

/// Message posted by the bridge script to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FrameMessage {
    /// Frame finished loading
    Loaded,
    /// Content height changed
    Resize { height: u32 },
    /// Uncaught error inside the frame
    Error { message: String },
}

impl FrameMessage {
    /// Parse a message posted by the frame
    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A complete `srcdoc` document around sanitized markup
#[derive(Debug, Clone)]
pub struct RenderFrame {
    document: String,
    sandbox: SandboxFlags,
    title: String,
}

impl RenderFrame {
    /// Wrap sanitized markup. The markup is inserted verbatim.
    pub fn build(sanitized: &str, config: &RenderConfig) -> Self {
        let mut document = String::with_capacity(sanitized.len() + 1024);
        document.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
        document.push_str("<meta http-equiv=\"Content-Security-Policy\" content=\"");
        document.push_str(CONTENT_SECURITY_POLICY);
        document.push_str("\">");
        if config.style_reset {
            document.push_str("<style>");
            document.push_str(STYLE_RESET);
            document.push_str("</style>");
        }
        if config.sandbox.scripts {
            document.push_str("<script>");
            document.push_str(BRIDGE_SCRIPT);
            document.push_str("</script>");
        }
        document.push_str("</head><body>");
        document.push_str(sanitized);
        document.push_str("</body></html>");

        Self {
            document,
            sandbox: config.sandbox,
            title: config.title.clone(),
        }
    }

    /// Get the frame document
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Get the sandbox flags
    pub fn sandbox(&self) -> SandboxFlags {
        self.sandbox
    }

    /// Get the frame title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Host markup embedding the document
    pub fn to_iframe(&self) -> String {
        format!(
            concat!(
                "<iframe sandbox=\"{}\" referrerpolicy=\"no-referrer\" ",
                "title=\"{}\" srcdoc=\"{}\"></iframe>"
            ),
            self.sandbox.attribute_value(),
            escape_attr(&self.title),
            escape_attr(&self.document)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_shape() {
        let frame = RenderFrame::build("<p>hi</p>", &RenderConfig::default());
        let doc = frame.document();

        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("default-src 'none'"));
        assert!(doc.contains("connect-src 'none'"));
        assert!(doc.contains("<style>"));
        assert!(doc.contains("postMessage"));
        assert!(doc.contains("<body><p>hi</p></body>"));
    }

    #[test]
    fn test_locked_frame_has_no_bridge() {
        let frame = RenderFrame::build("<p>hi</p>", &RenderConfig::locked().style_reset(false));
        assert!(!frame.document().contains("<script>"));
        assert!(!frame.document().contains("<style>"));
        assert_eq!(frame.sandbox(), SandboxFlags::locked());
    }

    #[test]
    fn test_iframe_markup() {
        let frame = RenderFrame::build(r#"<p title="a">x</p>"#, &RenderConfig::default());
        let iframe = frame.to_iframe();

        assert!(iframe.starts_with(concat!(
            r#"<iframe sandbox="allow-scripts allow-forms" referrerpolicy="no-referrer" "#,
            r#"title="UI Preview" srcdoc=""#
        )));
        assert!(iframe.contains("&lt;p title=&quot;a&quot;&gt;x&lt;/p&gt;"));
        assert!(!iframe.contains("allow-same-origin"));
        assert!(iframe.ends_with("\"></iframe>"));
    }

    #[test]
    fn test_parse_messages() {
        assert_eq!(FrameMessage::parse(r#"{"type":"loaded"}"#).unwrap(), FrameMessage::Loaded);
        assert_eq!(
            FrameMessage::parse(r#"{"type":"resize","height":412}"#).unwrap(),
            FrameMessage::Resize { height: 412 }
        );
        assert_eq!(
            FrameMessage::parse(r#"{"type":"error","message":"x is not defined"}"#).unwrap(),
            FrameMessage::Error { message: "x is not defined".to_string() }
        );
        assert!(FrameMessage::parse(r#"{"type":"navigate","to":"/"}"#).is_err());
    }
}
