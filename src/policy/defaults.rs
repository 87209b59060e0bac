// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Built-in allow-lists shared by every boundary

/// Elements kept by the structural pass
#[rustfmt::skip]
pub const ALLOWED_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6",
    "p", "div", "span", "br", "hr",
    "ul", "ol", "li", "dl", "dt", "dd",
    "table", "thead", "tbody", "tr", "th", "td",
    "form", "input", "textarea", "button", "select", "option",
    "label", "fieldset", "legend",
    "a", "img", "video", "audio",
    "strong", "em", "b", "i", "u", "s", "code", "pre",
    "blockquote", "q", "cite",
    "canvas", "svg", "g", "path", "circle", "rect", "line",
    "header", "footer", "nav", "section", "article", "aside",
    "main", "figure", "figcaption", "dialog",
];

/// Attributes matched by exact name
#[rustfmt::skip]
pub const ALLOWED_ATTRS: &[&str] = &[
    "href", "src", "alt", "title", "width", "height",
    "class", "id", "style",
    "type", "value", "placeholder", "required", "disabled", "readonly",
    "name", "for", "selected", "checked", "max", "min", "step",
    "rows", "cols", "autocomplete",
    "role",
    "onclick", "onchange", "oninput", "onsubmit", "onreset", "onkeydown",
    "target", "rel",
];

/// Attribute families matched by prefix, checked in order after the exact set
pub const ALLOWED_ATTR_PREFIXES: &[&str] = &["data-", "aria-"];

/// Handlers dropped no matter what the allow-list says
pub const DENIED_ATTRS: &[&str] = &["onerror", "onload", "onmouseover"];

/// CSS properties kept by the declaration filter
#[rustfmt::skip]
pub const ALLOWED_CSS: &[&str] = &[
    "display", "position", "top", "right", "bottom", "left",
    "margin", "padding", "width", "height", "max-width", "max-height",
    "color", "background", "background-color", "border", "border-radius",
    "font", "font-size", "font-family", "font-weight", "font-style",
    "text-align", "text-decoration", "text-transform", "line-height",
    "opacity", "visibility", "z-index",
    "flex", "flex-direction", "justify-content", "align-items",
    "grid", "grid-template-columns", "grid-template-rows",
    "box-shadow", "transition", "transform",
];

/// Elements refused even when named as custom tags
pub const DENIED_TAGS: &[&str] = &["script", "object", "embed", "applet", "frame", "frameset"];

/// Disallowed elements removed together with their content
#[rustfmt::skip]
pub const DROP_CONTENT_TAGS: &[&str] = &[
    "script", "style", "title", "template", "noscript", "noembed", "noframes",
    "xmp", "plaintext", "object", "embed", "applet", "frame", "frameset", "iframe",
];

/// URL schemes accepted for absolute URLs
pub const SAFE_SCHEMES: &[&str] = &["http", "https", "ftp", "mailto", "tel", "sms"];

/// Prefixes rejected for URLs that do not parse as absolute
pub const DENIED_URL_PREFIXES: &[&str] = &[
    "javascript:",
    "vbscript:",
    "data:text/javascript",
    "data:text/html",
];

/// Substrings that disqualify a CSS value
pub const DENIED_CSS_VALUES: &[&str] = &["javascript:", "expression(", "url(javascript:"];

/// Default input size cap in bytes
pub const DEFAULT_MAX_INPUT_LEN: usize = 1024 * 1024;

/// Default element nesting cap
pub const DEFAULT_MAX_DEPTH: usize = 256;
