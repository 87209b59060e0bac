// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Markup tree for sanitization
//!
//! Provides an owned element/text tree built on top of html5ever.

mod node;
mod parser;

pub use node::{escape_attr, escape_text, serialize, unescape_attr, Attribute, Element, MarkupNode};
pub use parser::{parse_fragment, parse_fragment_with_depth};
