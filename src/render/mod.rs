// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Sandboxed render boundary
//!
//! Second containment layer for sanitized markup:
//! - Frame document with a restrictive Content-Security-Policy
//! - `sandbox` flags that can never grant same-origin or top navigation
//! - Async session tracking load, errors and content height

mod config;
mod frame;
mod sandbox;
mod session;

pub use config::RenderConfig;
pub use frame::{FrameMessage, RenderFrame, CONTENT_SECURITY_POLICY};
pub use sandbox::SandboxFlags;
pub use session::{FrameChannel, FrameEvent, RenderOutcome, RenderSession, RenderStatus};
