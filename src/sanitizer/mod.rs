// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Markup sanitizer
//!
//! Three stages composed in a fixed order, each only ever narrowing what
//! reaches the output:
//!
//! 1. [`prefilter`]: pattern pass over the raw text
//! 2. [`structural`]: allow-list walk over the parsed tree
//! 3. [`postfilter`]: residue sweep over the cleaned tree, then an
//!    attribute recheck on the serialized result
//!
//! [`Sanitizer::sanitize`] never fails. Any error or panic inside the
//! pipeline yields [`FALLBACK_HTML`] instead of the input.

pub mod postfilter;
pub mod prefilter;
pub mod structural;

pub use structural::StructuralSanitizer;

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::dom::serialize;
use crate::error::{Error, Result};
use crate::policy::AllowPolicy;

/// Inert markup returned when sanitizing fails
pub const FALLBACK_HTML: &str = "<p>Content could not be safely displayed.</p>";

/// Sanitizer bound to one policy
#[derive(Debug, Clone, Default)]
pub struct Sanitizer {
    policy: AllowPolicy,
}

impl Sanitizer {
    /// Create a sanitizer for a policy
    pub fn new(policy: AllowPolicy) -> Self {
        Self { policy }
    }

    /// Get the policy
    pub fn policy(&self) -> &AllowPolicy {
        &self.policy
    }

    /// Run the pipeline, surfacing the first error
    pub fn try_sanitize(&self, html: &str) -> Result<String> {
        let limit = self.policy.input_limit();
        if html.len() > limit {
            return Err(Error::input_too_large(html.len(), limit));
        }

        let stage1 = prefilter::prefilter(html, &self.policy)?;
        let mut tree = StructuralSanitizer::new(&self.policy).sanitize_tree(&stage1)?;
        postfilter::sweep_nodes(&mut tree, &self.policy)?;
        let stage3 = postfilter::postfilter(&serialize(&tree), &self.policy)?;

        debug!(input_len = html.len(), output_len = stage3.len(), "Sanitized markup");
        Ok(stage3)
    }

    /// Sanitize, degrading to [`FALLBACK_HTML`] on any failure
    pub fn sanitize(&self, html: &str) -> String {
        self.guarded(html).unwrap_or_else(|e| fallback(&e))
    }

    /// Sanitize, but report rejected input instead of degrading.
    ///
    /// Input over the size or depth limit comes back as an error so the
    /// caller can tell the author why nothing was shown. Every other
    /// failure still degrades to [`FALLBACK_HTML`].
    pub fn sanitize_bounded(&self, html: &str) -> Result<String> {
        match self.guarded(html) {
            Ok(out) => Ok(out),
            Err(e) if e.is_limit() => Err(e),
            Err(e) => Ok(fallback(&e)),
        }
    }

    fn guarded(&self, html: &str) -> Result<String> {
        panic::catch_unwind(AssertUnwindSafe(|| self.try_sanitize(html)))
            .unwrap_or_else(|_| Err(Error::other("sanitizer panicked")))
    }
}

fn fallback(error: &Error) -> String {
    warn!(error = %error, "Sanitizing failed, returning fallback markup");
    FALLBACK_HTML.to_string()
}

/// Sanitize markup under a policy
pub fn sanitize(html: &str, policy: &AllowPolicy) -> String {
    Sanitizer::new(policy.clone()).sanitize(html)
}

/// Sanitize markup under the default policy
pub fn sanitize_default(html: &str) -> String {
    Sanitizer::default().sanitize(html)
}
