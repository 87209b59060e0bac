// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Render boundary configuration

use super::SandboxFlags;

/// Render configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Capabilities granted inside the frame
    pub sandbox: SandboxFlags,
    /// Accessible frame title
    pub title: String,
    /// Smallest host height in pixels
    pub min_height: u32,
    /// Extra pixels added to every reported content height
    pub resize_padding: u32,
    /// Inject the base style reset into the frame document
    pub style_reset: bool,
    /// Buffered frame events per session
    pub channel_capacity: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sandbox: SandboxFlags::default(),
            title: "UI Preview".to_string(),
            min_height: 300,
            resize_padding: 20,
            style_reset: true,
            channel_capacity: 64,
        }
    }
}

impl RenderConfig {
    /// Create a new render config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set sandbox flags
    pub fn sandbox(mut self, sandbox: SandboxFlags) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Set frame title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set minimum height
    pub fn min_height(mut self, height: u32) -> Self {
        self.min_height = height;
        self
    }

    /// Set resize padding
    pub fn resize_padding(mut self, padding: u32) -> Self {
        self.resize_padding = padding;
        self
    }

    /// Enable/disable the style reset
    pub fn style_reset(mut self, enabled: bool) -> Self {
        self.style_reset = enabled;
        self
    }

    /// Set event channel capacity
    pub fn channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }

    /// Config for static display: no scripts, no forms
    pub fn locked() -> Self {
        Self {
            sandbox: SandboxFlags::locked(),
            ..Default::default()
        }
    }

    /// Host height for a reported content height
    pub fn host_height(&self, content_height: u32) -> u32 {
        content_height
            .saturating_add(self.resize_padding)
            .max(self.min_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_height() {
        let config = RenderConfig::default();
        assert_eq!(config.host_height(0), 300);
        assert_eq!(config.host_height(280), 300);
        assert_eq!(config.host_height(500), 520);
        assert_eq!(config.host_height(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_builder() {
        let config = RenderConfig::new()
            .title("Preview")
            .min_height(100)
            .resize_padding(0)
            .channel_capacity(0);

        assert_eq!(config.title, "Preview");
        assert_eq!(config.host_height(150), 150);
        assert_eq!(config.channel_capacity, 1);
        assert!(!RenderConfig::locked().sandbox.scripts);
    }
}
