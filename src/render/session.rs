// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Host-side render session
//!
//! The frame loads and resizes on its own timeline. A [`RenderSession`]
//! folds the events it reports into a shared [`RenderStatus`] and a height
//! signal for the host layout. Nothing on the sanitizing side waits for it.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use super::{FrameMessage, RenderConfig};
use crate::error::{Error, Result};

/// Event observed by the host for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameEvent {
    /// Message posted by the frame's bridge script
    Message(FrameMessage),
    /// The frame could not be created or loaded
    Failed(String),
}

/// Render state shared with the host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderStatus {
    pub is_rendering: bool,
    pub is_rendered: bool,
    pub has_errors: bool,
    pub error_messages: Vec<String>,
}

/// Final result of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    pub success: bool,
    pub errors: Vec<String>,
}

/// Sending half handed to whatever relays frame events
#[derive(Debug, Clone)]
pub struct FrameChannel {
    tx: mpsc::Sender<FrameEvent>,
}

impl FrameChannel {
    /// Forward an event to the session
    pub async fn send(&self, event: FrameEvent) -> Result<()> {
        self.tx
            .send(event)
            .await
            .map_err(|_| Error::render("render session closed"))
    }

    /// Parse and forward a raw `postMessage` payload
    pub async fn post_message(&self, json: &str) -> Result<()> {
        let message = FrameMessage::parse(json)?;
        self.send(FrameEvent::Message(message)).await
    }
}

/// Tracks one sandboxed frame
pub struct RenderSession {
    config: RenderConfig,
    events: mpsc::Receiver<FrameEvent>,
    status: Arc<RwLock<RenderStatus>>,
    height_tx: watch::Sender<u32>,
}

impl RenderSession {
    /// Create a session and the channel that feeds it
    pub fn new(config: RenderConfig) -> (Self, FrameChannel) {
        let (tx, events) = mpsc::channel(config.channel_capacity.max(1));
        let (height_tx, _) = watch::channel(config.min_height);
        let status = RenderStatus {
            is_rendering: true,
            ..Default::default()
        };

        let session = Self {
            config,
            events,
            status: Arc::new(RwLock::new(status)),
            height_tx,
        };
        (session, FrameChannel { tx })
    }

    /// Shared status handle
    pub fn status(&self) -> Arc<RwLock<RenderStatus>> {
        Arc::clone(&self.status)
    }

    /// Subscribe to host height updates
    pub fn height(&self) -> watch::Receiver<u32> {
        self.height_tx.subscribe()
    }

    /// Consume events until every [`FrameChannel`] is dropped
    pub async fn run(mut self) -> RenderOutcome {
        while let Some(event) = self.events.recv().await {
            self.apply(event);
        }

        let mut status = self.status.write();
        status.is_rendering = false;
        let outcome = RenderOutcome {
            success: status.is_rendered && !status.has_errors,
            errors: status.error_messages.clone(),
        };
        debug!(success = outcome.success, errors = outcome.errors.len(), "Render session finished");
        outcome
    }

    fn apply(&self, event: FrameEvent) {
        match event {
            FrameEvent::Message(FrameMessage::Loaded) => {
                let mut status = self.status.write();
                status.is_rendering = false;
                status.is_rendered = true;
            }
            FrameEvent::Message(FrameMessage::Resize { height }) => {
                let host = self.config.host_height(height);
                self.height_tx.send_if_modified(|current| {
                    if *current == host {
                        return false;
                    }
                    *current = host;
                    true
                });
            }
            FrameEvent::Message(FrameMessage::Error { message }) => {
                warn!(error = %message, "Error inside render frame");
                self.record_error(message);
            }
            FrameEvent::Failed(message) => {
                warn!(error = %message, "Render frame failed");
                let mut status = self.status.write();
                status.is_rendering = false;
                status.is_rendered = false;
                drop(status);
                self.record_error(message);
            }
        }
    }

    fn record_error(&self, message: String) {
        let mut status = self.status.write();
        status.has_errors = true;
        status.error_messages.push(message);
    }
}
