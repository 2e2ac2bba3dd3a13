//! Process-wide channel for transient user-facing messages
//!
//! Any component can emit a [`Notification`] without knowing who displays
//! it. The UI subscribes once and turns notifications into toasts; display
//! lifetime and stacking are decided there.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tokio::sync::broadcast;

const DEFAULT_CHANNEL_CAPACITY: usize = 64;

static GLOBAL: OnceLock<Notifier> = OnceLock::new();

/// Notification severity. Serialized as the toast variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "default")]
    Info,
    #[serde(rename = "destructive")]
    Error,
}

/// A transient message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "variant")]
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Cloneable publish handle over a bounded broadcast channel
#[derive(Debug, Clone)]
pub struct Notifier {
    sender: broadcast::Sender<Notification>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// The process-wide notifier, created on first use
    pub fn global() -> &'static Notifier {
        GLOBAL.get_or_init(Notifier::new)
    }

    /// Publish a notification. Never fails; with no subscriber it is dropped.
    pub fn emit(&self, notification: Notification) {
        tracing::debug!(
            severity = ?notification.severity,
            title = %notification.title,
            "Emitting notification"
        );
        if let Err(e) = self.sender.send(notification) {
            tracing::debug!("Notification dropped (no subscribers): {}", e.0.title);
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }
}
