//! Toast notifications.
//!
//! The holiday screen never talks to a UI directly; it hands [`Toast`]s to
//! whatever [`Notifier`] it was built with.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Error,
    /// Neutral information.
    Info,
    /// Something needs attention.
    Warning,
}

/// A user-facing notification: `{type, title, message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Severity.
    #[serde(rename = "type")]
    pub kind: ToastKind,
    /// Short heading.
    pub title: String,
    /// Body text.
    pub message: String,
}

impl Toast {
    /// Creates a success toast.
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Receives toasts.
pub trait Notifier: Send + Sync {
    /// Shows or forwards a toast.
    fn notify(&self, toast: Toast);
}

/// Writes toasts to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        info!(kind = ?toast.kind, title = %toast.title, message = %toast.message, "Toast");
    }
}

/// Forwards toasts into a channel.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<Toast>,
}

impl ChannelNotifier {
    /// Opens a channel, returning the notifier and its receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Toast>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, toast: Toast) {
        if self.sender.send(toast).is_err() {
            warn!("Toast dropped, receiver closed");
        }
    }
}
