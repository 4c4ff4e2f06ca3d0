//! Notification surfaces.
//!
//! The dispatch layer reports failures to the user but owns no rendering.
//! These two seams are implemented by the embedding application (a toast
//! stack and a modal dialog, typically); tests use recording fakes.

use async_trait::async_trait;

/// Non-blocking error notification (toast).
pub trait NotificationSink: Send + Sync {
    fn error(&self, message: &str);
}

/// Blocking acknowledgement dialog.
#[async_trait]
pub trait ConfirmDialog: Send + Sync {
    /// Show `message` and suspend until the user acknowledges it.
    async fn alert(&self, message: &str);
}
