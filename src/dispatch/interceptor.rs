//! Response error policy.
//!
//! Every non-success response runs through a [`ResponseInterceptor`], which
//! decides what the user sees and whether the session survives. The contract
//! is deliberately narrow (status + buffered body in, [`ErrorOutcome`] out)
//! so the policy stays decoupled from rendering and navigation.

use std::sync::Arc;

use async_trait::async_trait;
use http::StatusCode;
use tracing::{debug, warn};
use url::Url;

use crate::auth::{
    RequestErrorBody, SessionProvider, ERROR_CODE_FORBIDDEN, LEGACY_INSUFFICIENT_PERMISSIONS,
};
use crate::i18n::{http_code_to_message, Localizer, UNKNOWN_SERVER_ERROR_KEY};
use crate::ui::{ConfirmDialog, NotificationSink};

/// What the interceptor did with a failed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorOutcome {
    /// The session was terminated; the caller's request rejects as such
    SignedOut,
    /// The user was notified; the caller's request still rejects
    Handled,
    /// Nothing was done; the caller's request rejects untouched
    Skipped,
}

/// Policy hook for failed responses.
///
/// The body is handed over as already-buffered bytes so the interceptor can
/// parse it without consuming anything the caller still needs.
#[async_trait]
pub trait ResponseInterceptor: Send + Sync {
    async fn on_error(&self, status: StatusCode, body: &[u8]) -> ErrorOutcome;
}

/// The production console policy.
///
/// In order: the legacy 403 sign-out, the `auth.forbidden` dialog + sign-out,
/// then a toast built from the error body with generic fallbacks.
pub struct ConsoleErrorInterceptor {
    session: Arc<dyn SessionProvider>,
    notifications: Arc<dyn NotificationSink>,
    dialog: Arc<dyn ConfirmDialog>,
    localizer: Arc<dyn Localizer>,
    post_sign_out_redirect_uri: Url,
}

impl ConsoleErrorInterceptor {
    pub fn new(
        session: Arc<dyn SessionProvider>,
        notifications: Arc<dyn NotificationSink>,
        dialog: Arc<dyn ConfirmDialog>,
        localizer: Arc<dyn Localizer>,
        post_sign_out_redirect_uri: Url,
    ) -> Self {
        Self { session, notifications, dialog, localizer, post_sign_out_redirect_uri }
    }

    /// Sessions carrying a refresh token issued before organization scopes
    /// existed always fail with this exact 403. They cannot recover without a
    /// fresh sign-in, so terminate instead of toasting.
    fn is_legacy_session_defect(status: StatusCode, body: &RequestErrorBody) -> bool {
        status == StatusCode::FORBIDDEN && body.message == LEGACY_INSUFFICIENT_PERMISSIONS
    }

    async fn sign_out(&self, reason: &str) {
        warn!(reason, "Terminating session");
        if let Err(error) = self.session.sign_out(self.post_sign_out_redirect_uri.as_str()).await
        {
            warn!(%error, "Sign-out failed");
        }
    }

    fn fallback_message(&self, status: StatusCode) -> String {
        http_code_to_message(status.as_u16())
            .map(str::to_string)
            .unwrap_or_else(|| self.localizer.message(UNKNOWN_SERVER_ERROR_KEY))
    }
}

#[async_trait]
impl ResponseInterceptor for ConsoleErrorInterceptor {
    async fn on_error(&self, status: StatusCode, body: &[u8]) -> ErrorOutcome {
        let Ok(parsed) = serde_json::from_slice::<RequestErrorBody>(body) else {
            self.notifications.error(&self.fallback_message(status));
            return ErrorOutcome::Handled;
        };

        if Self::is_legacy_session_defect(status, &parsed) {
            self.sign_out("legacy session without organization scope").await;
            return ErrorOutcome::SignedOut;
        }

        if parsed.code == ERROR_CODE_FORBIDDEN {
            self.dialog.alert(&parsed.message).await;
            self.sign_out("console access forbidden").await;
            return ErrorOutcome::SignedOut;
        }

        debug!(status = status.as_u16(), code = %parsed.code, "Request error");
        let message = parsed.display_message();
        if message.is_empty() {
            self.notifications.error(&self.localizer.message(UNKNOWN_SERVER_ERROR_KEY));
        } else {
            self.notifications.error(&message);
        }

        ErrorOutcome::Handled
    }
}
