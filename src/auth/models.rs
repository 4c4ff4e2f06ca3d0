//! Wire shapes for structured server errors.

use serde::{Deserialize, Serialize};

/// Error code the server attaches when console access is forbidden.
pub const ERROR_CODE_FORBIDDEN: &str = "auth.forbidden";

/// Exact 403 message produced by sessions whose refresh token predates
/// organization scopes. Such sessions cannot recover without a fresh sign-in.
pub const LEGACY_INSUFFICIENT_PERMISSIONS: &str = "Insufficient permissions.";

/// Structured failure payload attached to non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl RequestErrorBody {
    /// Message and details newline-joined, for user-facing notifications.
    pub fn display_message(&self) -> String {
        match &self.details {
            Some(details) => format!("{}\n{}", self.message, details),
            None => self.message.clone(),
        }
    }
}
