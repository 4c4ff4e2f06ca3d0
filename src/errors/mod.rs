//! # Error Handling
//!
//! Error types for the tenantry dispatch layer, defined with `thiserror`.
//! Transport failures, configuration problems, and structured server errors
//! all funnel into the single [`Error`] enum so callers can match on the
//! outcome of a dispatched request.

use crate::auth::RequestErrorBody;

/// Custom result type for tenantry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the tenantry dispatch layer
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Token acquisition or session errors
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Tenant context is invalid for the current deployment mode
    #[error("Invalid tenant '{tenant_id}': {reason}")]
    InvalidTenant { tenant_id: String, reason: String },

    /// Network transport errors (connect, TLS, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL construction errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned a non-success status
    #[error("Request failed with status {status}")]
    Request {
        status: u16,
        body: Option<RequestErrorBody>,
    },

    /// The session was terminated by the error policy (sign-out branches)
    #[error("Session terminated: {reason}")]
    SessionTerminated { reason: String },
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new authentication error
    pub fn auth<S: Into<String>>(message: S) -> Self {
        Self::Auth(message.into())
    }

    /// Create an invalid-tenant error
    pub fn invalid_tenant<T: Into<String>, R: Into<String>>(tenant_id: T, reason: R) -> Self {
        Self::InvalidTenant { tenant_id: tenant_id.into(), reason: reason.into() }
    }

    /// Create a request error from a status code and optional parsed body
    pub fn request(status: u16, body: Option<RequestErrorBody>) -> Self {
        Self::Request { status, body }
    }

    /// Create a session-terminated error
    pub fn session_terminated<S: Into<String>>(reason: S) -> Self {
        Self::SessionTerminated { reason: reason.into() }
    }

    /// HTTP status carried by this error, when there is one
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Request { status, .. } => Some(*status),
            Error::Transport(source) => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Structured server error body carried by this error, when there is one
    pub fn body(&self) -> Option<&RequestErrorBody> {
        match self {
            Error::Request { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = Error::config("missing console origin");
        assert!(matches!(error, Error::Config(_)));
        assert_eq!(error.to_string(), "Configuration error: missing console origin");
    }

    #[test]
    fn test_invalid_tenant_display() {
        let error = Error::invalid_tenant("acme", "only the default tenant is supported");
        assert_eq!(
            error.to_string(),
            "Invalid tenant 'acme': only the default tenant is supported"
        );
    }

    #[test]
    fn test_request_error_accessors() {
        let body = RequestErrorBody {
            code: "entity.not_found".to_string(),
            message: "Resource not found".to_string(),
            details: None,
        };
        let error = Error::request(404, Some(body));
        assert_eq!(error.status(), Some(404));
        assert_eq!(error.body().unwrap().code, "entity.not_found");

        let error = Error::auth("token acquisition failed");
        assert_eq!(error.status(), None);
        assert!(error.body().is_none());
    }
}
