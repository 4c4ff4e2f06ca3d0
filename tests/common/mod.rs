//! Shared fakes for dispatch integration tests.
//!
//! Provides recording implementations of the external seams:
//! - identity session provider (token requests + sign-out)
//! - toast notification sink
//! - blocking confirmation dialog

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use tenantry::{
    ConfirmDialog, Error, NotificationSink, OrganizationId, ResourceIndicator, Result,
    SessionProvider,
};

/// A token request observed by the fake session provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenRequest {
    Access(String),
    Organization(String),
}

/// Recording session provider.
pub struct FakeSession {
    authenticated: bool,
    pub token_requests: Mutex<Vec<TokenRequest>>,
    pub sign_outs: Mutex<Vec<String>>,
}

impl FakeSession {
    pub fn authenticated() -> Arc<Self> {
        Arc::new(Self {
            authenticated: true,
            token_requests: Mutex::new(Vec::new()),
            sign_outs: Mutex::new(Vec::new()),
        })
    }

    pub fn anonymous() -> Arc<Self> {
        Arc::new(Self {
            authenticated: false,
            token_requests: Mutex::new(Vec::new()),
            sign_outs: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl SessionProvider for FakeSession {
    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    async fn access_token(&self, indicator: &ResourceIndicator) -> Result<String> {
        if !self.authenticated {
            return Err(Error::auth("no session"));
        }
        self.token_requests
            .lock()
            .unwrap()
            .push(TokenRequest::Access(indicator.as_str().to_string()));
        Ok(format!("access:{}", indicator))
    }

    async fn organization_token(&self, org_id: &OrganizationId) -> Result<String> {
        if !self.authenticated {
            return Err(Error::auth("no session"));
        }
        self.token_requests
            .lock()
            .unwrap()
            .push(TokenRequest::Organization(org_id.as_str().to_string()));
        Ok(format!("org:{}", org_id))
    }

    async fn sign_out(&self, post_redirect_uri: &str) -> Result<()> {
        self.sign_outs.lock().unwrap().push(post_redirect_uri.to_string());
        Ok(())
    }
}

/// Recording toast sink.
#[derive(Default)]
pub struct FakeToast {
    pub messages: Mutex<Vec<String>>,
}

impl FakeToast {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

impl NotificationSink for FakeToast {
    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Recording confirmation dialog.
#[derive(Default)]
pub struct FakeDialog {
    pub alerts: Mutex<Vec<String>>,
}

impl FakeDialog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl ConfirmDialog for FakeDialog {
    async fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}
