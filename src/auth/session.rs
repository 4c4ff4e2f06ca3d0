//! Session provider seam.
//!
//! The dispatch layer never talks to the identity provider directly; it goes
//! through [`SessionProvider`], implemented by the embedding application's
//! identity SDK. The provider owns token caching and refresh. This crate only
//! asks for tokens and, on the two unrecoverable error branches, asks the
//! provider to terminate the session.

use async_trait::async_trait;

use crate::auth::ResourceIndicator;
use crate::domain::OrganizationId;
use crate::errors::Result;

/// Access to the authenticated user session.
///
/// All methods may suspend: token acquisition can involve a refresh round
/// trip. Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Whether a user session is currently established.
    fn is_authenticated(&self) -> bool;

    /// Acquire an access token scoped to the given API audience.
    async fn access_token(&self, indicator: &ResourceIndicator) -> Result<String>;

    /// Acquire an access token scoped to the given organization.
    async fn organization_token(&self, org_id: &OrganizationId) -> Result<String>;

    /// Terminate the session and redirect to `post_redirect_uri`.
    async fn sign_out(&self, post_redirect_uri: &str) -> Result<()>;
}
