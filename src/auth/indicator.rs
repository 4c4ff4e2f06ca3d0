//! Resource indicators.
//!
//! A resource indicator names the API audience an access token is scoped to.
//! Indicators are opaque strings except for one recognized namespace: the
//! organization URN, `urn:tenantry:organization:<orgId>`, which marks a token
//! request as organization-scoped and carries the organization id inline.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::domain::{OrganizationId, TenantId};

/// Namespace prefix for organization-scoped resource indicators.
pub const ORGANIZATION_URN_PREFIX: &str = "urn:tenantry:organization:";

/// An API audience a token is scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceIndicator(String);

impl ResourceIndicator {
    /// Create an indicator from a raw audience string.
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    /// Build the organization URN for the given organization.
    pub fn organization(org_id: &OrganizationId) -> Self {
        Self(format!("{}{}", ORGANIZATION_URN_PREFIX, org_id))
    }

    /// Whether this indicator is organization-namespaced.
    pub fn is_organization(&self) -> bool {
        self.0.starts_with(ORGANIZATION_URN_PREFIX)
    }

    /// Extract the embedded organization id, if this indicator carries one.
    pub fn organization_id(&self) -> Option<OrganizationId> {
        self.0
            .strip_prefix(ORGANIZATION_URN_PREFIX)
            .filter(|rest| !rest.is_empty())
            .map(OrganizationId::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ResourceIndicator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ResourceIndicator {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ResourceIndicator {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The audience of a tenant's own management API.
pub fn management_api_indicator(tenant_id: &TenantId) -> ResourceIndicator {
    ResourceIndicator::new(format!("https://{}.tenantry.app/api", tenant_id))
}
