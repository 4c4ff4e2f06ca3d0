//! Domain identifiers
//!
//! Type-safe NewType wrappers for tenant and organization identifiers, so the
//! two cannot be mixed up at a call site. Each ID implements `Display`,
//! `FromStr`, `AsRef<str>`, `Serialize`, and `Deserialize`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The sole tenant permitted in self-hosted deployments.
pub const DEFAULT_TENANT_ID: &str = "default";

/// Macro to generate NewType ID wrappers with all required traits
macro_rules! domain_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from an existing string
            pub fn new<S: Into<String>>(s: S) -> Self {
                Self(s.into())
            }

            /// Get the inner string value
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Convert to inner string value
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

domain_id!(
    /// Unique identifier for a tenant
    TenantId
);

domain_id!(
    /// Unique identifier for an organization
    OrganizationId
);

impl TenantId {
    /// Whether this is the default tenant (the only one allowed self-hosted)
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_TENANT_ID
    }
}

/// The organization that mirrors a tenant in hosted deployments.
///
/// Every hosted tenant is backed by an organization named `t-<tenantId>`;
/// console access to that tenant is granted through membership in it.
pub fn tenant_organization_id(tenant_id: &TenantId) -> OrganizationId {
    OrganizationId::new(format!("t-{}", tenant_id))
}
