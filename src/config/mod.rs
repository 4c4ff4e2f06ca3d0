//! # Configuration Management
//!
//! Deployment mode, tenant context, and dispatcher settings. The tenant
//! context is passed explicitly to the dispatcher rather than read from
//! ambient globals; callers re-derive it when the user switches tenants.

mod settings;

pub use settings::ApiSettings;

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;
use url::Url;

use crate::domain::TenantId;

/// How the platform is deployed, which determines request routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentMode {
    /// Managed cloud: requests route through a path-prefixed proxy keyed by
    /// tenant, authorized with organization-scoped tokens.
    Hosted,
    /// Self-hosted: requests go directly to the tenant's own endpoint. Only
    /// the default tenant exists in this mode.
    SelfHosted,
}

impl DeploymentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentMode::Hosted => "hosted",
            DeploymentMode::SelfHosted => "self-hosted",
        }
    }
}

impl Display for DeploymentMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DeploymentMode {
    type Err = DeploymentModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hosted" => Ok(DeploymentMode::Hosted),
            "self-hosted" => Ok(DeploymentMode::SelfHosted),
            other => Err(DeploymentModeParseError(other.to_string())),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid deployment mode: {0}")]
pub struct DeploymentModeParseError(pub String);

/// The tenant a dispatcher instance targets.
///
/// One context per dispatcher; switching tenants means building a new
/// dispatcher from a new context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantContext {
    pub tenant_id: TenantId,
    /// The tenant's own endpoint, used directly in self-hosted mode.
    pub endpoint: Url,
}

impl TenantContext {
    pub fn new(tenant_id: TenantId, endpoint: Url) -> Self {
        Self { tenant_id, endpoint }
    }
}
