//! Request configuration derivation.
//!
//! A [`RequestConfig`] is a pure function of (deployment mode, tenant
//! context, console origin): hosted tenants route through the path-prefixed
//! management proxy with an organization-scoped audience, self-hosted
//! deployments go straight to the tenant's own endpoint.

use url::Url;

use crate::auth::{management_api_indicator, ResourceIndicator};
use crate::config::{DeploymentMode, TenantContext};
use crate::domain::tenant_organization_id;
use crate::errors::{Error, Result};

/// Base URL and token audience for one tenant's management API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestConfig {
    /// All request paths are resolved relative to this URL
    pub prefix_url: Url,
    /// Audience tokens attached to these requests are scoped to
    pub resource_indicator: ResourceIndicator,
}

impl RequestConfig {
    /// Derive the request configuration for a tenant.
    ///
    /// Fails fast in self-hosted mode for any tenant other than the default
    /// tenant; that state cannot produce a valid request and must never reach
    /// the network.
    pub fn resolve(
        mode: DeploymentMode,
        context: &TenantContext,
        console_origin: &Url,
    ) -> Result<Self> {
        match mode {
            DeploymentMode::Hosted => {
                let mut prefix_url = console_origin.clone();
                prefix_url
                    .path_segments_mut()
                    .map_err(|_| Error::config("Console origin cannot be a base URL"))?
                    .pop_if_empty()
                    .extend(["m", context.tenant_id.as_str()]);

                let organization = tenant_organization_id(&context.tenant_id);
                Ok(Self {
                    prefix_url,
                    resource_indicator: ResourceIndicator::organization(&organization),
                })
            }
            DeploymentMode::SelfHosted => {
                if !context.tenant_id.is_default() {
                    return Err(Error::invalid_tenant(
                        context.tenant_id.as_str(),
                        "only the default tenant is supported in self-hosted mode",
                    ));
                }

                Ok(Self {
                    prefix_url: context.endpoint.clone(),
                    resource_indicator: management_api_indicator(&context.tenant_id),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TenantId, DEFAULT_TENANT_ID};

    fn context(tenant: &str) -> TenantContext {
        TenantContext::new(
            TenantId::new(tenant),
            Url::parse(&format!("https://{}.tenantry.app", tenant)).unwrap(),
        )
    }

    #[test]
    fn hosted_routes_through_tenant_proxy() {
        let origin = Url::parse("https://console.tenantry.app").unwrap();
        let config =
            RequestConfig::resolve(DeploymentMode::Hosted, &context("acme"), &origin).unwrap();

        assert_eq!(config.prefix_url.as_str(), "https://console.tenantry.app/m/acme");
        assert_eq!(
            config.resource_indicator.as_str(),
            "urn:tenantry:organization:t-acme"
        );
    }

    #[test]
    fn hosted_origin_with_path_keeps_path() {
        let origin = Url::parse("https://cloud.example.com/console").unwrap();
        let config =
            RequestConfig::resolve(DeploymentMode::Hosted, &context("acme"), &origin).unwrap();

        assert_eq!(config.prefix_url.as_str(), "https://cloud.example.com/console/m/acme");
    }

    #[test]
    fn self_hosted_uses_tenant_endpoint() {
        let origin = Url::parse("http://localhost:3002").unwrap();
        let config = RequestConfig::resolve(
            DeploymentMode::SelfHosted,
            &context(DEFAULT_TENANT_ID),
            &origin,
        )
        .unwrap();

        assert_eq!(config.prefix_url.as_str(), "https://default.tenantry.app/");
        assert_eq!(
            config.resource_indicator.as_str(),
            "https://default.tenantry.app/api"
        );
    }

    #[test]
    fn self_hosted_rejects_non_default_tenant() {
        let origin = Url::parse("http://localhost:3002").unwrap();
        let err = RequestConfig::resolve(DeploymentMode::SelfHosted, &context("acme"), &origin)
            .unwrap_err();

        assert!(matches!(err, Error::InvalidTenant { .. }));
    }
}
