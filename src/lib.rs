//! # Tenantry
//!
//! Authenticated management-API dispatch for multi-tenant identity platform
//! consoles. Given a tenant context and deployment mode, the crate derives
//! where requests go and which token they carry, and applies a uniform error
//! policy (notification, dialog, or session termination) to every failed
//! response.
//!
//! ## Core Components
//!
//! - **Request routing**: hosted deployments go through the path-prefixed
//!   management proxy with organization-scoped tokens; self-hosted
//!   deployments talk directly to the default tenant's own endpoint
//! - **Token selection**: organization-namespaced resource indicators request
//!   organization tokens, everything else requests plain access tokens
//! - **Error policy**: a response interceptor turns structured server errors
//!   into user notifications, with two unrecoverable branches that terminate
//!   the session instead
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tenantry::{ApiClient, ApiSettings, TenantContext, TenantId};
//! # use tenantry::{SessionProvider, NotificationSink, ConfirmDialog, StaticLocalizer};
//! # fn surfaces() -> (Arc<dyn SessionProvider>, Arc<dyn NotificationSink>, Arc<dyn ConfirmDialog>) { unimplemented!() }
//!
//! # async fn run() -> tenantry::Result<()> {
//! let settings = ApiSettings::from_env()?;
//! let context = TenantContext::new(
//!     TenantId::new("default"),
//!     url::Url::parse("https://default.tenantry.app").unwrap(),
//! );
//! let (session, toast, dialog) = surfaces();
//!
//! let api = ApiClient::for_tenant(
//!     &settings,
//!     &context,
//!     session,
//!     toast,
//!     dialog,
//!     Arc::new(StaticLocalizer::default()),
//!     false,
//! )?;
//!
//! let me: serde_json::Value = api.get_json("api/me").await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod errors;
pub mod i18n;
pub mod observability;
pub mod ui;

// Re-export commonly used types and traits
pub use auth::{
    management_api_indicator, RequestErrorBody, ResourceIndicator, SessionProvider,
};
pub use config::{ApiSettings, DeploymentMode, TenantContext};
pub use dispatch::{
    ApiClient, ApiClientBuilder, ConsoleErrorInterceptor, ErrorOutcome, RequestConfig,
    ResponseInterceptor,
};
pub use domain::{tenant_organization_id, OrganizationId, TenantId, DEFAULT_TENANT_ID};
pub use errors::{Error, Result};
pub use i18n::{http_code_to_message, Localizer, StaticLocalizer};
pub use observability::init_tracing;
pub use ui::{ConfirmDialog, NotificationSink};

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
