//! # Authenticated Request Dispatch
//!
//! The core of the crate: derive where a request goes and which token it
//! carries, then apply a uniform error policy to every failed response.
//!
//! - [`route`]: per-tenant request configuration (base URL + audience)
//! - [`client`]: the configured HTTP client with per-request token attachment
//! - [`interceptor`]: the response error policy, behind a narrow trait

pub mod client;
pub mod interceptor;
pub mod route;

pub use client::{ApiClient, ApiClientBuilder};
pub use interceptor::{ConsoleErrorInterceptor, ErrorOutcome, ResponseInterceptor};
pub use route::RequestConfig;
