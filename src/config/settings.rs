//! # Dispatcher Settings
//!
//! Process-wide settings for the dispatch layer, loadable from `TENANTRY_`
//! prefixed environment variables with sensible defaults.

use std::time::Duration;
use url::Url;

use crate::config::DeploymentMode;
use crate::errors::{Error, Result};

/// Settings shared by every dispatcher built in this process.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Deployment mode of the platform this console talks to
    pub mode: DeploymentMode,

    /// Console origin; hosted requests are proxied under this origin
    pub console_origin: Url,

    /// Where the identity provider should land users after sign-out
    pub post_sign_out_redirect_uri: Url,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            mode: DeploymentMode::SelfHosted,
            console_origin: Url::parse("http://localhost:3002").expect("static URL"),
            post_sign_out_redirect_uri: Url::parse("http://localhost:3002/sign-in")
                .expect("static URL"),
            timeout_seconds: 20,
        }
    }
}

impl ApiSettings {
    /// Create settings from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let mode = match std::env::var("TENANTRY_DEPLOYMENT_MODE") {
            Ok(value) => value
                .parse::<DeploymentMode>()
                .map_err(|e| Error::config(e.to_string()))?,
            Err(_) => defaults.mode,
        };

        let console_origin = match std::env::var("TENANTRY_CONSOLE_ORIGIN") {
            Ok(value) => Url::parse(&value)
                .map_err(|e| Error::config(format!("Invalid console origin: {}", e)))?,
            Err(_) => defaults.console_origin,
        };

        let post_sign_out_redirect_uri = match std::env::var("TENANTRY_POST_SIGN_OUT_URI") {
            Ok(value) => Url::parse(&value)
                .map_err(|e| Error::config(format!("Invalid post sign-out URI: {}", e)))?,
            Err(_) => defaults.post_sign_out_redirect_uri,
        };

        let timeout_seconds = std::env::var("TENANTRY_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| defaults.timeout_seconds.to_string())
            .parse()
            .map_err(|e| Error::config(format!("Invalid request timeout: {}", e)))?;

        let settings =
            Self { mode, console_origin, post_sign_out_redirect_uri, timeout_seconds };
        settings.validate()?;
        Ok(settings)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.timeout_seconds == 0 || self.timeout_seconds > 300 {
            return Err(Error::config("Request timeout must be between 1 and 300 seconds"));
        }

        if self.console_origin.cannot_be_a_base() {
            return Err(Error::config("Console origin must be an absolute HTTP(S) URL"));
        }

        Ok(())
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
