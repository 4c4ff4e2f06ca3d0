//! # Observability
//!
//! Structured logging setup for applications embedding the dispatch layer.
//! The dispatcher itself only emits `tracing` events; hosts that already run
//! their own subscriber can skip this module entirely.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

use crate::errors::{Error, Result};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize the global tracing subscriber.
///
/// `default_level` applies when `RUST_LOG` is unset. Calling this twice is an
/// error; it installs a process-global subscriber.
pub fn init_tracing(default_level: &str) -> Result<()> {
    INITIALIZED
        .set(())
        .map_err(|_| Error::config("Tracing already initialized"))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| Error::config(format!("Invalid log filter: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| Error::config(format!("Failed to install subscriber: {}", e)))?;

    tracing::debug!("Tracing initialized");
    Ok(())
}
