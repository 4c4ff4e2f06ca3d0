//! Authentication primitives for the dispatch layer.
//!
//! This module defines the audience identifiers tokens are scoped to, the
//! session-provider seam the embedding identity SDK implements, and the wire
//! shape of structured server errors.

pub mod indicator;
pub mod models;
pub mod session;

pub use indicator::{management_api_indicator, ResourceIndicator, ORGANIZATION_URN_PREFIX};
pub use models::{RequestErrorBody, ERROR_CODE_FORBIDDEN, LEGACY_INSUFFICIENT_PERMISSIONS};
pub use session::SessionProvider;
