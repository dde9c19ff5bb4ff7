//! Client configuration constants.
//!
//! Centralizes hardcoded values for easier configuration and documentation.

use std::time::Duration;

/// Base URL of the material service for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Timeout for one texture record request.
///
/// The controller has no timeout of its own: a request that never completes
/// leaves it loading with the previous record visible. This bounds that
/// window at the transport layer.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
