//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use contracts::shared::SiteConfig;

/// Get the base URL for API requests
///
/// Taken from `[api] base_url` in the embedded `config.toml`.
///
/// # Returns
/// - API base URL like "http://localhost:5000", without a trailing slash
pub fn api_base() -> String {
    SiteConfig::global().api_base().to_string()
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/auth/signup");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
