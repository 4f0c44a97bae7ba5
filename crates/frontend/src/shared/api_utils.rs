//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing service URLs.

use crate::shared::config::ServiceConfig;

/// Get the base URL for API requests
///
/// The fortune service is mounted on the same origin as the admin page.
///
/// # Returns
/// - Page origin like "https://tienda.example.com"
/// - Empty string if window is not available (requests then go to relative paths)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Join a base URL and a path with exactly one `/` between them
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base, path)
}

/// URL of the fortune collection (`GET`/`POST`)
///
/// # Example
/// ```ignore
/// let url = collection_url(&config.service);
/// ```
pub fn collection_url(service: &ServiceConfig) -> String {
    let base = if service.base_url.is_empty() {
        api_base()
    } else {
        service.base_url.clone()
    };
    join_url(&base, &service.path)
}

/// URL of a single fortune (`DELETE`); the id is percent-encoded
pub fn item_url(collection: &str, id: &str) -> String {
    join_url(collection, &urlencoding::encode(id))
}
