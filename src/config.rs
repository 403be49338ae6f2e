use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const API_URL_ENV: &str = "CRM_API_URL";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// Collection endpoints, relative to the API base URL.
pub const CUSTOMERS: &str = "customers";
pub const CONTACTS: &str = "contacts";
pub const OPPORTUNITIES: &str = "opportunities";
pub const ACTIVITIES: &str = "activities";
pub const PRODUCTS: &str = "products";

/// Base URL of the CRM API: `$CRM_API_URL` when set and non-empty,
/// otherwise [`DEFAULT_API_URL`].
pub fn default_api_url() -> String {
    match std::env::var(API_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => DEFAULT_API_URL.to_string(),
    }
}
