//! Endpoint validation
//!
//! A run only starts when all three endpoint URLs are present. No
//! reachability check is made.

use crate::config::ApiUrlsConfig;

/// Names of the endpoints whose URL is empty
pub fn missing_endpoints(urls: &ApiUrlsConfig) -> Vec<&'static str> {
    urls.entries()
        .into_iter()
        .filter(|(_, url)| url.is_empty())
        .map(|(name, _)| name)
        .collect()
}

/// Returns true only if the orders, alert and update URLs are all non-empty
pub fn validate_api_endpoints(urls: &ApiUrlsConfig) -> bool {
    missing_endpoints(urls).is_empty()
}
