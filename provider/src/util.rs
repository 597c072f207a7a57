//! Shared utilities for the question pipeline.

/// User-Agent string for HTTP requests.
pub const USER_AGENT: &str = concat!("leetpad/", env!("CARGO_PKG_VERSION"));

/// Create a configured reqwest client with standard headers.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_default()
}
