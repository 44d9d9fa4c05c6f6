//! Backend REST Client
//!
//! Thin wrappers over the prayer API, organized by concern: `wire` holds the
//! JSON shapes and the wire⇄canonical transforms, `prayers` the endpoint
//! functions. One round trip per call; no retries, no caching.

mod prayers;
mod wire;

use thiserror::Error;

pub use prayers::*;
pub use wire::{
    from_wire, to_wire, CreatePrayerInput, NewComment, UpdatePrayerInput, WireComment,
    WirePrayerRequest, WireStats,
};

/// Base path for all backend endpoints
pub const API_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Failures surfaced unchanged to the store boundary
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure (unreachable host, DNS, aborted fetch)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Backend answered with a non-success status
    #[error("request failed with status {0}")]
    Status(u16),
}

pub type ApiResult<T> = Result<T, ApiError>;

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

fn url(path: &str) -> String {
    format!("{}{}", API_BASE_URL, path)
}

fn check(response: reqwest::Response) -> ApiResult<reqwest::Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status().as_u16()))
    }
}
