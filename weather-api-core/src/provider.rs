use async_trait::async_trait;
use std::fmt::Debug;

use crate::{error::FetchError, model::{ProviderResponse, Units}};

pub mod openweather;

pub use openweather::{DEFAULT_BASE_URL, OpenWeatherProvider};

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Issue a single request for current conditions at `location`.
    async fn fetch(
        &self,
        location: &str,
        units: Units,
        api_key: &str,
    ) -> Result<ProviderResponse, FetchError>;
}

/// Percent-encode a value for embedding in a query string.
///
/// Unreserved characters and `/` pass through; everything else is encoded
/// byte by byte, so a space becomes `%20` rather than `+`.
pub(crate) fn encode_query_value(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 3);
    for b in input.bytes() {
        match b {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}
