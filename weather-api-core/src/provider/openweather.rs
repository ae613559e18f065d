use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, error, info};

use crate::{
    error::FetchError,
    model::{ProviderResponse, Units},
};

use super::{WeatherProvider, encode_query_value};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the provider at a different API root, e.g. a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn current_weather_url(&self, location: &str, units: Units, api_key: &str) -> String {
        format!(
            "{}/weather?q={}&units={}&appid={}",
            self.base_url,
            encode_query_value(location),
            units,
            api_key,
        )
    }
}

impl Default for OpenWeatherProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch(
        &self,
        location: &str,
        units: Units,
        api_key: &str,
    ) -> Result<ProviderResponse, FetchError> {
        let url = self.current_weather_url(location, units, api_key);

        info!(%location, %units, "Fetching weather data");

        let res = self.http.get(&url).send().await.map_err(|e| {
            error!(error = %e, "HTTP request error");
            FetchError::from(e)
        })?;

        let status = res.status();
        match status {
            StatusCode::OK => {}
            StatusCode::UNAUTHORIZED => {
                error!("Invalid API key");
                return Err(FetchError::Unauthorized);
            }
            StatusCode::NOT_FOUND => {
                error!(%location, "Location not found");
                return Err(FetchError::NotFound {
                    location: location.to_string(),
                });
            }
            other => {
                error!(status = other.as_u16(), "API error");
                return Err(FetchError::Status(other.as_u16()));
            }
        }

        let body = res.text().await.map_err(|e| {
            error!(error = %e, "Failed to read response body");
            FetchError::from(e)
        })?;

        debug!(status = status.as_u16(), bytes = body.len(), "Weather data received");

        ProviderResponse::from_body(body).map_err(|e| {
            error!(error = %e, "Response body is not JSON");
            FetchError::InvalidBody(e.to_string())
        })
    }
}
