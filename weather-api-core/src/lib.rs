//! Core library for the `weather_api` tool.
//!
//! This crate defines:
//! - The OpenWeatherMap fetcher and its status classification
//! - The formatter that turns a provider payload into a labelled summary
//! - The entry point that validates parameters and always answers with JSON text
//! - Declared tool metadata and local configuration
//!
//! It is used by `weather-api-cli`, but can also be embedded by other hosts.

pub mod config;
pub mod definition;
pub mod error;
pub mod format;
pub mod model;
pub mod provider;
pub mod tool;

pub use config::Config;
pub use definition::{ToolDefinition, definition};
pub use error::{FetchError, FormatError, ToolError};
pub use format::format_weather;
pub use model::{ErrorResult, FormattedResult, ProviderResponse, ToolInput, Units, WeatherRequest, WeatherSummary};
pub use provider::{OpenWeatherProvider, WeatherProvider};
pub use tool::{WeatherTool, error_json};
