use thiserror::Error;

/// Failure while talking to the weather provider.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid API key. Please check your API key and try again.")]
    Unauthorized,

    #[error("Location '{location}' not found. Please check the spelling and try again.")]
    NotFound { location: String },

    #[error("Failed to fetch weather data: HTTP {0}")]
    Status(u16),

    #[error("Failed to connect to weather service: {0}")]
    Transport(String),

    #[error("Failed to parse weather service response: {0}")]
    InvalidBody(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

/// Provider payload lacks a field the formatter needs.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("missing or invalid field in weather data: {0}")]
    MissingField(String),
}

/// Every way a single tool invocation can end without a result.
///
/// The `Display` text is exactly what ends up in `{"error": ...}`.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Location parameter is required")]
    MissingLocation,

    #[error("OpenWeatherMap API key is required")]
    MissingApiKey,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("An unexpected error occurred: {0}")]
    Structural(#[from] FormatError),

    #[error("An unexpected error occurred: {0}")]
    Serialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_messages() {
        assert!(FetchError::Unauthorized.to_string().contains("Invalid API key"));

        let not_found = FetchError::NotFound { location: "Atlantis".into() };
        assert_eq!(
            not_found.to_string(),
            "Location 'Atlantis' not found. Please check the spelling and try again."
        );

        assert_eq!(FetchError::Status(503).to_string(), "Failed to fetch weather data: HTTP 503");
    }

    #[test]
    fn fetch_errors_pass_through_tool_error() {
        let err = ToolError::from(FetchError::Status(500));
        assert_eq!(err.to_string(), "Failed to fetch weather data: HTTP 500");
    }

    #[test]
    fn structural_errors_are_reported_as_unexpected() {
        let err = ToolError::from(FormatError::MissingField("sys.country".into()));
        let msg = err.to_string();
        assert!(msg.starts_with("An unexpected error occurred: "));
        assert!(msg.contains("sys.country"));
    }
}
