//! Entry point: validate parameters, fetch, format, and render JSON text.

use serde_json::{Map, Value, json};
use std::fmt::Display;
use tracing::{Dispatch, debug, info, instrument::WithSubscriber, warn};

use crate::{
    definition::API_KEY_SECRET,
    error::ToolError,
    format::format_weather,
    model::{FormattedResult, ToolInput, WeatherRequest},
    provider::WeatherProvider,
};

/// A configured tool instance.
///
/// When a [`Dispatch`] is attached, every event emitted during an invocation
/// (including the provider's) goes to it instead of the host's default subscriber.
#[derive(Debug)]
pub struct WeatherTool<P> {
    provider: P,
    dispatch: Option<Dispatch>,
}

impl<P: WeatherProvider> WeatherTool<P> {
    pub fn new(provider: P) -> Self {
        Self { provider, dispatch: None }
    }

    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = Some(dispatch);
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Validate, fetch and format. The first failing check wins.
    pub async fn execute(
        &self,
        params: &Map<String, Value>,
        secrets: &Map<String, Value>,
    ) -> Result<FormattedResult, ToolError> {
        let request = WeatherRequest::from_params(params).ok_or(ToolError::MissingLocation)?;
        if let Some(requested) = params.get("units")
            && requested.as_str() != Some(request.units.as_str())
        {
            debug!(%requested, "Unsupported units, using metric");
        }

        let api_key = secrets
            .get(API_KEY_SECRET)
            .and_then(Value::as_str)
            .filter(|k| !k.is_empty())
            .ok_or(ToolError::MissingApiKey)?;

        let WeatherRequest { location, units } = request;
        info!(%location, %units, "Weather lookup requested");

        let response = self.provider.fetch(&location, units, api_key).await?;
        let formatted = format_weather(&response, units)?;

        Ok(formatted)
    }

    /// Run one invocation and render the outcome. Never fails: errors become `{"error": ...}`.
    pub async fn run(&self, params: &Map<String, Value>, secrets: &Map<String, Value>) -> String {
        match &self.dispatch {
            Some(dispatch) => {
                self.render(params, secrets)
                    .with_subscriber(dispatch.clone())
                    .await
            }
            None => self.render(params, secrets).await,
        }
    }

    /// Parse the `{"params": ..., "secrets": ...}` envelope and run it.
    pub async fn run_input(&self, input: &str) -> String {
        match serde_json::from_str::<ToolInput>(input) {
            Ok(input) => self.run(&input.params, &input.secrets).await,
            Err(e) => error_json(format!("Invalid input: {e}")),
        }
    }

    async fn render(&self, params: &Map<String, Value>, secrets: &Map<String, Value>) -> String {
        let outcome = self.execute(params, secrets).await.and_then(|result| {
            serde_json::to_string(&result).map_err(|e| ToolError::Serialize(e.to_string()))
        });

        match outcome {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "Weather lookup failed");
                error_json(err)
            }
        }
    }
}

/// Render a message in the `{"error": ...}` shape used for every failure.
pub fn error_json(message: impl Display) -> String {
    json!({ "error": message.to_string() }).to_string()
}
