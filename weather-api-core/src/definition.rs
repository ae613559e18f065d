//! Metadata the host orchestrator reads to register the tool.

use serde::Serialize;
use serde_json::{Map, Value, json};

pub const TOOL_NAME: &str = "weather_api";
pub const API_KEY_SECRET: &str = "OPENWEATHERMAP_API_KEY";

#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub author: &'static str,
    pub stage: &'static str,
    pub parameter_schema: Value,
    pub dependencies: Vec<&'static str>,
    pub secret_names: Vec<&'static str>,
    pub environment_variables: Map<String, Value>,
    pub host_functions: Vec<String>,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: TOOL_NAME,
        description: "Retrieves weather information for a specified location using OpenWeatherMap API",
        version: "1.0",
        author: "Nexus",
        stage: "stable",
        parameter_schema: json!({
            "type": "object",
            "properties": {
                "location": {
                    "type": "string",
                    "description": "City name or location (e.g., 'London', 'New York', 'Tokyo')"
                },
                "units": {
                    "type": "string",
                    "enum": ["metric", "imperial"],
                    "description": "Temperature units (metric for Celsius, imperial for Fahrenheit)",
                    "default": "metric"
                }
            },
            "required": ["location"]
        }),
        dependencies: vec!["reqwest", "serde_json", "tokio"],
        secret_names: vec![API_KEY_SECRET],
        environment_variables: Map::new(),
        host_functions: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_requires_location_only() {
        let def = definition();
        assert_eq!(def.parameter_schema["required"], json!(["location"]));
        assert_eq!(def.parameter_schema["properties"]["units"]["default"], "metric");
        assert_eq!(
            def.parameter_schema["properties"]["units"]["enum"],
            json!(["metric", "imperial"])
        );
    }

    #[test]
    fn declares_api_key_secret() {
        let value = serde_json::to_value(definition()).unwrap();
        assert_eq!(value["name"], TOOL_NAME);
        assert_eq!(value["secret_names"], json!([API_KEY_SECRET]));
        assert_eq!(value["environment_variables"], json!({}));
    }
}
