use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, value::RawValue};

/// Measurement system requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    /// Interpret a raw `units` parameter. Unsupported or missing values fall back to metric.
    pub fn coerce(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("imperial") => Units::Imperial,
            _ => Units::Metric,
        }
    }

    pub fn temperature_label(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }

    pub fn speed_label(&self) -> &'static str {
        match self {
            Units::Metric => "m/s",
            Units::Imperial => "mph",
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    pub location: String,
    pub units: Units,
}

impl WeatherRequest {
    /// Read `location` and `units` from tool parameters.
    ///
    /// Returns `None` when `location` is missing, empty or not a string.
    pub fn from_params(params: &Map<String, Value>) -> Option<Self> {
        let location = params
            .get("location")
            .and_then(Value::as_str)
            .filter(|l| !l.is_empty())?;

        Some(Self {
            location: location.to_string(),
            units: Units::coerce(params.get("units")),
        })
    }
}

/// Body returned by the provider on success, kept byte-for-byte.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    raw: Box<RawValue>,
}

impl ProviderResponse {
    /// Wrap a response body. Fails if the body is not a JSON document.
    pub fn from_body(body: String) -> Result<Self, serde_json::Error> {
        let raw = RawValue::from_string(body)?;
        Ok(Self { raw })
    }

    pub fn as_str(&self) -> &str {
        self.raw.get()
    }

    pub fn into_raw(self) -> Box<RawValue> {
        self.raw
    }
}

/// Human-labelled subset of the provider payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherSummary {
    pub condition: String,
    pub description: String,
    pub temperature: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind_speed: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormattedResult {
    pub location: String,
    pub weather: WeatherSummary,
    pub raw_data: Box<RawValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
}

/// Envelope read from stdin by the CLI driver.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolInput {
    #[serde(default)]
    pub params: Map<String, Value>,
    #[serde(default)]
    pub secrets: Map<String, Value>,
}
