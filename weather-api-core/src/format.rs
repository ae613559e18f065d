//! Reshape a provider payload into the labelled summary.

use serde::Deserialize;
use serde_json::Number;

use crate::{
    error::FormatError,
    model::{FormattedResult, ProviderResponse, Units, WeatherSummary},
};

// Only the fields the summary reads. Numbers stay as `Number` so they print
// exactly as the provider sent them.
#[derive(Debug, Deserialize)]
struct OwCondition {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: Number,
    feels_like: Number,
    humidity: Number,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: Number,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrent {
    name: String,
    weather: Vec<OwCondition>,
    main: OwMain,
    wind: OwWind,
    sys: OwSys,
}

pub fn format_weather(
    response: &ProviderResponse,
    units: Units,
) -> Result<FormattedResult, FormatError> {
    let parsed: OwCurrent = serde_json::from_str(response.as_str())
        .map_err(|e| FormatError::MissingField(e.to_string()))?;

    let condition = parsed
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| FormatError::MissingField("weather[0]".to_string()))?;

    let temp_unit = units.temperature_label();
    let speed_unit = units.speed_label();

    let weather = WeatherSummary {
        condition: condition.main,
        description: condition.description,
        temperature: format!("{} {temp_unit}", parsed.main.temp),
        feels_like: format!("{} {temp_unit}", parsed.main.feels_like),
        humidity: format!("{}%", parsed.main.humidity),
        wind_speed: format!("{} {speed_unit}", parsed.wind.speed),
    };

    Ok(FormattedResult {
        location: format!("{}, {}", parsed.name, parsed.sys.country),
        weather,
        raw_data: response.clone().into_raw(),
    })
}
