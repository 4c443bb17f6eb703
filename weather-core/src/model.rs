use serde::{Deserialize, Serialize};

/// One lookup, built per user action or location update and consumed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherRequest {
    City { city: String },
    Coordinates { longitude: String, latitude: String },
}

impl WeatherRequest {
    pub fn city(city: impl Into<String>) -> Self {
        WeatherRequest::City { city: city.into() }
    }

    pub fn coordinates(longitude: impl Into<String>, latitude: impl Into<String>) -> Self {
        WeatherRequest::Coordinates { longitude: longitude.into(), latitude: latitude.into() }
    }
}

/// Current conditions as returned by the provider.
///
/// Only the fields below are read; anything else in the body is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    /// Location label, e.g. "Paris".
    pub name: String,
    pub weather: Vec<Condition>,
    pub main: MainReadings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    /// Temperature in the unit system the request asked for.
    pub temp: f64,
}

impl WeatherResponse {
    /// First reported condition, if the provider sent any.
    pub fn description(&self) -> Option<&str> {
        self.weather.first().map(|w| w.description.as_str())
    }

    /// Three-line text for display: name, description, temperature.
    ///
    /// `None` when there is no description; the caller then leaves its
    /// display untouched.
    pub fn summary(&self) -> Option<String> {
        let description = self.description()?;
        // `{:?}` keeps the fractional part of whole numbers: 18.0 -> "18.0".
        Some(format!("{}\n{}\n{:?}°", self.name, description, self.main.temp))
    }
}
