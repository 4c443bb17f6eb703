use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// OpenWeatherMap current-weather endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Unit system passed to the provider as the `units` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
    Standard,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }

    pub const fn all() -> &'static [Units] {
        &[Units::Metric, Units::Imperial, Units::Standard]
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Units {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            "standard" => Ok(Units::Standard),
            _ => Err(anyhow::anyhow!(
                "Unknown unit system '{value}'. Supported: metric, imperial, standard."
            )),
        }
    }
}

/// Builds request URLs against one endpoint with a fixed unit system and key.
#[derive(Clone)]
pub struct UrlBuilder {
    endpoint: String,
    units: Units,
    api_key: String,
}

impl fmt::Debug for UrlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlBuilder")
            .field("endpoint", &self.endpoint)
            .field("units", &self.units)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl UrlBuilder {
    pub fn new(endpoint: impl Into<String>, units: Units, api_key: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), units, api_key: api_key.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn units(&self) -> Units {
        self.units
    }

    /// `<endpoint>?q=<city>&units=..&appid=..`
    pub fn city(&self, city: &str) -> Option<Url> {
        self.build(&[("q", city)])
    }

    /// `<endpoint>?lon=<longitude>&lat=<latitude>&units=..&appid=..`
    pub fn coordinates(&self, longitude: &str, latitude: &str) -> Option<Url> {
        self.build(&[("lon", longitude), ("lat", latitude)])
    }

    fn build(&self, params: &[(&str, &str)]) -> Option<Url> {
        let mut url = Url::parse(&self.endpoint).ok()?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return None;
        }

        url.query_pairs_mut()
            .extend_pairs(params)
            .append_pair("units", self.units.as_str())
            .append_pair("appid", &self.api_key);

        Some(url)
    }
}
