//! Test doubles shared by the unit tests.

use async_trait::async_trait;
use reqwest::Url;
use std::sync::Mutex;

use crate::{
    error::NetworkError,
    fetcher::Fetcher,
    model::{Condition, MainReadings, WeatherResponse},
};

/// Records every URL it is asked for and answers with a canned outcome.
#[derive(Debug)]
pub struct StubFetcher {
    outcome: Result<WeatherResponse, NetworkError>,
    calls: Mutex<Vec<Url>>,
}

impl StubFetcher {
    pub fn succeeding(response: WeatherResponse) -> Self {
        Self { outcome: Ok(response), calls: Mutex::new(Vec::new()) }
    }

    pub fn failing(err: NetworkError) -> Self {
        Self { outcome: Err(err), calls: Mutex::new(Vec::new()) }
    }

    /// Decodes `body` the way the HTTP fetcher would.
    pub fn from_body(body: &str) -> Self {
        let outcome = serde_json::from_str(body)
            .map_err(|e| NetworkError::DecodingFailure(e.to_string()));
        Self { outcome, calls: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<Url> {
        self.calls.lock().expect("stub lock poisoned").clone()
    }

    pub fn param(url: &Url, name: &str) -> Option<String> {
        url.query_pairs().find(|(k, _)| k == name).map(|(_, v)| v.into_owned())
    }
}

#[async_trait]
impl Fetcher for StubFetcher {
    async fn fetch(&self, url: &Url) -> Result<WeatherResponse, NetworkError> {
        self.calls.lock().expect("stub lock poisoned").push(url.clone());
        self.outcome.clone()
    }
}

pub fn paris_response() -> WeatherResponse {
    WeatherResponse {
        name: "Paris".into(),
        weather: vec![Condition { description: "clear sky".into() }],
        main: MainReadings { temp: 18.2 },
    }
}
