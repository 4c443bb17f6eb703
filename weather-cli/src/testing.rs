//! Test doubles for driving the commands without a network.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use weather_core::{
    Fetcher, NetworkError, Units, Url, UrlBuilder, WeatherResponse, WeatherService,
    url::DEFAULT_ENDPOINT,
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

pub fn service_with(stub: &Arc<StubFetcher>) -> WeatherService {
    WeatherService::new(UrlBuilder::new(DEFAULT_ENDPOINT, Units::Metric, "KEY"), stub.clone())
}

pub fn paris_response() -> WeatherResponse {
    serde_json::from_str(
        r#"{"name":"Paris","weather":[{"description":"clear sky"}],"main":{"temp":18.2}}"#,
    )
    .expect("canned body should decode")
}
