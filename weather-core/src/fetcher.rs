use async_trait::async_trait;
use reqwest::{Client, Url};
use std::fmt::Debug;
use tracing::{debug, warn};

use crate::{error::NetworkError, model::WeatherResponse};

/// Performs exactly one request per call and decodes the result.
///
/// This is the only point where the crate talks to the outside world, so the
/// service takes it as a trait object and tests swap in a stub.
#[async_trait]
pub trait Fetcher: Send + Sync + Debug {
    async fn fetch(&self, url: &Url) -> Result<WeatherResponse, NetworkError>;
}

/// `Fetcher` backed by a reqwest client.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    http: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }

    /// Use a preconfigured client (proxy, user agent, TLS settings).
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<WeatherResponse, NetworkError> {
        // The query carries the API key: log the route only, and strip the URL
        // from reqwest errors before they are logged or returned.
        debug!(host = url.host_str().unwrap_or_default(), path = url.path(), "GET weather");

        let res = self.http.get(url.clone()).send().await.map_err(|e| {
            let e = e.without_url();
            warn!(error = %e, "weather request could not be sent");
            NetworkError::TransportFailure(e.to_string())
        })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            let e = e.without_url();
            warn!(error = %e, "failed to read weather response body");
            NetworkError::TransportFailure(e.to_string())
        })?;

        if !status.is_success() {
            warn!(%status, "weather request rejected");
            return Err(NetworkError::TransportFailure(format!(
                "status {}: {}",
                status,
                truncate_body(&body)
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "weather response did not match expected shape");
            NetworkError::DecodingFailure(e.to_string())
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_is_kept() {
        assert_eq!(truncate_body("{\"cod\":401}"), "{\"cod\":401}");
    }

    #[test]
    fn long_body_is_truncated_on_char_boundary() {
        let body = "é".repeat(150);
        let truncated = truncate_body(&body);

        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.trim_end_matches("...").chars().count(), 100);
    }
}
