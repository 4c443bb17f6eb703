use std::sync::Arc;
use tracing::{debug, warn};

use crate::{
    error::NetworkError,
    fetcher::{Fetcher, HttpFetcher},
    model::{WeatherRequest, WeatherResponse},
    url::UrlBuilder,
};

/// Entry point for lookups by city name or by coordinates.
///
/// Cheap to clone; clones share the same fetcher so each request can run on
/// its own task.
#[derive(Debug, Clone)]
pub struct WeatherService {
    urls: UrlBuilder,
    fetcher: Arc<dyn Fetcher>,
}

impl WeatherService {
    pub fn new(urls: UrlBuilder, fetcher: Arc<dyn Fetcher>) -> Self {
        Self { urls, fetcher }
    }

    /// Service talking to the real provider over HTTP.
    pub fn http(urls: UrlBuilder) -> Self {
        Self::new(urls, Arc::new(HttpFetcher::new()))
    }

    pub async fn fetch(&self, request: &WeatherRequest) -> Result<WeatherResponse, NetworkError> {
        match request {
            WeatherRequest::City { city } => self.fetch_by_city(city).await,
            WeatherRequest::Coordinates { longitude, latitude } => {
                self.fetch_by_coordinates(longitude, latitude).await
            }
        }
    }

    /// Rejects blank input before any request is made. The text is sent
    /// untrimmed.
    pub async fn fetch_by_city(&self, city: &str) -> Result<WeatherResponse, NetworkError> {
        if city.trim().is_empty() {
            debug!("city search with empty input");
            return Err(NetworkError::EmptyInput);
        }

        let url = self.urls.city(city).ok_or_else(|| {
            warn!(endpoint = self.urls.endpoint(), "could not build city search URL");
            NetworkError::UrlConstructionFailed
        })?;

        debug!(city, "fetching weather by city");
        self.fetcher.fetch(&url).await
    }

    /// Coordinates are passed through as given; the location source is
    /// trusted to report sensible values.
    pub async fn fetch_by_coordinates(
        &self,
        longitude: &str,
        latitude: &str,
    ) -> Result<WeatherResponse, NetworkError> {
        let url = self.urls.coordinates(longitude, latitude).ok_or_else(|| {
            warn!(endpoint = self.urls.endpoint(), "could not build coordinate search URL");
            NetworkError::UrlConstructionFailed
        })?;

        debug!(longitude, latitude, "fetching weather by coordinates");
        self.fetcher.fetch(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{StubFetcher, paris_response};
    use crate::url::{DEFAULT_ENDPOINT, Units};

    fn service(stub: &Arc<StubFetcher>) -> WeatherService {
        WeatherService::new(UrlBuilder::new(DEFAULT_ENDPOINT, Units::Metric, "KEY"), stub.clone())
    }

    #[tokio::test]
    async fn city_search_issues_one_request_with_untrimmed_text() {
        for city in ["Paris", "  Paris ", "São Paulo", "New York"] {
            let stub = Arc::new(StubFetcher::succeeding(paris_response()));
            service(&stub).fetch_by_city(city).await.expect("lookup should succeed");

            let calls = stub.calls();
            assert_eq!(calls.len(), 1);
            assert_eq!(StubFetcher::param(&calls[0], "q").as_deref(), Some(city));
        }
    }

    #[tokio::test]
    async fn blank_city_fails_without_request() {
        for city in ["", " ", "\t", "   \t  "] {
            let stub = Arc::new(StubFetcher::succeeding(paris_response()));
            let err = service(&stub).fetch_by_city(city).await.unwrap_err();

            assert_eq!(err, NetworkError::EmptyInput);
            assert!(stub.calls().is_empty());
        }
    }

    #[tokio::test]
    async fn coordinates_are_not_validated() {
        for (lon, lat) in [("2.35", "48.85"), ("", ""), ("-181", "not-a-number")] {
            let stub = Arc::new(StubFetcher::succeeding(paris_response()));
            service(&stub).fetch_by_coordinates(lon, lat).await.expect("lookup should succeed");

            let calls = stub.calls();
            assert_eq!(calls.len(), 1);
            assert_eq!(StubFetcher::param(&calls[0], "lon").as_deref(), Some(lon));
            assert_eq!(StubFetcher::param(&calls[0], "lat").as_deref(), Some(lat));
            assert_eq!(StubFetcher::param(&calls[0], "q"), None);
        }
    }

    #[tokio::test]
    async fn decoded_response_is_propagated() {
        let stub = Arc::new(StubFetcher::from_body(
            r#"{"name":"Paris","weather":[{"description":"clear sky"}],"main":{"temp":18.2}}"#,
        ));

        let response = service(&stub).fetch_by_city("Paris").await.expect("lookup should succeed");

        assert_eq!(response.name, "Paris");
        assert_eq!(response.description(), Some("clear sky"));
        assert_eq!(response.main.temp, 18.2);
    }

    #[tokio::test]
    async fn fetcher_errors_are_propagated_unchanged() {
        for err in [
            NetworkError::TransportFailure("connection refused".into()),
            NetworkError::DecodingFailure("missing field `main`".into()),
        ] {
            let stub = Arc::new(StubFetcher::failing(err.clone()));
            assert_eq!(service(&stub).fetch_by_city("Paris").await.unwrap_err(), err);
            assert_eq!(service(&stub).fetch_by_coordinates("1", "2").await.unwrap_err(), err);
        }
    }

    #[tokio::test]
    async fn empty_weather_is_still_success() {
        let stub = Arc::new(StubFetcher::from_body(r#"{"name":"Oslo","weather":[],"main":{"temp":-3}}"#));

        let response = service(&stub).fetch_by_city("Oslo").await.expect("lookup should succeed");
        assert!(response.weather.is_empty());
        assert_eq!(response.summary(), None);
    }

    #[tokio::test]
    async fn bad_endpoint_reports_url_construction_failure() {
        let stub = Arc::new(StubFetcher::succeeding(paris_response()));
        let service =
            WeatherService::new(UrlBuilder::new("not a url", Units::Metric, "KEY"), stub.clone());

        assert_eq!(
            service.fetch_by_city("Paris").await.unwrap_err(),
            NetworkError::UrlConstructionFailed
        );
        assert_eq!(
            service.fetch_by_coordinates("1", "2").await.unwrap_err(),
            NetworkError::UrlConstructionFailed
        );
        assert!(stub.calls().is_empty());
    }

    #[tokio::test]
    async fn request_enum_dispatches() {
        let stub = Arc::new(StubFetcher::succeeding(paris_response()));
        let service = service(&stub);

        service.fetch(&WeatherRequest::city("Paris")).await.expect("city lookup");
        service.fetch(&WeatherRequest::coordinates("2.35", "48.85")).await.expect("coords lookup");

        let calls = stub.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(StubFetcher::param(&calls[0], "q").as_deref(), Some("Paris"));
        assert_eq!(StubFetcher::param(&calls[1], "lat").as_deref(), Some("48.85"));
    }
}
