//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Request URL construction for city and coordinate lookups
//! - The fetcher abstraction and its HTTP implementation
//! - The lookup service and its error taxonomy
//! - Location update plumbing and display state
//! - Configuration & credentials handling
//!
//! It is used by `weather-cli`, but can also be reused by other front ends.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod locale;
pub mod location;
pub mod model;
pub mod screen;
pub mod service;
pub mod url;

#[cfg(test)]
mod testing;

pub use reqwest::Url;

pub use config::Config;
pub use error::NetworkError;
pub use fetcher::{Fetcher, HttpFetcher};
pub use locale::Locale;
pub use location::{ChannelObserver, LocationFix, LocationProvider, ManualLocationProvider};
pub use model::{WeatherRequest, WeatherResponse};
pub use screen::{Render, Slot, WeatherScreen};
pub use service::WeatherService;
pub use url::{Units, UrlBuilder};
