use thiserror::Error;

use crate::locale::{Locale, Message};

/// Every way a weather lookup can fail.
///
/// Failures are always returned as values; none of them is fatal and the
/// caller may simply retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// City search submitted with empty or whitespace-only text.
    #[error("no city name was given")]
    EmptyInput,

    /// Endpoint and input could not be combined into a request URL.
    #[error("failed to build the weather request URL")]
    UrlConstructionFailed,

    /// Connectivity, DNS, timeout or non-2xx status.
    #[error("weather request failed: {0}")]
    TransportFailure(String),

    /// Response body does not have the expected shape.
    #[error("failed to decode weather response: {0}")]
    DecodingFailure(String),
}

impl NetworkError {
    /// Localized text shown to the user for this failure.
    pub fn title(&self, locale: Locale) -> &'static str {
        match self {
            NetworkError::EmptyInput => locale.text(Message::EmptyCity),
            NetworkError::UrlConstructionFailed
            | NetworkError::TransportFailure(_)
            | NetworkError::DecodingFailure(_) => locale.text(Message::GenericError),
        }
    }
}
