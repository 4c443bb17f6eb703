use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Language used for user-facing text (alerts, prompts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

/// Keys of the message catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    /// Title of the error alert.
    ErrorTitle,
    /// Label of the single button dismissing an alert.
    Acknowledge,
    /// Shown when a city search is submitted with no text.
    EmptyCity,
    /// Shown for every other failure.
    GenericError,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    pub const fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Fr]
    }

    pub fn text(&self, message: Message) -> &'static str {
        match (self, message) {
            (Locale::En, Message::ErrorTitle) => "Error",
            (Locale::En, Message::Acknowledge) => "OK",
            (Locale::En, Message::EmptyCity) => "Please enter a city.",
            (Locale::En, Message::GenericError) => {
                "Something went wrong while fetching the weather. Please try again."
            }
            (Locale::Fr, Message::ErrorTitle) => "Erreur",
            (Locale::Fr, Message::Acknowledge) => "OK",
            (Locale::Fr, Message::EmptyCity) => "Veuillez saisir une ville.",
            (Locale::Fr, Message::GenericError) => {
                "Une erreur est survenue lors de la récupération de la météo. Veuillez réessayer."
            }
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "fr" | "french" | "français" => Ok(Locale::Fr),
            _ => Err(anyhow::anyhow!("Unknown locale '{value}'. Supported locales: en, fr.")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_as_str_roundtrip() {
        for locale in Locale::all() {
            let parsed: Locale = locale.as_str().parse().expect("roundtrip should succeed");
            assert_eq!(*locale, parsed);
        }
    }

    #[test]
    fn unknown_locale_error() {
        let err = "de".parse::<Locale>().unwrap_err();
        assert!(err.to_string().contains("Unknown locale"));
    }

    #[test]
    fn every_message_is_translated() {
        let messages =
            [Message::ErrorTitle, Message::Acknowledge, Message::EmptyCity, Message::GenericError];
        for locale in Locale::all() {
            for message in messages {
                assert!(!locale.text(message).is_empty());
            }
        }
        assert_ne!(Locale::En.text(Message::EmptyCity), Locale::Fr.text(Message::EmptyCity));
    }
}
