use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Select, Text};
use std::process::ExitCode;
use weather_core::{Config, Locale, NetworkError, Slot, Units, WeatherScreen, WeatherService};

use crate::{locate, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather by city or location")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Language for messages and alerts, e.g. "en" or "fr". Defaults to the configured one.
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set API key, units, language and endpoint interactively.
    Configure,

    /// Show current weather for a city.
    City {
        /// City name; several words are joined with spaces.
        name: Vec<String>,
    },

    /// Show current weather for location updates.
    ///
    /// With --lon and --lat, a single fix is used. Otherwise one
    /// `<longitude> <latitude>` pair is read per line from stdin until EOF.
    Locate {
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<String>,

        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Configure => {
                configure(config_to_edit(Config::load()))?;
                Ok(ExitCode::SUCCESS)
            }
            Command::City { name } => {
                let config = Config::load()?;
                let service = WeatherService::http(config.url_builder()?);
                let mut screen = WeatherScreen::new(self.locale.unwrap_or(config.locale));

                match search_city(&service, &mut screen, &name.join(" ")).await {
                    Ok(()) => Ok(ExitCode::SUCCESS),
                    Err(_) => Ok(ExitCode::FAILURE),
                }
            }
            Command::Locate { lon, lat } => {
                let config = Config::load()?;
                let service = WeatherService::http(config.url_builder()?);
                let screen = WeatherScreen::new(self.locale.unwrap_or(config.locale));

                let source = match (lon, lat) {
                    (Some(longitude), Some(latitude)) => {
                        locate::Source::Fixed { longitude, latitude }
                    }
                    _ => locate::Source::Stdin,
                };
                locate::run(service, screen, source).await?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

/// One city lookup rendered into the city label. The error, if any, has
/// already been shown as an alert.
async fn search_city(
    service: &WeatherService,
    screen: &mut WeatherScreen,
    city: &str,
) -> Result<(), NetworkError> {
    let ticket = screen.issue(Slot::CitySearch);
    let outcome = service.fetch_by_city(city).await;
    render::show(screen, ticket, &outcome);
    outcome.map(|_| ())
}

/// `configure` is how a broken config file gets repaired, so it starts from
/// defaults instead of failing.
fn config_to_edit(loaded: anyhow::Result<Config>) -> Config {
    loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %format!("{err:#}"), "ignoring unreadable configuration");
        Config::default()
    })
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let mut key_prompt = Text::new("OpenWeatherMap API key:");
    if let Some(current) = config.api_key.as_deref() {
        key_prompt = key_prompt.with_default(current);
    }
    let api_key = key_prompt.prompt().context("Failed to read API key")?;
    if api_key.trim().is_empty() {
        anyhow::bail!("API key must not be empty");
    }
    config.api_key = Some(api_key.trim().to_string());

    config.units = Select::new("Units:", Units::all().to_vec())
        .with_starting_cursor(Units::all().iter().position(|u| *u == config.units).unwrap_or(0))
        .prompt()
        .context("Failed to read unit system")?;

    config.locale = Select::new("Language:", Locale::all().to_vec())
        .with_starting_cursor(Locale::all().iter().position(|l| *l == config.locale).unwrap_or(0))
        .prompt()
        .context("Failed to read language")?;

    let endpoint = Text::new("Endpoint:")
        .with_default(&config.endpoint)
        .prompt()
        .context("Failed to read endpoint")?;
    config.endpoint = endpoint.trim().to_string();

    if config.url_builder()?.city("Paris").is_none() {
        anyhow::bail!("'{}' is not a usable http(s) endpoint", config.endpoint);
    }

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}
