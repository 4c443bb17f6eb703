//! `weather locate`: treats argument or stdin coordinates as location updates.

use std::sync::Arc;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};
use weather_core::{
    ChannelObserver, LocationFix, LocationProvider, ManualLocationProvider, NetworkError, Slot,
    WeatherResponse, WeatherScreen, WeatherService, screen::Ticket,
};

use crate::render;

pub enum Source {
    Fixed { longitude: String, latitude: String },
    Stdin,
}

type Outcome = (Ticket, Result<WeatherResponse, NetworkError>);

/// Runs until the source is exhausted and every lookup it triggered has been
/// rendered, then hands back the final screen.
pub async fn run(
    service: WeatherService,
    mut screen: WeatherScreen,
    source: Source,
) -> anyhow::Result<WeatherScreen> {
    let provider = Arc::new(ManualLocationProvider::new());
    let (fix_tx, mut fixes) = mpsc::unbounded_channel::<LocationFix>();
    let observer = provider.register(Arc::new(ChannelObserver::new(fix_tx)));
    provider.start_updates();

    let feeder = {
        let provider = Arc::clone(&provider);
        tokio::spawn(async move {
            let result = feed(&provider, source).await;
            provider.stop_updates();
            provider.unregister(observer);
            result
        })
    };

    let (outcome_tx, mut outcomes) = mpsc::unbounded_channel::<Outcome>();
    let mut outcome_tx = Some(outcome_tx);

    loop {
        tokio::select! {
            fix = fixes.recv(), if outcome_tx.is_some() => match fix {
                Some(fix) => if let Some(tx) = outcome_tx.clone() {
                    let ticket = screen.issue(Slot::CurrentLocation);
                    let service = service.clone();
                    tokio::spawn(async move {
                        let outcome =
                            service.fetch_by_coordinates(&fix.longitude, &fix.latitude).await;
                        let _ = tx.send((ticket, outcome));
                    });
                },
                // Updates stopped; wait for the requests still in flight.
                None => outcome_tx = None,
            },
            outcome = outcomes.recv() => match outcome {
                Some((ticket, outcome)) => render::show(&mut screen, ticket, &outcome),
                None => break,
            },
        }
    }

    feeder.await??;
    Ok(screen)
}

async fn feed(provider: &ManualLocationProvider, source: Source) -> anyhow::Result<()> {
    match source {
        Source::Fixed { longitude, latitude } => {
            provider.report(&longitude, &latitude);
        }
        Source::Stdin => {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                match parse_fix(&line) {
                    Some((longitude, latitude)) => {
                        provider.report(longitude, latitude);
                    }
                    None if line.trim().is_empty() => {}
                    None => {
                        tracing::warn!(line = %line, "expected `<longitude> <latitude>`, skipping")
                    }
                }
            }
        }
    }
    Ok(())
}

/// Accepts `lon lat`, `lon,lat` or `lon, lat`. Values are not checked.
fn parse_fix(line: &str) -> Option<(&str, &str)> {
    let mut parts =
        line.split(|c: char| c == ',' || c.is_whitespace()).filter(|p| !p.is_empty());
    let longitude = parts.next()?;
    let latitude = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((longitude, latitude))
}
