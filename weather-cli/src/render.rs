use weather_core::{
    NetworkError, Render, Slot, WeatherResponse, WeatherScreen, screen::Ticket,
};

/// Apply an outcome to the screen and print what changed.
pub fn show(
    screen: &mut WeatherScreen,
    ticket: Ticket,
    outcome: &Result<WeatherResponse, NetworkError>,
) {
    if let Err(err) = outcome {
        tracing::info!(error = %err, "lookup failed");
    }

    match screen.apply(ticket, outcome) {
        Render::Updated(slot) => {
            let label = screen.label(slot);
            let stamp = label
                .updated_at()
                .map(|t| t.with_timezone(&chrono::Local).format("%H:%M:%S").to_string())
                .unwrap_or_default();
            println!("[{} {stamp}]", heading(slot));
            println!("{}", label.text().unwrap_or_default());
            println!();
        }
        Render::NoDescription(slot) => {
            tracing::info!(?slot, "response had no description, display unchanged");
        }
        Render::Superseded(slot) => {
            tracing::debug!(?slot, "older response arrived late, display unchanged");
        }
        Render::Alert(alert) => {
            eprintln!("{}: {}", alert.title, alert.message);
            eprintln!("[{}]", alert.action);
        }
    }
}

fn heading(slot: Slot) -> &'static str {
    match slot {
        Slot::CitySearch => "City",
        Slot::CurrentLocation => "Current location",
    }
}
