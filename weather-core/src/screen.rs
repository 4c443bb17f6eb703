//! Display state for the two lookup results and error alerts.
//!
//! Outcomes may arrive in any order when requests overlap. Every request
//! takes a [`Ticket`] before it starts; a label only accepts text from a
//! ticket newer than the one it last rendered.

use chrono::{DateTime, Utc};

use crate::{
    error::NetworkError,
    locale::{Locale, Message},
    model::WeatherResponse,
};

/// Which label a request renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    CitySearch,
    CurrentLocation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    slot: Slot,
    seq: u64,
}

impl Ticket {
    pub fn slot(&self) -> Slot {
        self.slot
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Label {
    text: Option<String>,
    updated_at: Option<DateTime<Utc>>,
    rendered_seq: u64,
}

impl Label {
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

/// Modal error with a single dismiss action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub action: String,
}

impl Alert {
    pub fn for_error(err: &NetworkError, locale: Locale) -> Self {
        Self {
            title: locale.text(Message::ErrorTitle).to_string(),
            message: err.title(locale).to_string(),
            action: locale.text(Message::Acknowledge).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Render {
    /// The slot's label now shows new text.
    Updated(Slot),
    /// Success without a description; the label was left as it was.
    NoDescription(Slot),
    /// A newer request already rendered into this slot.
    Superseded(Slot),
    Alert(Alert),
}

#[derive(Debug, Clone)]
pub struct WeatherScreen {
    locale: Locale,
    city: Label,
    location: Label,
    next_seq: u64,
}

impl WeatherScreen {
    pub fn new(locale: Locale) -> Self {
        Self { locale, city: Label::default(), location: Label::default(), next_seq: 1 }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn label(&self, slot: Slot) -> &Label {
        match slot {
            Slot::CitySearch => &self.city,
            Slot::CurrentLocation => &self.location,
        }
    }

    /// Take a ticket for a request that is about to start.
    pub fn issue(&mut self, slot: Slot) -> Ticket {
        let seq = self.next_seq;
        self.next_seq += 1;
        Ticket { slot, seq }
    }

    /// Apply a finished request. Errors are always surfaced, even for
    /// superseded tickets.
    pub fn apply(
        &mut self,
        ticket: Ticket,
        outcome: &Result<WeatherResponse, NetworkError>,
    ) -> Render {
        let response = match outcome {
            Ok(response) => response,
            Err(err) => return Render::Alert(Alert::for_error(err, self.locale)),
        };

        let label = match ticket.slot {
            Slot::CitySearch => &mut self.city,
            Slot::CurrentLocation => &mut self.location,
        };

        if ticket.seq < label.rendered_seq {
            return Render::Superseded(ticket.slot);
        }

        match response.summary() {
            Some(text) => {
                label.text = Some(text);
                label.updated_at = Some(Utc::now());
                label.rendered_seq = ticket.seq;
                Render::Updated(ticket.slot)
            }
            None => Render::NoDescription(ticket.slot),
        }
    }
}
