//! Location updates.
//!
//! A [`LocationProvider`] owns the source of fixes; consumers register a
//! [`LocationObserver`] while they want updates and unregister when done.
//! Notification is one-way: observers cannot reply or stop the provider.

use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

/// One reported position, as text, exactly as the source produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationFix {
    pub longitude: String,
    pub latitude: String,
    pub received_at: DateTime<Utc>,
}

pub trait LocationObserver: Send + Sync {
    fn on_location_changed(&self, longitude: &str, latitude: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

pub trait LocationProvider: Send + Sync {
    fn start_updates(&self);
    fn stop_updates(&self);
    fn register(&self, observer: Arc<dyn LocationObserver>) -> ObserverId;
    /// Returns `false` if `id` was not registered.
    fn unregister(&self, id: ObserverId) -> bool;
}

/// Provider fed by the caller through [`ManualLocationProvider::report`].
///
/// Fixes reported while updates are stopped are dropped.
#[derive(Default)]
pub struct ManualLocationProvider {
    state: Mutex<ProviderState>,
}

#[derive(Default)]
struct ProviderState {
    active: bool,
    next_id: u64,
    observers: Vec<(ObserverId, Arc<dyn LocationObserver>)>,
}

impl ManualLocationProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.state().active
    }

    /// Deliver a fix to every registered observer. Returns how many were
    /// notified.
    pub fn report(&self, longitude: &str, latitude: &str) -> usize {
        let observers: Vec<_> = {
            let state = self.state();
            if !state.active {
                debug!(longitude, latitude, "location fix ignored, updates stopped");
                return 0;
            }
            state.observers.iter().map(|(_, o)| Arc::clone(o)).collect()
        };

        // Called outside the lock so observers may unregister themselves.
        for observer in &observers {
            observer.on_location_changed(longitude, latitude);
        }
        observers.len()
    }

    fn state(&self) -> MutexGuard<'_, ProviderState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LocationProvider for ManualLocationProvider {
    fn start_updates(&self) {
        self.state().active = true;
        debug!("location updates started");
    }

    fn stop_updates(&self) {
        self.state().active = false;
        debug!("location updates stopped");
    }

    fn register(&self, observer: Arc<dyn LocationObserver>) -> ObserverId {
        let mut state = self.state();
        let id = ObserverId(state.next_id);
        state.next_id += 1;
        state.observers.push((id, observer));
        id
    }

    fn unregister(&self, id: ObserverId) -> bool {
        let mut state = self.state();
        let before = state.observers.len();
        state.observers.retain(|(registered, _)| *registered != id);
        state.observers.len() != before
    }
}

/// Forwards every notification as a [`LocationFix`] into a channel, so the
/// task owning the display handles it on its own schedule.
pub struct ChannelObserver {
    tx: UnboundedSender<LocationFix>,
}

impl ChannelObserver {
    pub fn new(tx: UnboundedSender<LocationFix>) -> Self {
        Self { tx }
    }
}

impl LocationObserver for ChannelObserver {
    fn on_location_changed(&self, longitude: &str, latitude: &str) {
        let fix = LocationFix {
            longitude: longitude.to_string(),
            latitude: latitude.to_string(),
            received_at: Utc::now(),
        };
        if self.tx.send(fix).is_err() {
            debug!("location fix dropped, receiver gone");
        }
    }
}
