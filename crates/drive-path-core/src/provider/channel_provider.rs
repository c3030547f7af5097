use crate::{model::Location, provider::LocationProvider};

use std::sync::{
    Arc, Mutex,
    mpsc::{self, Receiver, Sender},
};

use tracing::{error, trace};

#[derive(Debug, Default)]
struct ProviderState {
    current: Option<Location>,
    heading: Option<f64>,
    subscribers: Vec<Sender<Location>>,
}

/// Provider fed by whoever holds a handle to it.
///
/// Clones share state: publishing through one clone updates the current
/// position and notifies every subscriber of every clone. Dropped
/// subscribers are pruned on the next publish.
#[derive(Debug, Clone, Default)]
pub struct ChannelLocationProvider {
    state: Arc<Mutex<ProviderState>>,
}

impl ChannelLocationProvider {
    /// Creates a provider with no fix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new fix and pushes it to all subscribers.
    pub fn publish(&self, location: Location) {
        let mut state = self.lock();
        state.current = Some(location);
        state
            .subscribers
            .retain(|subscriber| subscriber.send(location).is_ok());

        trace!(
            latitude = location.latitude(),
            longitude = location.longitude(),
            subscribers = state.subscribers.len(),
            "Position published"
        );
    }

    /// Forgets the current fix, as when signal is lost.
    pub fn clear_position(&self) {
        self.lock().current = None;
    }

    /// Sets the compass heading.
    pub fn set_heading(&self, heading: Option<f64>) {
        self.lock().heading = heading;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ProviderState> {
        // The state is still valid after a panicking holder, keep going.
        self.state.lock().unwrap_or_else(|e| {
            error!("Provider state lock poisoned, recovering: {}", e);
            e.into_inner()
        })
    }
}

impl LocationProvider for ChannelLocationProvider {
    fn current_position(&self) -> Option<Location> {
        self.lock().current
    }

    fn subscribe(&self) -> Receiver<Location> {
        let (tx, rx) = mpsc::channel();
        self.lock().subscribers.push(tx);
        rx
    }

    fn heading(&self) -> Option<f64> {
        self.lock().heading
    }
}
