use crate::model::Location;

use std::sync::mpsc::Receiver;

/// Source of position fixes.
///
/// Constructed once per process and handed to the tracker explicitly.
pub trait LocationProvider {
    /// Latest fix, or `None` when the provider has none.
    fn current_position(&self) -> Option<Location>;

    /// Subscribes to position updates. Every update published after this
    /// call is delivered on the returned channel in publication order.
    fn subscribe(&self) -> Receiver<Location>;

    /// Compass heading in degrees, if known. Unused by the core.
    fn heading(&self) -> Option<f64> {
        None
    }
}
