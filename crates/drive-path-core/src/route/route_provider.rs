use crate::{CoreResult, model::Location};

use std::time::Duration;

/// One candidate route between two locations.
#[derive(Debug, Clone)]
pub struct RouteAlternative {
    /// Road-following trace from origin to destination.
    pub coordinates: Vec<Location>,
    /// Estimated time to drive it.
    pub expected_travel_time: Duration,
}

/// Road-network routing service.
pub trait RouteProvider {
    /// Alternative routes from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Implementations report failures as
    /// [`crate::TrackError::RouteComputationFailure`].
    fn routes(&self, from: &Location, to: &Location) -> CoreResult<Vec<RouteAlternative>>;
}
