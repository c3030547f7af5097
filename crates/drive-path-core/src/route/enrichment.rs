use crate::{
    model::{Location, Path},
    route::{RouteAlternative, RouteProvider},
};

use tracing::{debug, info, instrument, warn};

/// Fills an empty `coordinates` trace from the waypoints.
///
/// Each consecutive waypoint pair is routed separately and the fastest
/// alternative is kept; segments are concatenated in waypoint order. A
/// failed segment is logged and contributes nothing, so the path may end
/// up with a partial trace. Paths that already have coordinates are left
/// alone. Returns whether the path was touched.
#[instrument(skip_all, fields(path_id = path.id(), path_name = %path.name()))]
pub fn enrich_path<R: RouteProvider + ?Sized>(path: &mut Path, router: &R) -> bool {
    if !path.coordinates().is_empty() {
        return false;
    }

    let mut coordinates: Vec<Location> = Vec::new();

    for (index, pair) in path.waypoints().windows(2).enumerate() {
        let (from, to) = (&pair[0], &pair[1]);

        match router.routes(from, to) {
            Ok(alternatives) => match fastest(alternatives) {
                Some(route) => {
                    debug!(
                        segment = index,
                        point_count = route.coordinates.len(),
                        travel_time_s = route.expected_travel_time.as_secs(),
                        "Segment routed"
                    );
                    coordinates.extend(route.coordinates);
                }
                None => warn!(segment = index, "Router returned no alternatives"),
            },
            Err(e) => {
                warn!(segment = index, error = %e, "Route computation failed, segment skipped");
            }
        }
    }

    info!(point_count = coordinates.len(), "Path enriched");

    path.set_coordinates(coordinates);
    true
}

fn fastest(alternatives: Vec<RouteAlternative>) -> Option<RouteAlternative> {
    alternatives
        .into_iter()
        .min_by_key(|route| route.expected_travel_time)
}
