mod color;
mod location;
mod marker;
mod path;
mod pin;

pub use {
    color::Rgba,
    location::{EARTH_RADIUS_KM, Location},
    marker::{MarkerStyle, PinMarker, Tag},
    path::{Path, PathId, PathOrigin, RecordingPins},
    pin::{Pin, PinId},
};
