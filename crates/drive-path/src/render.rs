//! Plain-text rendering of the recorder's collections.

use drive_path_core::{Location, Path, PathOrigin, Pin, PinMarker};

use std::fmt::Write;

/// Multi-line summary of pins, paths and the recording in progress.
pub fn render_summary(pins: &[Pin], paths: &[Path], recording: Option<&[Location]>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "pins ({}):", pins.len());
    for pin in pins {
        let _ = writeln!(out, "  {}", render_pin(pin));
    }

    let _ = writeln!(out, "paths ({}):", paths.len());
    for path in paths {
        let _ = writeln!(out, "  {}", render_path(path));
    }

    match recording {
        Some(trace) => {
            let _ = write!(out, "recording: {} samples", trace.len());
            if let Some(last) = trace.last() {
                let _ = write!(out, ", last at {}", render_location(last));
            }
        }
        None => {
            let _ = write!(out, "recording: idle");
        }
    }

    out
}

/// One-line pin description.
pub fn render_pin(pin: &Pin) -> String {
    let marker = match pin.marker() {
        PinMarker::Tag(tag) => format!("{} {}", tag.name, tag.color),
        PinMarker::Color(color) => color.clone(),
    };

    format!(
        "#{} {} at {} [{}]",
        pin.id(),
        pin.name(),
        render_location(pin.location()),
        marker
    )
}

/// One-line path description.
pub fn render_path(path: &Path) -> String {
    let origin = match path.origin() {
        PathOrigin::Recorded => "recorded",
        PathOrigin::Planned => "planned",
    };

    format!(
        "#{} {} ({}) {} -> {}, {} waypoints, {} trace points",
        path.id(),
        path.name(),
        origin,
        render_location(path.start()),
        render_location(path.end()),
        path.waypoints().len(),
        path.coordinates().len()
    )
}

/// `(lat, lon)` with five decimals (about a metre).
pub fn render_location(location: &Location) -> String {
    format!("({:.5}, {:.5})", location.latitude(), location.longitude())
}
