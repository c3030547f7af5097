use crate::{CoreResult, model::Rgba};

use serde::{Deserialize, Serialize};

const START_TAG_ID: u32 = 4;
const END_TAG_ID: u32 = 5;
const START_COLOR: &str = "#34C759";
const END_COLOR: &str = "#FF3B30";

/// A semantic pin category with an icon and a color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    /// Tag identifier; equality is by id.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Icon (symbol name) shown inside the pin.
    pub icon: String,
    /// Hex color of the pin background.
    pub color: String,
}

impl Tag {
    /// Marker for the first point of a recording.
    pub fn start() -> Self {
        Self {
            id: START_TAG_ID,
            name: "Start".to_string(),
            icon: "record.circle".to_string(),
            color: START_COLOR.to_string(),
        }
    }

    /// Marker for the last point of a recording.
    pub fn end() -> Self {
        Self {
            id: END_TAG_ID,
            name: "End".to_string(),
            icon: "flag.pattern.checkered.circle.fill".to_string(),
            color: END_COLOR.to_string(),
        }
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tag {}

/// How a pin is decorated: a full tag, or a bare color.
///
/// The two shapes are alternatives; a pin carries exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinMarker {
    /// Semantic tag with icon and color.
    Tag(Tag),
    /// Hex color string only.
    Color(String),
}

impl PinMarker {
    /// The marker's hex color string.
    pub fn color(&self) -> &str {
        match self {
            PinMarker::Tag(tag) => &tag.color,
            PinMarker::Color(color) => color,
        }
    }

    /// Parses the marker's color.
    #[track_caller]
    pub fn rgba(&self) -> CoreResult<Rgba> {
        Rgba::from_hex(self.color())
    }
}

/// Which marker shape recording pins are created with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerStyle {
    /// Use [`Tag::start`] / [`Tag::end`].
    #[default]
    Tag,
    /// Use the tags' colors only.
    Color,
}

impl MarkerStyle {
    /// Marker for a recording's start pin.
    pub fn start_marker(self) -> PinMarker {
        match self {
            MarkerStyle::Tag => PinMarker::Tag(Tag::start()),
            MarkerStyle::Color => PinMarker::Color(START_COLOR.to_string()),
        }
    }

    /// Marker for a recording's end pin.
    pub fn end_marker(self) -> PinMarker {
        match self {
            MarkerStyle::Tag => PinMarker::Tag(Tag::end()),
            MarkerStyle::Color => PinMarker::Color(END_COLOR.to_string()),
        }
    }
}
