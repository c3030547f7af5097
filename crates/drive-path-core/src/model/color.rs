use crate::{CoreResult, TrackError};

use std::panic;

use error_location::ErrorLocation;

/// An 8-bit RGBA color parsed from a marker hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
    /// Alpha channel, `0xFF` when the string carried none.
    pub alpha: u8,
}

impl Rgba {
    /// Parses `#RRGGBB` or `#AARRGGBB`.
    ///
    /// The leading `#` is optional, digits are case-insensitive and
    /// surrounding whitespace is ignored.
    #[track_caller]
    pub fn from_hex(hex: &str) -> CoreResult<Self> {
        let caller = panic::Location::caller();
        let invalid = || TrackError::InvalidColor {
            value: hex.to_string(),
            location: ErrorLocation::from(caller),
        };

        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        let [b0, b1, b2, b3] = value.to_be_bytes();

        match digits.len() {
            6 => Ok(Self {
                red: b1,
                green: b2,
                blue: b3,
                alpha: 0xFF,
            }),
            8 => Ok(Self {
                alpha: b0,
                red: b1,
                green: b2,
                blue: b3,
            }),
            _ => Err(invalid()),
        }
    }

    /// Formats as `#RRGGBB`, or `#AARRGGBB` when `with_alpha` is set.
    pub fn to_hex(&self, with_alpha: bool) -> String {
        if with_alpha {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                self.alpha, self.red, self.green, self.blue
            )
        } else {
            format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
        }
    }
}
