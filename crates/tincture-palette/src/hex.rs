//! Hex color parsing and RGB channel arithmetic.
//!
//! Base colors arrive as `#RRGGBB` strings from stylesheets, storage, or
//! server pushes. [`HexColor`] validates that form and keeps the original
//! text around, since shade 500 reproduces the input verbatim (including its
//! letter case). All derived shades are formatted through [`Rgb`], which
//! always renders lowercase.
//!
//! # Example
//!
//! ```rust
//! use tincture_palette::{HexColor, Rgb};
//!
//! let base: HexColor = "#FF5500".parse().unwrap();
//! assert_eq!(base.rgb(), Rgb(255, 85, 0));
//! assert_eq!(base.as_str(), "#FF5500");
//! assert_eq!(base.rgb().lighten(0.85).to_string(), "#ffe6d9");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};

/// An RGB color triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Round half away from zero and clamp into a channel.
fn channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

impl Rgb {
    /// Moves every channel toward 255 by `amount` (0.0–1.0) of the remaining distance.
    ///
    /// Per channel: `round(c + (255 - c) * amount)`.
    pub fn lighten(self, amount: f64) -> Rgb {
        let light = |c: u8| {
            let c = c as f64;
            channel(c + (255.0 - c) * amount)
        };
        Rgb(light(self.0), light(self.1), light(self.2))
    }

    /// Scales every channel toward 0 by `amount` (0.0–1.0).
    ///
    /// Per channel: `round(c * (1 - amount))`.
    pub fn darken(self, amount: f64) -> Rgb {
        let dark = |c: u8| channel(c as f64 * (1.0 - amount));
        Rgb(dark(self.0), dark(self.1), dark(self.2))
    }

    /// Returns the channels as a tuple.
    pub fn channels(self) -> (u8, u8, u8) {
        (self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        HexColor {
            text: rgb.to_string(),
            rgb,
        }
    }
}

/// A validated `#RRGGBB` color.
///
/// Hex digits may be upper or lower case. The three-digit shorthand (`#abc`)
/// and named colors are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    text: String,
    rgb: Rgb,
}

impl HexColor {
    /// Parses a `#RRGGBB` string.
    pub fn parse(value: &str) -> Result<Self> {
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(value.to_string()))?;

        if let Some(found) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit {
                value: value.to_string(),
                found,
            });
        }

        // Only ASCII hex digits remain, so byte length equals digit count.
        if digits.len() != 6 {
            return Err(ColorError::InvalidLength {
                value: value.to_string(),
                digits: digits.len(),
            });
        }

        let pair = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::InvalidLength {
                value: value.to_string(),
                digits: digits.len(),
            })
        };

        Ok(HexColor {
            text: value.to_string(),
            rgb: Rgb(pair(0..2)?, pair(2..4)?, pair(4..6)?),
        })
    }

    /// Returns `true` if `value` is a well-formed `#RRGGBB` color.
    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_ok()
    }

    /// The text this color was parsed from.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The decoded channels.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.text
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn test_parse_lowercase() {
        let c = HexColor::parse("#ff6b35").unwrap();
        assert_eq!(c.rgb(), Rgb(255, 107, 53));
        assert_eq!(c.as_str(), "#ff6b35");
    }

    #[test]
    fn test_parse_uppercase_keeps_text() {
        let c = HexColor::parse("#FF6B35").unwrap();
        assert_eq!(c.rgb(), Rgb(255, 107, 53));
        assert_eq!(c.to_string(), "#FF6B35");
    }

    #[test]
    fn test_parse_extremes() {
        assert_eq!(HexColor::parse("#000000").unwrap().rgb(), Rgb(0, 0, 0));
        assert_eq!(
            HexColor::parse("#ffffff").unwrap().rgb(),
            Rgb(255, 255, 255)
        );
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(
            HexColor::parse(""),
            Err(ColorError::MissingHash(String::new()))
        );
    }

    #[test]
    fn test_parse_rejects_named() {
        assert!(matches!(
            HexColor::parse("red"),
            Err(ColorError::MissingHash(_))
        ));
    }

    #[test]
    fn test_parse_rejects_short_form() {
        assert!(matches!(
            HexColor::parse("#ABC"),
            Err(ColorError::InvalidLength { digits: 3, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_long_form() {
        assert!(matches!(
            HexColor::parse("#ff550000"),
            Err(ColorError::InvalidLength { digits: 8, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_bad_digit() {
        assert!(matches!(
            HexColor::parse("#gggggg"),
            Err(ColorError::InvalidDigit { found: 'g', .. })
        ));
        assert!(matches!(
            HexColor::parse("#ff55é0"),
            Err(ColorError::InvalidDigit { found: 'é', .. })
        ));
    }

    #[test]
    fn test_parse_rejects_whitespace() {
        assert!(HexColor::parse(" #ff5500").is_err());
        assert!(HexColor::parse("#ff5500 ").is_err());
    }

    #[test]
    fn test_from_str() {
        let c: HexColor = "#0a0b0c".parse().unwrap();
        assert_eq!(c.rgb(), Rgb(10, 11, 12));
    }

    #[test]
    fn test_serde_round_trip() {
        let c = HexColor::parse("#FF5500").unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#FF5500\"");
        let back: HexColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
        assert!(serde_json::from_str::<HexColor>("\"#ABC\"").is_err());
    }

    // =========================================================================
    // Channel arithmetic
    // =========================================================================

    #[test]
    fn test_display_is_lowercase_padded() {
        assert_eq!(Rgb(1, 2, 255).to_string(), "#0102ff");
    }

    #[test]
    fn test_lighten_reference_value() {
        // 85 + 170 * 0.85 = 229.5 rounds up, 255 * 0.85 = 216.75
        assert_eq!(Rgb(255, 85, 0).lighten(0.85), Rgb(255, 230, 217));
    }

    #[test]
    fn test_darken_reference_value() {
        // 255 * 0.15 = 38.25, 85 * 0.15 = 12.75
        assert_eq!(Rgb(255, 85, 0).darken(0.85), Rgb(38, 13, 0));
    }

    #[test]
    fn test_lighten_white_is_white() {
        assert_eq!(Rgb(255, 255, 255).lighten(0.5), Rgb(255, 255, 255));
    }

    #[test]
    fn test_darken_black_is_black() {
        assert_eq!(Rgb(0, 0, 0).darken(0.5), Rgb(0, 0, 0));
    }

    #[test]
    fn test_out_of_range_amounts_clamp() {
        assert_eq!(Rgb(100, 100, 100).lighten(2.0), Rgb(255, 255, 255));
        assert_eq!(Rgb(100, 100, 100).darken(2.0), Rgb(0, 0, 0));
    }

    #[test]
    fn test_rgb_into_hex_color() {
        let c: HexColor = Rgb(255, 0, 16).into();
        assert_eq!(c.as_str(), "#ff0010");
    }
}
