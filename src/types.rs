//! Core channel types and errors.

use core::fmt;
use core::ops::Deref;
use serde::{Deserialize, Serialize};

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    /// Red channel.
    pub r: u8,

    /// Green channel.
    pub g: u8,

    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a new RGB triple.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for palette::Srgb<u8> {
    fn from(rgb: Rgb) -> Self {
        palette::Srgb::new(rgb.r, rgb.g, rgb.b)
    }
}

impl From<palette::Srgb<u8>> for Rgb {
    fn from(srgb: palette::Srgb<u8>) -> Self {
        Rgb::new(srgb.red, srgb.green, srgb.blue)
    }
}

/// Hue, saturation and lightness, each in the 0.0-1.0 range.
///
/// Hue is a fraction of the full circle, so `0.5` means 180 degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsl {
    /// Hue as a fraction of 360 degrees.
    pub h: f64,

    /// Saturation.
    pub s: f64,

    /// Lightness.
    pub l: f64,
}

impl Hsl {
    /// Creates a new HSL triple.
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// Luma and chroma components in the scaled YPbPr form used for similarity checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Yuv {
    /// Luma, offset by 16.
    pub y: f64,

    /// Blue-difference chroma, offset by 128.
    pub u: f64,

    /// Red-difference chroma, offset by 128.
    pub v: f64,
}

impl Yuv {
    /// Creates a new YUV triple.
    #[inline]
    pub const fn new(y: f64, u: f64, v: f64) -> Self {
        Self { y, u, v }
    }
}

/// A normalized six digit hex string without a leading `#`.
///
/// Only produced by [`normalize_hex`](crate::convert::normalize_hex) and
/// [`rgb_to_hex`](crate::convert::rgb_to_hex), so every instance holds
/// exactly six ASCII hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hex(heapless::String<6>);

impl Hex {
    /// Wraps an already validated six digit string.
    pub(crate) fn from_digits(digits: heapless::String<6>) -> Self {
        Self(digits)
    }

    /// Returns the hex digits.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for Hex {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color construction and parsing errors.
#[derive(Debug)]
pub enum ColorError {
    /// No hex, RGB, HSL or YUV value was supplied.
    NoRepresentation,

    /// Hex string could not be normalized.
    InvalidHex(String),

    /// String is not a recognized color format.
    Unparseable(String),

    /// JSON text was malformed.
    Json(serde_json::Error),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::NoRepresentation => {
                write!(f, "color needs a hex, rgb, hsl or yuv value")
            }
            ColorError::InvalidHex(input) => {
                write!(f, "invalid hex value: {input:?}")
            }
            ColorError::Unparseable(input) => {
                write!(f, "unrecognized color string: {input:?}")
            }
            ColorError::Json(err) => {
                write!(f, "invalid color json: {err}")
            }
        }
    }
}

impl std::error::Error for ColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ColorError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ColorError {
    fn from(err: serde_json::Error) -> Self {
        ColorError::Json(err)
    }
}
