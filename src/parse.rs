//! CSS-like color string detection and parsing.
//!
//! Recognized forms:
//! * `#1177aa`, `#17a`, `#7f` (and the same without `#`)
//! * `rgb(r, g, b)` and `rgba(r, g, b, a)`
//! * `hsl(h, s%, l%)` and `hsla(h, s%, l%, a)`
//!
//! Alpha may be a fraction (`0.5`) or a percentage (`50%`). Anything else,
//! such as named colors, gradients or `url()`, is an opaque string and does
//! not produce a color.

use std::sync::LazyLock;

use log::debug;
use regex::{Captures, Regex};

use crate::color::Color;
use crate::convert;
use crate::types::{Hsl, Rgb};

/// The encoding detected in a color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorType {
    /// Bare or `#`-prefixed hex digits.
    Hex,
    /// `rgb(...)`.
    Rgb,
    /// `rgba(...)`.
    Rgba,
    /// `hsl(...)`.
    Hsl,
    /// `hsla(...)`.
    Hsla,
    /// Any string this crate does not parse.
    Opaque,
}

/// Classifies a color string.
///
/// Hex is tested first because it has no reserved prefix; the function
/// prefixes are then checked longest first so `rgba` never matches as `rgb`.
pub fn color_type(input: &str) -> ColorType {
    let input = input.trim();
    if convert::normalize_hex(input).is_some() {
        ColorType::Hex
    } else if input.starts_with("rgba") {
        ColorType::Rgba
    } else if input.starts_with("rgb") {
        ColorType::Rgb
    } else if input.starts_with("hsla") {
        ColorType::Hsla
    } else if input.starts_with("hsl") {
        ColorType::Hsl
    } else {
        ColorType::Opaque
    }
}

const NUM: &str = r"(-?\d+(?:\.\d+)?)";
const ALPHA: &str = r"(\d*\.?\d+%?)";

fn function_regex(name: &str, args: &[&str]) -> Regex {
    let sep = r"\s*,\s*";
    let pattern = format!(r"^{name}\(\s*{}\s*\)$", args.join(sep));
    Regex::new(&pattern).expect("valid color regex")
}

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| function_regex("rgb", &[NUM, NUM, NUM]));

static RGBA_RE: LazyLock<Regex> =
    LazyLock::new(|| function_regex("rgba", &[NUM, NUM, NUM, ALPHA]));

static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pct = format!("{NUM}%");
    function_regex("hsl", &[NUM, pct.as_str(), pct.as_str()])
});

static HSLA_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pct = format!("{NUM}%");
    function_regex("hsla", &[NUM, pct.as_str(), pct.as_str(), ALPHA])
});

/// Parses an alpha value, either a fraction or a percentage (`10%` is 0.1).
pub fn parse_alpha(input: &str) -> Option<f64> {
    match input.trim().strip_suffix('%') {
        Some(pct) => pct.trim().parse::<f64>().ok().map(|v| v / 100.0),
        None => input.trim().parse().ok(),
    }
}

fn number(caps: &Captures<'_>, i: usize) -> Option<f64> {
    caps.get(i)?.as_str().parse().ok()
}

fn byte(caps: &Captures<'_>, i: usize) -> Option<u8> {
    let value = number(caps, i)?;
    (0.0..=255.0)
        .contains(&value)
        .then(|| convert::round_half_up(value) as u8)
}

fn parse_rgb(caps: &Captures<'_>) -> Option<Rgb> {
    Some(Rgb::new(byte(caps, 1)?, byte(caps, 2)?, byte(caps, 3)?))
}

fn parse_hsl(caps: &Captures<'_>) -> Option<Hsl> {
    Some(Hsl::new(
        convert::wrap_hue(number(caps, 1)? / 360.0),
        number(caps, 2)? / 100.0,
        number(caps, 3)? / 100.0,
    ))
}

/// Parses a CSS-like color string, returning `None` when it is not recognized.
pub fn from_string(input: &str) -> Option<Color> {
    let trimmed = input.trim();
    let kind = color_type(trimmed);

    let color = match kind {
        ColorType::Hex => Color::from_hex(trimmed).ok(),
        ColorType::Rgb => RGB_RE
            .captures(trimmed)
            .and_then(|caps| parse_rgb(&caps))
            .map(Color::from_rgb),
        ColorType::Rgba => RGBA_RE.captures(trimmed).and_then(|caps| {
            Some(Color::from_rgba(parse_rgb(&caps)?, parse_alpha(&caps[4])?))
        }),
        ColorType::Hsl => HSL_RE
            .captures(trimmed)
            .and_then(|caps| parse_hsl(&caps))
            .map(Color::from_hsl),
        ColorType::Hsla => HSLA_RE.captures(trimmed).and_then(|caps| {
            Some(Color::from_hsla(parse_hsl(&caps)?, parse_alpha(&caps[4])?))
        }),
        ColorType::Opaque => None,
    };

    if color.is_none() {
        debug!("no color parsed from {input:?} (detected {kind:?})");
    }
    color
}

/// Input accepted by [`Color::from_string`].
#[derive(Debug, Clone)]
pub enum ColorInput<'a> {
    /// No input.
    None,
    /// A string to parse.
    Str(&'a str),
    /// An existing color, passed through unchanged.
    Color(Color),
}

impl<'a> From<&'a str> for ColorInput<'a> {
    fn from(s: &'a str) -> Self {
        ColorInput::Str(s)
    }
}

impl<'a> From<&'a String> for ColorInput<'a> {
    fn from(s: &'a String) -> Self {
        ColorInput::Str(s)
    }
}

impl<'a> From<Option<&'a str>> for ColorInput<'a> {
    fn from(s: Option<&'a str>) -> Self {
        s.map_or(ColorInput::None, ColorInput::Str)
    }
}

impl From<Color> for ColorInput<'_> {
    fn from(color: Color) -> Self {
        ColorInput::Color(color)
    }
}

impl Color {
    /// Builds a color from a CSS-like string, an optional string, or an existing color.
    ///
    /// Unrecognized strings and `None` give `None`; a `Color` is returned as is.
    pub fn from_string<'a>(input: impl Into<ColorInput<'a>>) -> Option<Color> {
        match input.into() {
            ColorInput::None => None,
            ColorInput::Str(s) => from_string(s),
            ColorInput::Color(color) => Some(color),
        }
    }
}
