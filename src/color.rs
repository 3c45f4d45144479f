//! The [`Color`] value type.
//!
//! A `Color` is built from exactly one representation (hex, RGB, HSL or YUV)
//! and computes the others on first access. Computed representations are
//! stored in [`OnceLock`] cells, so every conversion runs at most once per
//! instance and concurrent first reads from several threads are safe.
//!
//! All transformations return a new `Color`; only the alpha channel can be
//! changed in place.

use core::fmt;
use core::str::FromStr;
use std::sync::OnceLock;

use log::trace;
use palette::Srgb;
use rand::Rng;

use crate::convert;
use crate::types::{ColorError, Hex, Hsl, Rgb, Yuv};

/// The representation a color was constructed from.
#[derive(Debug, Clone)]
enum Source {
    Hex(Hex),
    Rgb(Rgb),
    Hsl(Hsl),
    Yuv(Yuv),
}

/// A color with lazily computed hex, RGB, HSL and YUV views plus an alpha channel.
///
/// # Examples
///
/// ```
/// use hue_shift::Color;
///
/// let color = Color::from_hex("#17a").unwrap();
/// assert_eq!(color.css_hex(), "#1177aa");
/// assert_eq!(color.css_rgba(), "rgba(17, 119, 170, 1)");
///
/// let darker = color.darken(10.0).saturate(5.0).with_alpha(0.5);
/// assert_eq!(darker.alpha(), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct Color {
    source: Source,
    hex: OnceLock<Hex>,
    rgb: OnceLock<Rgb>,
    hsl: OnceLock<Hsl>,
    yuv: OnceLock<Yuv>,
    alpha: f64,
}

impl Color {
    fn with_source(source: Source, alpha: f64) -> Self {
        Self {
            source,
            hex: OnceLock::new(),
            rgb: OnceLock::new(),
            hsl: OnceLock::new(),
            yuv: OnceLock::new(),
            alpha,
        }
    }

    /// Creates a new color builder.
    pub fn builder() -> ColorBuilder {
        ColorBuilder::new()
    }

    /// Creates a color from a hex string such as `#1177aa`, `17a` or `#7f`.
    ///
    /// # Errors
    /// Returns [`ColorError::InvalidHex`] if the string cannot be normalized.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let normalized =
            convert::normalize_hex(hex).ok_or_else(|| ColorError::InvalidHex(hex.to_owned()))?;
        Ok(Self::from_normalized_hex(normalized, 1.0))
    }

    pub(crate) fn from_normalized_hex(hex: Hex, alpha: f64) -> Self {
        Self::with_source(Source::Hex(hex), alpha)
    }

    /// Creates an opaque color from RGB bytes.
    #[inline]
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self::from_rgba(rgb, 1.0)
    }

    /// Creates a color from RGB bytes and alpha.
    #[inline]
    pub fn from_rgba(rgb: Rgb, alpha: f64) -> Self {
        Self::with_source(Source::Rgb(rgb), alpha)
    }

    /// Creates an opaque color from HSL.
    #[inline]
    pub fn from_hsl(hsl: Hsl) -> Self {
        Self::from_hsla(hsl, 1.0)
    }

    /// Creates a color from HSL and alpha.
    #[inline]
    pub fn from_hsla(hsl: Hsl, alpha: f64) -> Self {
        Self::with_source(Source::Hsl(hsl), alpha)
    }

    /// Creates an opaque color from YUV.
    #[inline]
    pub fn from_yuv(yuv: Yuv) -> Self {
        Self::from_yuva(yuv, 1.0)
    }

    /// Creates a color from YUV and alpha.
    #[inline]
    pub fn from_yuva(yuv: Yuv, alpha: f64) -> Self {
        Self::with_source(Source::Yuv(yuv), alpha)
    }

    /// Opaque black.
    pub fn black() -> Self {
        Self::from_rgb(Rgb::new(0, 0, 0))
    }

    /// Opaque white.
    pub fn white() -> Self {
        Self::from_rgb(Rgb::new(255, 255, 255))
    }

    /// Creates an opaque color with each RGB byte sampled uniformly.
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// Like [`random`](Self::random), drawing from the given generator.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_rgb(Rgb::new(rng.r#gen(), rng.r#gen(), rng.r#gen()))
    }

    /// Returns the normalized six digit hex string, without `#`.
    pub fn hex(&self) -> &str {
        match &self.source {
            Source::Hex(hex) => hex.as_str(),
            _ => self
                .hex
                .get_or_init(|| {
                    let hex = convert::rgb_to_hex(self.rgb());
                    trace!("computed hex {hex} from rgb");
                    hex
                })
                .as_str(),
        }
    }

    /// Returns the RGB bytes.
    pub fn rgb(&self) -> Rgb {
        let computed = |rgb: Rgb| {
            trace!("computed rgb {rgb:?} from {}", self.source_name());
            rgb
        };

        match &self.source {
            Source::Rgb(rgb) => *rgb,
            Source::Hex(hex) => *self.rgb.get_or_init(|| computed(convert::hex_to_rgb(hex))),
            Source::Hsl(hsl) => *self.rgb.get_or_init(|| computed(convert::hsl_to_rgb(*hsl))),
            Source::Yuv(yuv) => *self.rgb.get_or_init(|| computed(convert::yuv_to_rgb(*yuv))),
        }
    }

    /// Returns hue, saturation and lightness.
    pub fn hsl(&self) -> Hsl {
        match &self.source {
            Source::Hsl(hsl) => *hsl,
            _ => *self.hsl.get_or_init(|| {
                let hsl = convert::rgb_to_hsl(self.rgb());
                trace!("computed hsl {hsl:?} from rgb");
                hsl
            }),
        }
    }

    /// Returns the scaled YUV components.
    pub fn yuv(&self) -> Yuv {
        match &self.source {
            Source::Yuv(yuv) => *yuv,
            _ => *self.yuv.get_or_init(|| {
                let yuv = convert::rgb_to_yuv(self.rgb());
                trace!("computed yuv {yuv:?} from rgb");
                yuv
            }),
        }
    }

    fn source_name(&self) -> &'static str {
        match self.source {
            Source::Hex(_) => "hex",
            Source::Rgb(_) => "rgb",
            Source::Hsl(_) => "hsl",
            Source::Yuv(_) => "yuv",
        }
    }

    pub(crate) fn has_hex(&self) -> bool {
        matches!(self.source, Source::Hex(_)) || self.hex.get().is_some()
    }

    pub(crate) fn has_rgb(&self) -> bool {
        matches!(self.source, Source::Rgb(_)) || self.rgb.get().is_some()
    }

    pub(crate) fn has_hsl(&self) -> bool {
        matches!(self.source, Source::Hsl(_)) || self.hsl.get().is_some()
    }

    /// Returns the alpha channel, as stored.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Sets the alpha channel. The value is not clamped.
    #[inline]
    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }

    /// Returns a copy with the given alpha.
    #[must_use]
    pub fn with_alpha(&self, alpha: f64) -> Self {
        let mut color = self.clone();
        color.alpha = alpha;
        color
    }

    /// Returns a color with the same saturation and lightness and the given hue.
    #[must_use]
    pub fn with_hue(&self, h: f64) -> Self {
        Self::from_hsla(Hsl { h, ..self.hsl() }, self.alpha)
    }

    /// Returns a color with the same hue and lightness and the given saturation.
    #[must_use]
    pub fn with_saturation(&self, s: f64) -> Self {
        Self::from_hsla(Hsl { s, ..self.hsl() }, self.alpha)
    }

    /// Returns a color with the same hue and saturation and the given lightness.
    #[must_use]
    pub fn with_lightness(&self, l: f64) -> Self {
        Self::from_hsla(Hsl { l, ..self.hsl() }, self.alpha)
    }

    /// Lowers lightness by `percentage` points, clamped to black.
    #[must_use]
    pub fn darken(&self, percentage: f64) -> Self {
        let hsl = self.hsl();
        self.with_lightness((hsl.l - percentage / 100.0).clamp(0.0, 1.0))
    }

    /// Raises lightness by `percentage` points, clamped to white.
    #[must_use]
    pub fn lighten(&self, percentage: f64) -> Self {
        self.darken(-percentage)
    }

    /// Raises saturation by `percentage` points, clamped to 1.
    #[must_use]
    pub fn saturate(&self, percentage: f64) -> Self {
        let hsl = self.hsl();
        self.with_saturation((hsl.s + percentage / 100.0).clamp(0.0, 1.0))
    }

    /// Lowers saturation by `percentage` points, clamped to 0.
    #[must_use]
    pub fn desaturate(&self, percentage: f64) -> Self {
        self.saturate(-percentage)
    }

    /// Rotates the hue by `amount` (a fraction of the full circle), wrapping into `[0, 1)`.
    #[must_use]
    pub fn shift_hue(&self, amount: f64) -> Self {
        self.with_hue(convert::wrap_hue(self.hsl().h + amount))
    }

    /// Returns `#RRGGBB`.
    pub fn css_hex(&self) -> String {
        format!("#{}", self.hex())
    }

    /// Returns `rgb(R, G, B)`.
    pub fn css_rgb(&self) -> String {
        let Rgb { r, g, b } = self.rgb();
        format!("rgb({r}, {g}, {b})")
    }

    /// Returns `rgba(R, G, B, A)`.
    pub fn css_rgba(&self) -> String {
        let Rgb { r, g, b } = self.rgb();
        format!("rgba({r}, {g}, {b}, {})", self.alpha)
    }

    /// Returns `hsl(H, S%, L%)` with hue in degrees.
    pub fn css_hsl(&self) -> String {
        let (h, s, l) = self.css_hsl_parts();
        format!("hsl({h}, {s}%, {l}%)")
    }

    /// Returns `hsla(H, S%, L%, A)` with hue in degrees.
    pub fn css_hsla(&self) -> String {
        let (h, s, l) = self.css_hsl_parts();
        format!("hsla({h}, {s}%, {l}%, {})", self.alpha)
    }

    fn css_hsl_parts(&self) -> (f64, f64, f64) {
        let hsl = self.hsl();
        (
            round4(hsl.h * 360.0),
            round4(hsl.s * 100.0),
            round4(hsl.l * 100.0),
        )
    }

    /// Renders the representation that is already available, preferring
    /// HSL, then RGB, then hex. Computes HSL if none of them is.
    pub fn to_css_string(&self) -> String {
        if self.has_hsl() {
            self.css_hsla()
        } else if self.has_rgb() {
            self.css_rgba()
        } else if self.has_hex() {
            self.css_hex()
        } else {
            self.css_hsla()
        }
    }

    /// Returns the color as `palette::Srgb` with components in 0.0-1.0.
    pub fn to_srgb(&self) -> Srgb {
        palette::Srgb::<u8>::from(self.rgb()).into_format()
    }
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

/// Two colors are equal when their RGB bytes and alpha match.
impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.rgb() == other.rgb() && self.alpha == other.alpha
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_string())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::from_string(s).ok_or_else(|| ColorError::Unparseable(s.to_owned()))
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Self::from_hsl(hsl)
    }
}

impl From<Yuv> for Color {
    fn from(yuv: Yuv) -> Self {
        Self::from_yuv(yuv)
    }
}

#[derive(Debug, Clone)]
enum PendingSource {
    Hex(String),
    Rgb(Rgb),
    Hsl(Hsl),
    Yuv(Yuv),
}

/// Builder for [`Color`].
///
/// Exactly one representation ends up backing the color; setting a second
/// one replaces the first.
#[derive(Debug, Clone)]
pub struct ColorBuilder {
    source: Option<PendingSource>,
    alpha: f64,
}

impl ColorBuilder {
    fn new() -> Self {
        Self {
            source: None,
            alpha: 1.0,
        }
    }

    /// Backs the color with a hex string. Validated in [`build`](Self::build).
    pub fn hex(mut self, hex: impl Into<String>) -> Self {
        self.source = Some(PendingSource::Hex(hex.into()));
        self
    }

    /// Backs the color with RGB bytes.
    pub fn rgb(mut self, rgb: Rgb) -> Self {
        self.source = Some(PendingSource::Rgb(rgb));
        self
    }

    /// Backs the color with HSL.
    pub fn hsl(mut self, hsl: Hsl) -> Self {
        self.source = Some(PendingSource::Hsl(hsl));
        self
    }

    /// Backs the color with YUV.
    pub fn yuv(mut self, yuv: Yuv) -> Self {
        self.source = Some(PendingSource::Yuv(yuv));
        self
    }

    /// Sets alpha. Defaults to 1.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Builds the color.
    ///
    /// # Errors
    /// * [`ColorError::NoRepresentation`] - no representation was set
    /// * [`ColorError::InvalidHex`] - the hex string does not normalize
    pub fn build(self) -> Result<Color, ColorError> {
        let source = match self.source.ok_or(ColorError::NoRepresentation)? {
            PendingSource::Hex(hex) => Source::Hex(
                convert::normalize_hex(&hex).ok_or(ColorError::InvalidHex(hex))?,
            ),
            PendingSource::Rgb(rgb) => Source::Rgb(rgb),
            PendingSource::Hsl(hsl) => Source::Hsl(hsl),
            PendingSource::Yuv(yuv) => Source::Yuv(yuv),
        };
        Ok(Color::with_source(source, self.alpha))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_populate_cells_once() {
        let color = Color::from_hsl(Hsl::new(0.5, 0.5, 0.5));
        assert!(color.rgb.get().is_none());
        assert!(color.hex.get().is_none());

        let hex = color.hex().to_owned();
        assert!(color.rgb.get().is_some());
        assert_eq!(color.hex.get().map(|h| h.as_str()), Some(hex.as_str()));
        assert!(color.yuv.get().is_none());
    }

    #[test]
    fn source_representation_never_fills_its_own_cell() {
        let color = Color::from_rgb(Rgb::new(1, 2, 3));
        let _ = color.rgb();
        assert!(color.rgb.get().is_none());
    }

    #[test]
    fn yuv_source_resolves_rgb_directly() {
        let color = Color::from_yuv(convert::rgb_to_yuv(Rgb::new(255, 255, 255)));
        assert_eq!(color.rgb(), Rgb::new(255, 255, 255));
        assert!(color.hsl.get().is_none());
    }

    #[test]
    fn round4_keeps_four_decimals() {
        assert_eq!(round4(12.345_678), 12.3457);
        assert_eq!(round4(50.0), 50.0);
    }
}
