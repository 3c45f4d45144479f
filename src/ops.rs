//! Derived color operations: blending, contrast, similarity and classifiers.

use crate::color::Color;
use crate::convert::{self, round_half_up};
use crate::types::Rgb;

/// Perceived brightness at or below which a color counts as dark.
pub const DARK_THRESHOLD: f64 = 120.0;

/// Hue bands (inclusive) considered red. Red wraps around 0.
pub const REDISH_HUE_BANDS: [(f64, f64); 2] = [(0.0, 0.072), (0.933, 1.0)];

/// Hue band (inclusive) considered green.
pub const GREENISH_HUE_BAND: (f64, f64) = (0.23, 0.469);

/// Lightness range (start inclusive, end exclusive) in which hue classifiers apply.
pub const CLASSIFIER_LIGHTNESS: (f64, f64) = (0.2, 0.96);

/// Saturation a color must exceed for hue classifiers to apply.
pub const CLASSIFIER_MIN_SATURATION: f64 = 0.201;

/// Blends two colors SCSS style.
///
/// `weight` is a percentage: 100 yields `a`, 0 yields `b`. Each RGB byte is
/// blended and floored, so black and white at 50 give 127. Alpha is blended
/// the same way without flooring.
pub fn mix(a: &Color, b: &Color, weight: f64) -> Color {
    let factor = weight / 100.0;
    let ca = a.rgb();
    let cb = b.rgb();
    let blend = |va: u8, vb: u8| {
        let (va, vb) = (f64::from(va), f64::from(vb));
        (vb + (va - vb) * factor).floor() as u8
    };

    let rgb = Rgb::new(blend(ca.r, cb.r), blend(ca.g, cb.g), blend(ca.b, cb.b));
    let alpha = b.alpha() + (a.alpha() - b.alpha()) * factor;
    Color::from_normalized_hex(convert::rgb_to_hex(rgb), alpha)
}

/// Shades or blends a color on its packed 24-bit value.
///
/// `p` is a fraction in -1.0..=1.0. Negative values move `c0` towards black,
/// positive values towards white, or towards `c1` when one is given. Alpha is
/// ignored; the result is opaque.
pub fn shade_blend(p: f64, c0: &Color, c1: Option<&Color>) -> Color {
    let p = p.clamp(-1.0, 1.0);
    let n = p.abs();

    let from = pack(c0.rgb());
    let to = match c1 {
        Some(c1) => pack(c1.rgb()),
        None if p < 0.0 => 0x000000,
        None => 0xffffff,
    };

    let channel = |shift: u32| {
        let f = f64::from((from >> shift) & 0xff);
        let t = f64::from((to >> shift) & 0xff);
        (round_half_up((t - f) * n) + f) as u32 & 0xff
    };

    let packed = channel(16) << 16 | channel(8) << 8 | channel(0);
    Color::from_rgb(unpack(packed))
}

fn pack(rgb: Rgb) -> u32 {
    u32::from(rgb.r) << 16 | u32::from(rgb.g) << 8 | u32::from(rgb.b)
}

fn unpack(packed: u32) -> Rgb {
    Rgb::new((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
}

/// BT.709 luma of the RGB bytes, 0.0-255.0. Alpha is ignored.
pub fn perceived_brightness(color: &Color) -> f64 {
    let Rgb { r, g, b } = color.rgb();
    0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b)
}

/// Contrast ratio `(brighter + 0.05) / (darker + 0.05)` using perceived brightness.
///
/// Equal colors give exactly 1.
pub fn contrast(c0: &Color, c1: &Color) -> f64 {
    let l0 = perceived_brightness(c0);
    let l1 = perceived_brightness(c1);
    (l0.max(l1) + 0.05) / (l0.min(l1) + 0.05)
}

/// Whether every YUV channel differs by at most `1 - accuracy`.
pub fn are_similar(c1: &Color, c2: &Color, accuracy: f64) -> bool {
    let threshold = 1.0 - accuracy;
    let a = c1.yuv();
    let b = c2.yuv();

    (a.y - b.y).abs() <= threshold
        && (a.u - b.u).abs() <= threshold
        && (a.v - b.v).abs() <= threshold
}

fn in_hue_classifier_range(color: &Color, bands: &[(f64, f64)]) -> bool {
    let hsl = color.hsl();
    let (light_min, light_max) = CLASSIFIER_LIGHTNESS;

    hsl.s > CLASSIFIER_MIN_SATURATION
        && hsl.l >= light_min
        && hsl.l < light_max
        && bands.iter().any(|&(lo, hi)| hsl.h >= lo && hsl.h <= hi)
}

impl Color {
    /// Blends with `other`; `weight` 100 keeps `self`.
    #[must_use]
    pub fn mix_with(&self, other: &Color, weight: f64) -> Color {
        mix(self, other, weight)
    }

    /// See [`shade_blend`].
    #[must_use]
    pub fn shade_blend(&self, p: f64, target: Option<&Color>) -> Color {
        shade_blend(p, self, target)
    }

    /// See [`perceived_brightness`].
    pub fn perceived_brightness(&self) -> f64 {
        perceived_brightness(self)
    }

    /// See [`contrast`].
    pub fn contrast_to(&self, other: &Color) -> f64 {
        contrast(self, other)
    }

    /// See [`are_similar`].
    pub fn is_similar_to(&self, other: &Color, accuracy: f64) -> bool {
        are_similar(self, other, accuracy)
    }

    /// Perceived brightness at or below [`DARK_THRESHOLD`].
    pub fn is_dark(&self) -> bool {
        self.perceived_brightness() <= DARK_THRESHOLD
    }

    /// Opposite of [`is_dark`](Self::is_dark).
    pub fn is_light(&self) -> bool {
        !self.is_dark()
    }

    /// Saturated, mid-lightness color with a red hue.
    pub fn is_redish(&self) -> bool {
        in_hue_classifier_range(self, &REDISH_HUE_BANDS)
    }

    /// Saturated, mid-lightness color with a green hue.
    pub fn is_greenish(&self) -> bool {
        in_hue_classifier_range(self, &[GREENISH_HUE_BAND])
    }

    /// Full lightness with saturation exactly 0 or 1.
    pub fn is_white(&self) -> bool {
        let hsl = self.hsl();
        (hsl.s == 1.0 || hsl.s == 0.0) && hsl.l == 1.0
    }

    /// Zero lightness with saturation exactly 0 or 1.
    pub fn is_black(&self) -> bool {
        let hsl = self.hsl();
        (hsl.s == 1.0 || hsl.s == 0.0) && hsl.l == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_and_unpack_are_inverse() {
        let rgb = Rgb::new(0x12, 0x34, 0x56);
        assert_eq!(pack(rgb), 0x123456);
        assert_eq!(unpack(pack(rgb)), rgb);
    }
}
