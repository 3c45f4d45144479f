//! Pure conversions between hex, RGB, HSL and YUV.
//!
//! Every function here is deterministic and side-effect free. [`Color`](crate::Color)
//! calls into these lazily and memoizes the results.

use core::fmt::Write;

use crate::types::{Hex, Hsl, Rgb, Yuv};

/// Rounds half-way cases up, towards positive infinity.
///
/// `f64::round` rounds half-way cases away from zero, which differs for
/// negative inputs (`-0.5` becomes `-1` instead of `0`).
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Wraps a hue into `[0, 1)`.
///
/// `rem_euclid` alone can return exactly `1.0` for tiny negative inputs,
/// since `-1e-17 + 1.0` rounds to `1.0`.
#[inline]
pub fn wrap_hue(h: f64) -> f64 {
    let h = h.rem_euclid(1.0);
    if h >= 1.0 { 0.0 } else { h }
}

#[inline]
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Normalizes a hex color string to six digits.
///
/// Accepts an optional leading `#` followed by 2, 3 or 6 hex digits:
/// * `ab` repeats to `ababab`
/// * `17a` doubles each digit to `1177aa`
/// * `1177aa` passes through unchanged
///
/// Returns `None` for any other length or for non-hex characters.
pub fn normalize_hex(input: &str) -> Option<Hex> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.len() < 2 || !digits.bytes().all(|c| nibble(c).is_some()) {
        return None;
    }

    let mut out = heapless::String::<6>::new();
    match digits.len() {
        2 => {
            for _ in 0..3 {
                out.push_str(digits).ok()?;
            }
        }
        3 => {
            for c in digits.chars() {
                out.push(c).ok()?;
                out.push(c).ok()?;
            }
        }
        6 => out.push_str(digits).ok()?,
        _ => return None,
    }

    Some(Hex::from_digits(out))
}

/// Decodes a normalized hex string into RGB bytes.
pub fn hex_to_rgb(hex: &Hex) -> Rgb {
    let bytes = hex.as_bytes();
    // Hex only ever holds six validated digits.
    let byte = |i: usize| nibble(bytes[i]).unwrap_or(0) << 4 | nibble(bytes[i + 1]).unwrap_or(0);
    Rgb::new(byte(0), byte(2), byte(4))
}

/// Encodes RGB bytes as a lowercase, zero-padded hex string.
pub fn rgb_to_hex(rgb: Rgb) -> Hex {
    let mut out = heapless::String::<6>::new();
    // Three two-digit bytes always fit the six digit buffer.
    let _ = write!(out, "{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b);
    Hex::from_digits(out)
}

/// Converts RGB bytes to HSL.
///
/// Grays (all channels equal) come out achromatic with hue and saturation 0.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h / 6.0, s, l)
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Converts HSL to RGB bytes, rounding each channel to the nearest integer.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let Hsl { h, s, l } = hsl;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    let channel = |x: f64| round_half_up(x * 255.0) as u8;
    Rgb::new(channel(r), channel(g), channel(b))
}

/// Converts RGB bytes to the scaled YUV form.
pub fn rgb_to_yuv(rgb: Rgb) -> Yuv {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    Yuv::new(
        0.257 * r + 0.504 * g + 0.098 * b + 16.0,
        -0.148 * r - 0.291 * g + 0.439 * b + 128.0,
        0.439 * r - 0.368 * g - 0.071 * b + 128.0,
    )
}

/// Converts scaled YUV back to RGB bytes.
///
/// Negative rounding artifacts are folded back with an absolute value;
/// anything above 255 saturates.
pub fn yuv_to_rgb(yuv: Yuv) -> Rgb {
    let y = yuv.y - 16.0;
    let u = yuv.u - 128.0;
    let v = yuv.v - 128.0;

    let channel = |x: f64| round_half_up(x * 255.0).abs() as u8;
    Rgb::new(
        channel(1.164 * y + 1.596 * v),
        channel(1.164 * y - 0.392 * u - 0.813 * v),
        channel(1.164 * y + 2.017 * u),
    )
}
