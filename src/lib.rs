#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Color`**: A color value backed by one representation, with the others computed on demand
//! - **`ColorBuilder`**: Checked construction from hex, RGB, HSL or YUV plus alpha
//! - **`Rgb`** / **`Hsl`** / **`Yuv`**: Plain channel triples
//! - **`Hex`**: A normalized six digit hex string
//! - **`ColorType`**: The encoding detected in a CSS-like color string
//! - **`ColorError`**: Construction and parsing failures
//!
//! Every transformation (`darken`, `saturate`, `shift_hue`, `mix_with`, ...) returns a new
//! `Color`. Conversions run at most once per instance and are cached, so reading `rgb()` or
//! `hex()` repeatedly is cheap.
//!
//! Use [`Color::to_srgb`] to hand a color to code working with `palette::Srgb`.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod types;
pub mod convert;
pub mod color;
pub mod ops;
pub mod parse;
mod json;

pub use color::{Color, ColorBuilder};
pub use convert::normalize_hex;
pub use ops::{are_similar, contrast, mix, perceived_brightness, shade_blend};
pub use parse::{ColorInput, ColorType, color_type};
pub use types::{ColorError, Hex, Hsl, Rgb, Yuv};
