//! Shared test infrastructure for hue-shift integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use hue_shift::{Color, Hsl};
use rand::SeedableRng;
use rand::rngs::StdRng;

// ============================================================================
// Deterministic randomness
// ============================================================================

/// Seeded generator so sweeps are reproducible
pub fn test_rng() -> StdRng {
    StdRng::seed_from_u64(0x00c0_ffee)
}

// ============================================================================
// Construction shortcuts
// ============================================================================

/// Builds a color from CSS-style HSL: hue in degrees, saturation and lightness in percent
pub fn hsl_deg(h: f64, s: f64, l: f64) -> Color {
    Color::from_hsl(Hsl::new(h / 360.0, s / 100.0, l / 100.0))
}

/// Builds a color from a hex literal that is known to be valid
pub fn hex(value: &str) -> Color {
    Color::from_hex(value).unwrap()
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two floats with tolerance
pub fn approx_eq(a: f64, b: f64) -> bool {
    approx_eq_epsilon(a, b, 1e-9)
}

/// Compare two floats with custom epsilon
pub fn approx_eq_epsilon(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Compare two HSL triples with tolerance
pub fn hsl_equal(a: Hsl, b: Hsl) -> bool {
    approx_eq_epsilon(a.h, b.h, 1e-6)
        && approx_eq_epsilon(a.s, b.s, 1e-6)
        && approx_eq_epsilon(a.l, b.l, 1e-6)
}
