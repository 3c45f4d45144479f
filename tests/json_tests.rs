//! Integration tests for JSON encoding and decoding

mod common;
use common::*;

use std::error::Error;

use hue_shift::{Color, ColorError, Hsl, Rgb};
use serde_json::json;

// ============================================================================
// Encoding
// ============================================================================

#[test]
fn hex_backed_color_encodes_hex() {
    assert_eq!(hex("#1177aa").to_json(), json!({ "hex": "1177aa" }));
}

#[test]
fn cached_rgb_takes_priority() {
    let color = hex("#1177aa").with_alpha(0.5);
    let _ = color.rgb();
    assert_eq!(
        color.to_json(),
        json!({ "r": 17, "g": 119, "b": 170, "alpha": 0.5 })
    );
}

#[test]
fn hsl_backed_color_encodes_hsl() {
    let color = Color::from_hsla(Hsl::new(0.5, 0.25, 0.75), 0.2);
    assert_eq!(
        color.to_json(),
        json!({ "h": 0.5, "s": 0.25, "l": 0.75, "alpha": 0.2 })
    );
}

#[test]
fn round_trips_through_json() {
    let color = hex("#1177aa");
    let decoded = Color::from_json(&color.to_json()).unwrap().unwrap();
    assert_eq!(decoded.css_hex(), color.css_hex());
    assert_eq!(decoded.css_rgba(), color.css_rgba());
    assert_eq!(decoded.css_hsla(), color.css_hsla());
}

// ============================================================================
// Decoding
// ============================================================================

#[test]
fn decodes_rgb_with_default_alpha() {
    let color = Color::from_json(&json!({ "r": 255, "g": 0, "b": 0 }))
        .unwrap()
        .unwrap();
    assert_eq!(color.rgb(), Rgb::new(255, 0, 0));
    assert_eq!(color.alpha(), 1.0);
}

#[test]
fn decodes_hsl_with_alpha() {
    let color = Color::from_json(&json!({ "h": 0.5, "s": 1, "l": 0.5, "alpha": 0.4 }))
        .unwrap()
        .unwrap();
    assert_eq!(color.rgb(), Rgb::new(0, 255, 255));
    assert_eq!(color.alpha(), 0.4);
}

#[test]
fn hex_key_wins_over_others() {
    let color = Color::from_json(&json!({ "hex": "#fff", "r": 0, "h": 0.5 }))
        .unwrap()
        .unwrap();
    assert!(color.is_white());
}

#[test]
fn falsy_and_unrecognized_values_give_none() {
    for value in [json!(null), json!(false), json!(0), json!(""), json!({ "x": 1 }), json!([1])] {
        assert!(Color::from_json(&value).unwrap().is_none(), "{value}");
    }
    assert!(Color::from_json_str("").unwrap().is_none());
}

#[test]
fn falsy_hex_falls_through_to_other_keys() {
    let color = Color::from_json(&json!({ "hex": null, "r": 1, "g": 2, "b": 3 }))
        .unwrap()
        .unwrap();
    assert_eq!(color.rgb(), Rgb::new(1, 2, 3));
    assert!(Color::from_json(&json!({ "hex": "" })).unwrap().is_none());
}

#[test]
fn rgb_channels_round_and_saturate() {
    let color = Color::from_json(&json!({ "r": 12.7, "g": 300, "b": -5 }))
        .unwrap()
        .unwrap();
    assert_eq!(color.rgb(), Rgb::new(13, 255, 0));
}

#[test]
fn invalid_hex_is_an_error() {
    let result = Color::from_json(&json!({ "hex": "zz" }));
    assert!(matches!(result, Err(ColorError::InvalidHex(_))));
}

#[test]
fn malformed_json_text_is_an_error() {
    let err = Color::from_json_str("{").unwrap_err();
    assert!(matches!(err, ColorError::Json(_)));
    assert!(err.source().is_some());
}

#[test]
fn decodes_json_text() {
    let color = Color::from_json_str(r#"{"r": 1, "g": 2, "b": 3, "alpha": 0.5}"#)
        .unwrap()
        .unwrap();
    assert_eq!(color, Color::from_rgba(Rgb::new(1, 2, 3), 0.5));
}

// ============================================================================
// serde
// ============================================================================

#[test]
fn color_serde_round_trip() {
    let color = Color::from_rgba(Rgb::new(1, 2, 3), 0.5);
    let text = serde_json::to_string(&color).unwrap();
    let decoded: Color = serde_json::from_str(&text).unwrap();
    assert_eq!(decoded, color);
}

#[test]
fn color_deserialize_rejects_unknown_objects() {
    assert!(serde_json::from_str::<Color>(r#"{"x": 1}"#).is_err());
    assert!(serde_json::from_str::<Color>(r#"{"hex": "nothex"}"#).is_err());
}

#[test]
fn channel_types_serialize_as_flat_objects() {
    assert_eq!(
        serde_json::to_value(Rgb::new(1, 2, 3)).unwrap(),
        json!({ "r": 1, "g": 2, "b": 3 })
    );
    let hsl: Hsl = serde_json::from_value(json!({ "h": 0.1, "s": 0.2, "l": 0.3 })).unwrap();
    assert_eq!(hsl, Hsl::new(0.1, 0.2, 0.3));
}
