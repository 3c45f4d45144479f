//! JSON encoding of colors.
//!
//! A color serializes to a flat object built from the representation it
//! already has, in this order:
//! * `{"r", "g", "b", "alpha"}`
//! * `{"h", "s", "l", "alpha"}`
//! * `{"hex"}`
//!
//! Decoding inspects the object for a `hex`, then an `h`, then an `r` key.

use log::debug;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value, json};

use crate::color::Color;
use crate::convert::round_half_up;
use crate::types::{ColorError, Hsl, Rgb};

impl Color {
    /// Encodes the color as a JSON object.
    pub fn to_json(&self) -> Value {
        if self.has_rgb() {
            let Rgb { r, g, b } = self.rgb();
            json!({ "r": r, "g": g, "b": b, "alpha": self.alpha() })
        } else if self.has_hsl() {
            let Hsl { h, s, l } = self.hsl();
            json!({ "h": h, "s": s, "l": l, "alpha": self.alpha() })
        } else if self.has_hex() {
            json!({ "hex": self.hex() })
        } else {
            let Rgb { r, g, b } = self.rgb();
            json!({ "r": r, "g": g, "b": b, "alpha": self.alpha() })
        }
    }

    /// Decodes a color from a JSON value.
    ///
    /// Returns `Ok(None)` for falsy values (`null`, `false`, `0`, `""`) and for
    /// objects without a `hex`, `h` or `r` key. A falsy `hex` entry counts as
    /// missing. RGB channels are rounded half up and saturate to 0-255.
    ///
    /// # Errors
    /// Returns [`ColorError::InvalidHex`] if a `hex` key holds an invalid hex string.
    pub fn from_json(value: &Value) -> Result<Option<Color>, ColorError> {
        if is_falsy(value) {
            return Ok(None);
        }
        let Some(object) = value.as_object() else {
            debug!("ignoring non-object color json {value}");
            return Ok(None);
        };

        if let Some(hex) = object.get("hex").filter(|hex| !is_falsy(hex)) {
            let hex = hex.as_str().map_or_else(|| hex.to_string(), str::to_owned);
            return Color::from_hex(&hex).map(Some);
        }

        let alpha = field(object, "alpha").unwrap_or(1.0);
        if object.contains_key("h") {
            let hsl = Hsl::new(
                field(object, "h").unwrap_or(0.0),
                field(object, "s").unwrap_or(0.0),
                field(object, "l").unwrap_or(0.0),
            );
            return Ok(Some(Color::from_hsla(hsl, alpha)));
        }
        if object.contains_key("r") {
            let channel = |key: &str| round_half_up(field(object, key).unwrap_or(0.0)) as u8;
            let rgb = Rgb::new(channel("r"), channel("g"), channel("b"));
            return Ok(Some(Color::from_rgba(rgb, alpha)));
        }

        debug!("unrecognized color json {value}");
        Ok(None)
    }

    /// Decodes a color from JSON text. See [`from_json`](Self::from_json).
    ///
    /// # Errors
    /// Returns [`ColorError::Json`] for malformed JSON text.
    pub fn from_json_str(text: &str) -> Result<Option<Color>, ColorError> {
        if text.is_empty() {
            return Ok(None);
        }
        let value: Value = serde_json::from_str(text)?;
        Color::from_json(&value)
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn field(object: &Map<String, Value>, key: &str) -> Option<f64> {
    object.get(key).and_then(Value::as_f64)
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Color::from_json(&value)
            .map_err(de::Error::custom)?
            .ok_or_else(|| de::Error::custom("expected an object with a hex, h or r key"))
    }
}
