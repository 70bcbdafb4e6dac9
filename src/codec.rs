//! # QR Payload Codec
//!
//! Converts a [`ProductSnapshot`] to and from the text carried by a QR code.
//!
//! The payload is a JSON object with camelCase keys:
//!
//! ```text
//! {"id":"k3v9x0a1b2c3","name":"Widget","location":"Aisle 4","quantity":3,
//!  "price":12.5,"checkInDate":"2024-01-10","checkOutDate":"2024-02-10",
//!  "scanLimit":2,"currentScans":0}
//! ```
//!
//! Decoding is the only place untrusted text enters the system, so it rejects
//! anything that isn't a complete snapshot instead of guessing.

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::ProductSnapshot;

/// Every key a payload must carry.
pub const REQUIRED_FIELDS: [&str; 9] = [
    "id",
    "name",
    "location",
    "quantity",
    "price",
    "checkInDate",
    "checkOutDate",
    "scanLimit",
    "currentScans",
];

/// Encoded QR content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QrPayload(String);

impl QrPayload {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QrPayload {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for QrPayload {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for QrPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Malformed payload: {0}")]
    Malformed(String),
    #[error("Payload is missing field: {0}")]
    MissingField(&'static str),
}

#[derive(Debug, Error)]
#[error("Failed to encode payload: {0}")]
pub struct EncodeError(#[from] serde_json::Error);

pub fn encode(snapshot: &ProductSnapshot) -> Result<QrPayload, EncodeError> {
    Ok(QrPayload(serde_json::to_string(snapshot)?))
}

/// Parses scanned text into a snapshot without touching any state.
pub fn decode(payload: &str) -> Result<ProductSnapshot, DecodeError> {
    let value: Value =
        serde_json::from_str(payload).map_err(|e| DecodeError::Malformed(e.to_string()))?;

    let object = match value {
        Value::Object(object) => object,
        other => {
            return Err(DecodeError::Malformed(format!(
                "expected a JSON object, found {}",
                kind_of(&other)
            )))
        }
    };

    check_required(&object)?;

    serde_json::from_value(Value::Object(object)).map_err(|e| DecodeError::Malformed(e.to_string()))
}

fn check_required(object: &Map<String, Value>) -> Result<(), DecodeError> {
    for field in REQUIRED_FIELDS {
        match object.get(field) {
            None | Some(Value::Null) => return Err(DecodeError::MissingField(field)),
            Some(_) => {}
        }
    }
    Ok(())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::fixtures::{date, widget};

    fn snapshot() -> ProductSnapshot {
        widget(3, 2).initial_snapshot("k3v9x0a1b2c3")
    }

    #[test]
    fn round_trips() {
        let original = snapshot();
        let payload = encode(&original).unwrap();
        assert_eq!(decode(payload.as_str()).unwrap(), original);

        let edited = ProductSnapshot {
            name: "Ünïcode \"quoted\" name".to_string(),
            price: 0.0,
            quantity: 0,
            current_scans: 4,
            check_out_date: date(2031, 12, 31),
            ..original
        };
        let payload = encode(&edited).unwrap();
        assert_eq!(decode(payload.as_str()).unwrap(), edited);
    }

    #[test]
    fn round_trips_arbitrary_prices() {
        use rand::Rng;

        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let scan_limit = rng.gen_range(1..=50);
            let generated = ProductSnapshot {
                price: rng.gen_range(0.0..100_000.0),
                quantity: rng.gen_range(0..=1_000),
                scan_limit,
                current_scans: rng.gen_range(0..=scan_limit),
                ..snapshot()
            };
            let payload = encode(&generated).unwrap();
            assert_eq!(decode(payload.as_str()).unwrap(), generated, "payload: {}", payload);
        }

        for price in [0.1 + 0.2, 1.0 / 3.0, f64::MIN_POSITIVE, 9_007_199_254_740_993.0, 1e-300] {
            let generated = ProductSnapshot { price, ..snapshot() };
            let payload = encode(&generated).unwrap();
            assert_eq!(decode(payload.as_str()).unwrap().price.to_bits(), price.to_bits());
        }
    }

    #[test]
    fn encoding_is_deterministic_and_camel_cased() {
        let a = encode(&snapshot()).unwrap();
        let b = encode(&snapshot()).unwrap();
        assert_eq!(a, b);
        assert!(a.as_str().contains("\"scanLimit\":2"));
        assert!(a.as_str().contains("\"currentScans\":0"));
        assert!(a.as_str().contains("\"checkInDate\":\"2024-01-10\""));
    }

    #[test]
    fn rejects_non_json() {
        assert!(matches!(decode("not json"), Err(DecodeError::Malformed(_))));
        assert!(matches!(decode(""), Err(DecodeError::Malformed(_))));
        assert!(matches!(decode("{\"id\":"), Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn rejects_non_objects() {
        assert!(matches!(decode("[1,2,3]"), Err(DecodeError::Malformed(_))));
        assert!(matches!(decode("\"p1\""), Err(DecodeError::Malformed(_))));
        assert!(matches!(decode("42"), Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn reports_missing_fields() {
        assert_eq!(decode("{}"), Err(DecodeError::MissingField("id")));

        let mut value = serde_json::to_value(snapshot()).unwrap();
        value.as_object_mut().unwrap().remove("scanLimit");
        assert_eq!(
            decode(&value.to_string()),
            Err(DecodeError::MissingField("scanLimit"))
        );

        let mut value = serde_json::to_value(snapshot()).unwrap();
        value["location"] = Value::Null;
        assert_eq!(
            decode(&value.to_string()),
            Err(DecodeError::MissingField("location"))
        );
    }

    #[test]
    fn rejects_wrong_types() {
        let mut value = serde_json::to_value(snapshot()).unwrap();
        value["quantity"] = Value::from(-1);
        assert!(matches!(decode(&value.to_string()), Err(DecodeError::Malformed(_))));

        let mut value = serde_json::to_value(snapshot()).unwrap();
        value["checkInDate"] = Value::from("yesterday");
        assert!(matches!(decode(&value.to_string()), Err(DecodeError::Malformed(_))));
    }
}
