//! Lenient numeric field parsing for request bodies.
//!
//! Integers accept whole-valued floats (`4.0`) and numeric strings (`"4"`);
//! floats accept any JSON number or a numeric string. Anything else, such as
//! `"cheap"` or `4.5` for an integer, is a type error.

use serde::de::{self, Deserializer, Visitor};
use std::fmt;

struct IntegerVisitor;

impl<'de> Visitor<'de> for IntegerVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer, a whole-valued number or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
        // 2^63 is exactly representable; anything at or above it overflows.
        if v.is_finite() && v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
            Ok(v as i64)
        } else {
            Err(E::invalid_value(de::Unexpected::Float(v), &self))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
        v.trim()
            .parse::<i64>()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

struct FloatVisitor;

impl<'de> Visitor<'de> for FloatVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        v.trim()
            .parse::<f64>()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

struct OptionalFloatVisitor;

impl<'de> Visitor<'de> for OptionalFloatVisitor {
    type Value = Option<f64>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("null, a number or a numeric string")
    }

    fn visit_none<E: de::Error>(self) -> Result<Option<f64>, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Option<f64>, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Option<f64>, D::Error> {
        float(deserializer).map(Some)
    }
}

pub fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    deserializer.deserialize_any(IntegerVisitor)
}

pub fn float<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    deserializer.deserialize_any(FloatVisitor)
}

pub fn optional_float<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    deserializer.deserialize_option(OptionalFloatVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "integer")]
        id: i64,
        #[serde(deserialize_with = "float")]
        price: f64,
        #[serde(default, deserialize_with = "optional_float")]
        tax: Option<f64>,
    }

    fn parse(value: serde_json::Value) -> Result<Sample, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn integer_accepts_whole_floats_and_numeric_strings() {
        assert_eq!(parse(json!({ "id": 4.0, "price": 1 })).unwrap().id, 4);
        assert_eq!(parse(json!({ "id": "4", "price": 1 })).unwrap().id, 4);
        assert_eq!(parse(json!({ "id": " -7 ", "price": 1 })).unwrap().id, -7);
    }

    #[test]
    fn integer_rejects_fractions_and_words() {
        assert!(parse(json!({ "id": 4.5, "price": 1 })).is_err());
        assert!(parse(json!({ "id": "four", "price": 1 })).is_err());
        assert!(parse(json!({ "id": "4.0", "price": 1 })).is_err());
        assert!(parse(json!({ "id": u64::MAX, "price": 1 })).is_err());
        assert!(parse(json!({ "id": true, "price": 1 })).is_err());
    }

    #[test]
    fn float_accepts_numbers_and_numeric_strings() {
        assert_eq!(parse(json!({ "id": 1, "price": "499.99" })).unwrap().price, 499.99);
        assert_eq!(parse(json!({ "id": 1, "price": 10 })).unwrap().price, 10.0);
        assert!(parse(json!({ "id": 1, "price": "cheap" })).is_err());
    }

    #[test]
    fn optional_float_handles_null_missing_and_strings() {
        assert_eq!(parse(json!({ "id": 1, "price": 1 })).unwrap().tax, None);
        assert_eq!(parse(json!({ "id": 1, "price": 1, "tax": null })).unwrap().tax, None);
        assert_eq!(parse(json!({ "id": 1, "price": 1, "tax": "15.5" })).unwrap().tax, Some(15.5));
        assert!(parse(json!({ "id": 1, "price": 1, "tax": "lots" })).is_err());
    }
}
