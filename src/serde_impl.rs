//! Serde support for values and kinds (feature-gated)
//!
//! This module provides `Serialize` and `Deserialize` implementations for
//! [`Value`] and [`Kind`] when the `serde` feature is enabled.
//!
//! [`Kind`] round-trips through its canonical string (`"int"`, `"double"`,
//! ...). [`Value`] serializes as its native primitive and deserializes from
//! any self-describing primitive into the matching kind: integers become
//! `Int`, floats become `Double`, strings become `String`, bools become
//! `Bool`. The `Float` and `Number` kinds have no tag of their own in a
//! self-describing format, so they serialize fine but come back as `Double`
//! or `Int`.
//!
//! # Example
//!
//! ```rust,ignore
//! use kindcheck::{Kind, Value};
//!
//! let v: Value = serde_json::from_str("10.5").unwrap();
//! assert_eq!(v.kind(), Kind::Double);
//! assert_eq!(serde_json::to_string(&v).unwrap(), "10.5");
//! ```

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::{Kind, Value};

impl Serialize for Kind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Kind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KindVisitor;

        impl Visitor<'_> for KindVisitor {
            type Value = Kind;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a kind name (string, int, float, double, number, bool)")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Kind, E> {
                Kind::from_str(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(KindVisitor)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(x) => serializer.serialize_f32(*x),
            Value::Double(x) => serializer.serialize_f64(*x),
            Value::Number(n) => match n.as_i64() {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(n.as_f64()),
            },
            Value::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ValueVisitor;

        impl Visitor<'_> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a primitive (string, integer, float, or bool)")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
                Ok(Value::Bool(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
                Ok(Value::Int(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
                i64::try_from(v)
                    .map(Value::Int)
                    .map_err(|_| de::Error::custom("integer out of range for int kind"))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
                Ok(Value::Double(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
                Ok(Value::String(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
                Ok(Value::String(v))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}
