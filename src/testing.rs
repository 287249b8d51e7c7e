//! Property-testing support for kindcheck (feature-gated)
//!
//! This module provides proptest strategies for generating [`Kind`]s and
//! [`Value`]s, for use in downstream property tests. Enabled by the
//! `proptest` feature.
//!
//! # Examples
//!
//! ```rust,ignore
//! use kindcheck::testing::arb_value;
//! use proptest::prelude::*;
//!
//! proptest! {
//!     #[test]
//!     fn queries_never_panic(v in arb_value()) {
//!         let _ = v.to_int();
//!         let _ = v.is_empty();
//!     }
//! }
//! ```

use proptest::prelude::*;

use crate::{Kind, Number, Value};

/// Strategy over all six kinds.
pub fn arb_kind() -> impl Strategy<Value = Kind> {
    prop_oneof![
        Just(Kind::String),
        Just(Kind::Int),
        Just(Kind::Float),
        Just(Kind::Double),
        Just(Kind::Number),
        Just(Kind::Bool),
    ]
}

/// Strategy over values of every kind.
///
/// Float payloads are kept finite so that generated values always have a
/// well-defined textual rendering to parse back.
pub fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        ".{0,24}".prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1.0e6f32..1.0e6f32).prop_map(Value::from),
        (-1.0e9f64..1.0e9f64).prop_map(Value::from),
        arb_number().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
    ]
}

/// Strategy over the numeric kinds only: int, float, double, and number.
pub fn arb_numeric_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i32>().prop_map(|i| Value::from(i64::from(i))),
        (-1.0e6f32..1.0e6f32).prop_map(Value::from),
        (-1.0e6f64..1.0e6f64).prop_map(Value::from),
        arb_number().prop_map(Value::from),
    ]
}

fn arb_number() -> impl Strategy<Value = Number> {
    prop_oneof![
        any::<i32>().prop_map(|i| Number::from(i64::from(i))),
        (-1.0e6f64..1.0e6f64).prop_map(Number::from),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn test_arb_value_kind_is_consistent(v in arb_value()) {
            prop_assert!(v.is_kind(v.kind()));
        }

        #[test]
        fn test_arb_numeric_value_is_never_bool_or_string(v in arb_numeric_value()) {
            prop_assert!(!v.is_bool());
            prop_assert!(!v.is_string());
        }

        #[test]
        fn test_arb_numeric_value_coerces(v in arb_numeric_value()) {
            prop_assert!(v.to_double().is_some());
        }
    }
}
