//! # Kindcheck
//!
//! Kind-tagged values with safe coercion and cross-kind comparison for input
//! validation.
//!
//! ## Philosophy
//!
//! Host code hands over heterogeneous primitives (strings, integers, floats,
//! boxed numbers, booleans) and wants to ask the same validation questions of
//! all of them. **Kindcheck** wraps each primitive in a [`Value`] tagged with
//! its semantic [`Kind`] and answers those questions without ever faulting:
//! coercions that cannot parse return `None`, comparisons that do not apply
//! return `false`. Predicates chain without guard code at the call site.
//!
//! ## Quick Example
//!
//! ```rust
//! use kindcheck::Value;
//!
//! // A double, an int, and a numeric string compare directly.
//! let price = Value::from(10.0f64);
//! assert!(price.is_between(&Value::from(9i64), &Value::from("11")));
//! assert!(price.is_greater_than(&Value::from("9.99")));
//!
//! // Coercions are best-effort and never fault.
//! assert_eq!(Value::from("10.0").to_int(), Some(10));
//! assert_eq!(Value::from("abc").to_int(), None);
//!
//! // Booleans are categorically excluded from numeric comparison.
//! assert!(!Value::from(true).is_between(&Value::from(0i64), &Value::from(1i64)));
//!
//! // Pattern matching runs over the canonical textual rendering.
//! assert!(Value::from(1321321i64).matches("^[0-9]+$").unwrap());
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

#[cfg(feature = "tracing")]
macro_rules! trace_refused {
    ($($arg:tt)*) => { tracing::trace!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_refused {
    ($($arg:tt)*) => {};
}

pub mod kind;
pub mod number;
pub mod value;

#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(feature = "proptest")]
pub mod testing;

// Re-exports
pub use kind::{Kind, ParseKindError};
pub use number::Number;
pub use value::{PatternError, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::kind::Kind;
    pub use crate::number::Number;
    pub use crate::value::{PatternError, Value};
}
