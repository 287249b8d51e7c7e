//! The kind-tagged value abstraction
//!
//! This module provides [`Value`], a tagged union over the six semantic kinds.
//! A `Value` wraps one primitive payload together with its [`Kind`], and the
//! union keeps the two consistent by construction: there is no way to build a
//! value whose kind disagrees with its storage.
//!
//! Values are pure: every operation takes `&self`, mutates nothing, and
//! returns the same answer every time. Hosts build them at the call site from
//! raw primitives, run their validation expression, and drop them.
//!
//! # Examples
//!
//! ```
//! use kindcheck::{Kind, Value};
//!
//! let age = Value::from(42i64);
//! assert_eq!(age.kind(), Kind::Int);
//! assert!(age.is_between(&Value::from(0i64), &Value::from(130i64)));
//!
//! let name = Value::from("  ");
//! assert!(name.is_empty());
//! ```

mod coerce;
mod compare;
mod pattern;

pub use pattern::PatternError;

use std::fmt;

use crate::kind::Kind;
use crate::number::{write_float, Number};

/// A primitive payload tagged with its semantic [`Kind`].
///
/// The variant is the kind: `Value::Int` is always `Kind::Int`, and so on.
/// Construction goes through `From` impls for the underlying primitives, so
/// the tag can never drift from the storage.
///
/// Operations come in three groups, each on its own file-level `impl`:
/// coercions ([`to_int`](Value::to_int) and friends), comparisons
/// ([`is_between`](Value::is_between) and the ordering predicates), and
/// pattern matching ([`matches`](Value::matches)).
///
/// # Examples
///
/// ```
/// use kindcheck::Value;
///
/// let v = Value::from("10.0");
/// assert_eq!(v.to_int(), Some(10));
/// assert_eq!(v.to_double(), Some(10.0));
/// assert_eq!(v.to_bool(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A textual value.
    String(String),
    /// A 64-bit signed integer.
    Int(i64),
    /// A single-precision float.
    Float(f32),
    /// A double-precision float.
    Double(f64),
    /// A boxed numeric (see [`Number`]).
    Number(Number),
    /// A boolean.
    Bool(bool),
}

impl Value {
    /// The semantic kind of this value. O(1), never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindcheck::{Kind, Value};
    ///
    /// assert_eq!(Value::from(1.5f64).kind(), Kind::Double);
    /// ```
    #[inline]
    pub fn kind(&self) -> Kind {
        match self {
            Value::String(_) => Kind::String,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Double(_) => Kind::Double,
            Value::Number(_) => Kind::Number,
            Value::Bool(_) => Kind::Bool,
        }
    }

    /// True if this value's kind is `k`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindcheck::{Kind, Value};
    ///
    /// let v = Value::from(true);
    /// assert!(v.is_kind(Kind::Bool));
    /// assert!(!v.is_kind(Kind::Int));
    /// ```
    #[inline]
    pub fn is_kind(&self, k: Kind) -> bool {
        self.kind() == k
    }

    /// True for string-kind values.
    #[inline]
    pub fn is_string(&self) -> bool {
        self.is_kind(Kind::String)
    }

    /// True for int-kind values.
    #[inline]
    pub fn is_int(&self) -> bool {
        self.is_kind(Kind::Int)
    }

    /// True for float-kind values.
    #[inline]
    pub fn is_float(&self) -> bool {
        self.is_kind(Kind::Float)
    }

    /// True for double-kind values.
    #[inline]
    pub fn is_double(&self) -> bool {
        self.is_kind(Kind::Double)
    }

    /// True for number-kind values.
    #[inline]
    pub fn is_number(&self) -> bool {
        self.is_kind(Kind::Number)
    }

    /// True for bool-kind values.
    #[inline]
    pub fn is_bool(&self) -> bool {
        self.is_kind(Kind::Bool)
    }

    /// True iff the textual rendering, with all space characters removed, has
    /// zero length. The check is uniform across kinds; numeric and boolean
    /// renderings are simply never empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindcheck::Value;
    ///
    /// assert!(Value::from("").is_empty());
    /// assert!(Value::from("   ").is_empty());
    /// assert!(!Value::from("a b").is_empty());
    /// assert!(!Value::from(0i64).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.to_text().chars().any(|c| c != ' ')
    }

    /// The canonical textual rendering of this value.
    ///
    /// A string-kind value renders verbatim, unquoted. Every other kind uses
    /// its native rendering, except that a finite float with no fractional
    /// part keeps one decimal place, so a double holding ten renders as
    /// `10.0`, not `10`. This is also the `Display` impl.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindcheck::Value;
    ///
    /// assert_eq!(Value::from("plain text").to_text(), "plain text");
    /// assert_eq!(Value::from(10i64).to_text(), "10");
    /// assert_eq!(Value::from(10.0f64).to_text(), "10.0");
    /// assert_eq!(Value::from(false).to_text(), "false");
    /// ```
    #[inline]
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write_float(f, *x),
            Value::Double(x) => write_float(f, *x),
            Value::Number(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    #[inline]
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Value::Float(value)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<Number> for Value {
    #[inline]
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_constructor() {
        assert_eq!(Value::from("x").kind(), Kind::String);
        assert_eq!(Value::from(1i64).kind(), Kind::Int);
        assert_eq!(Value::from(1.0f32).kind(), Kind::Float);
        assert_eq!(Value::from(1.0f64).kind(), Kind::Double);
        assert_eq!(Value::from(Number::from(1)).kind(), Kind::Number);
        assert_eq!(Value::from(true).kind(), Kind::Bool);
    }

    #[test]
    fn test_kind_predicates_are_exclusive() {
        let v = Value::from(1.0f32);
        assert!(v.is_float());
        assert!(!v.is_string());
        assert!(!v.is_int());
        assert!(!v.is_double());
        assert!(!v.is_number());
        assert!(!v.is_bool());
    }

    #[test]
    fn test_string_renders_verbatim() {
        assert_eq!(Value::from("a \"quoted\" text").to_text(), "a \"quoted\" text");
    }

    #[test]
    fn test_integral_floats_keep_a_decimal_place() {
        assert_eq!(Value::from(10.0f32).to_text(), "10.0");
        assert_eq!(Value::from(10.0f64).to_text(), "10.0");
        assert_eq!(Value::from(-3.0f64).to_text(), "-3.0");
    }

    #[test]
    fn test_fractional_floats_render_natively() {
        assert_eq!(Value::from(10.5f64).to_text(), "10.5");
        assert_eq!(Value::from(0.25f32).to_text(), "0.25");
    }

    #[test]
    fn test_int_rendering_has_no_decimal_point() {
        assert_eq!(Value::from(10i64).to_text(), "10");
        assert_eq!(Value::from(-10i64).to_text(), "-10");
    }

    #[test]
    fn test_number_rendering_follows_representation() {
        assert_eq!(Value::from(Number::from(10)).to_text(), "10");
        assert_eq!(Value::from(Number::from(10.0)).to_text(), "10.0");
    }

    #[test]
    fn test_is_empty_ignores_spaces_only() {
        assert!(Value::from("").is_empty());
        assert!(Value::from("   ").is_empty());
        assert!(!Value::from("a b").is_empty());
        assert!(!Value::from("\t").is_empty());
    }

    #[test]
    fn test_no_kind_other_than_string_renders_empty() {
        assert!(!Value::from(0i64).is_empty());
        assert!(!Value::from(0.0f64).is_empty());
        assert!(!Value::from(false).is_empty());
        assert!(!Value::from(Number::from(0)).is_empty());
    }

    #[test]
    fn test_display_equals_to_text() {
        let v = Value::from(10.0f64);
        assert_eq!(format!("{v}"), v.to_text());
    }
}
