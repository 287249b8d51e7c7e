//! Boxed numeric values
//!
//! This module provides [`Number`], the payload of the `number` kind: a
//! numeric value with no fixed width, stored as either a 64-bit integer or a
//! 64-bit float. It exists so hosts that hand over "some number" without
//! committing to a representation still get a kind of their own, distinct
//! from `int`, `float`, and `double`.
//!
//! # Examples
//!
//! ```
//! use kindcheck::Number;
//!
//! let n = Number::from(10);
//! assert_eq!(n.to_string(), "10");
//! assert_eq!(n.as_f64(), 10.0);
//!
//! let n = Number::from(10.0);
//! assert_eq!(n.to_string(), "10.0");
//! ```

use std::fmt;

/// A boxed numeric value, integer- or float-represented.
///
/// `Number` renders like its underlying representation: the integer form has
/// no decimal point, the float form renders like a `double`-kind value.
///
/// # Examples
///
/// ```
/// use kindcheck::{Kind, Number, Value};
///
/// let value = Value::from(Number::from(10.0));
/// assert_eq!(value.kind(), Kind::Number);
/// assert_eq!(value.to_text(), "10.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number(Repr);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Repr {
    Int(i64),
    Float(f64),
}

impl Number {
    /// True if this number is integer-represented.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindcheck::Number;
    ///
    /// assert!(Number::from(10).is_integer());
    /// assert!(!Number::from(10.0).is_integer());
    /// ```
    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(self.0, Repr::Int(_))
    }

    /// The numeric value widened to `f64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindcheck::Number;
    ///
    /// assert_eq!(Number::from(3).as_f64(), 3.0);
    /// assert_eq!(Number::from(0.5).as_f64(), 0.5);
    /// ```
    #[inline]
    pub fn as_f64(&self) -> f64 {
        match self.0 {
            Repr::Int(i) => i as f64,
            Repr::Float(f) => f,
        }
    }

    /// The integer value, if integer-represented.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindcheck::Number;
    ///
    /// assert_eq!(Number::from(3).as_i64(), Some(3));
    /// assert_eq!(Number::from(3.0).as_i64(), None);
    /// ```
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self.0 {
            Repr::Int(i) => Some(i),
            Repr::Float(_) => None,
        }
    }
}

impl From<i64> for Number {
    #[inline]
    fn from(value: i64) -> Self {
        Number(Repr::Int(value))
    }
}

impl From<i32> for Number {
    #[inline]
    fn from(value: i32) -> Self {
        Number(Repr::Int(value.into()))
    }
}

impl From<u32> for Number {
    #[inline]
    fn from(value: u32) -> Self {
        Number(Repr::Int(value.into()))
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(value: f64) -> Self {
        Number(Repr::Float(value))
    }
}

impl From<f32> for Number {
    #[inline]
    fn from(value: f32) -> Self {
        Number(Repr::Float(value.into()))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Repr::Int(i) => write!(f, "{i}"),
            Repr::Float(x) => write_float(f, x),
        }
    }
}

/// Writes a float the way this crate's textual rendering demands: a finite
/// value with no fractional part keeps one decimal place (`10.0`, never `10`).
pub(crate) fn write_float<F>(f: &mut fmt::Formatter<'_>, value: F) -> fmt::Result
where
    F: fmt::Display + Copy + Into<f64>,
{
    let rendered = value.to_string();
    if value.into().is_finite() && !rendered.contains('.') {
        write!(f, "{rendered}.0")
    } else {
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_form_renders_without_decimal_point() {
        assert_eq!(Number::from(10).to_string(), "10");
        assert_eq!(Number::from(-7).to_string(), "-7");
    }

    #[test]
    fn test_float_form_keeps_decimal_point() {
        assert_eq!(Number::from(10.0).to_string(), "10.0");
        assert_eq!(Number::from(-2.0).to_string(), "-2.0");
        assert_eq!(Number::from(0.5).to_string(), "0.5");
    }

    #[test]
    fn test_non_finite_floats_render_natively() {
        assert_eq!(Number::from(f64::INFINITY).to_string(), "inf");
        assert_eq!(Number::from(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn test_as_f64_widens_both_representations() {
        assert_eq!(Number::from(42).as_f64(), 42.0);
        assert_eq!(Number::from(42.5).as_f64(), 42.5);
    }

    #[test]
    fn test_as_i64_is_exact_for_integer_form_only() {
        assert_eq!(Number::from(42).as_i64(), Some(42));
        assert_eq!(Number::from(42.0).as_i64(), None);
    }

    #[test]
    fn test_from_narrower_integer_types() {
        assert_eq!(Number::from(5i32), Number::from(5i64));
        assert_eq!(Number::from(5u32), Number::from(5i64));
    }
}
