//! Typed coercions
//!
//! Every coercion parses the value's canonical textual rendering, so all
//! kinds share one code path and a failed parse is an ordinary `None`, never
//! an error. The numeric coercions agree with each other on success, up to
//! the precision the target representation can hold.

use super::Value;

impl Value {
    /// Coerce to a 64-bit integer.
    ///
    /// A direct integer parse is tried first; otherwise a finite float parse
    /// is truncated toward zero, so `"10.0"` coerces to `10`. Non-numeric
    /// text yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindcheck::Value;
    ///
    /// assert_eq!(Value::from("10").to_int(), Some(10));
    /// assert_eq!(Value::from("10.9").to_int(), Some(10));
    /// assert_eq!(Value::from(10.0f64).to_int(), Some(10));
    /// assert_eq!(Value::from("abc").to_int(), None);
    /// assert_eq!(Value::from(true).to_int(), None);
    /// ```
    pub fn to_int(&self) -> Option<i64> {
        let text = self.to_text();
        if let Ok(i) = text.parse::<i64>() {
            return Some(i);
        }
        let parsed = text.parse::<f64>().ok().filter(|x| x.is_finite())?;
        Some(parsed.trunc() as i64)
    }

    /// Coerce to a single-precision float.
    ///
    /// Locale-neutral parse of the textual rendering; `None` for non-numeric
    /// text and for parses that do not land on a finite value (so an
    /// overflowing literal is a failed coercion, not an infinity).
    ///
    /// # Examples
    ///
    /// ```
    /// use kindcheck::Value;
    ///
    /// assert_eq!(Value::from("10.0").to_float(), Some(10.0));
    /// assert_eq!(Value::from(9i64).to_float(), Some(9.0));
    /// assert_eq!(Value::from("abc").to_float(), None);
    /// ```
    pub fn to_float(&self) -> Option<f32> {
        self.to_text().parse::<f32>().ok().filter(|x| x.is_finite())
    }

    /// Coerce to a double-precision float.
    ///
    /// Same policy as [`to_float`](Value::to_float) at double precision.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindcheck::Value;
    ///
    /// assert_eq!(Value::from("10.0").to_double(), Some(10.0));
    /// assert_eq!(Value::from("1e3").to_double(), Some(1000.0));
    /// assert_eq!(Value::from("ten").to_double(), None);
    /// ```
    pub fn to_double(&self) -> Option<f64> {
        self.to_text().parse::<f64>().ok().filter(|x| x.is_finite())
    }

    /// Coerce to a boolean.
    ///
    /// A bool-kind value yields its own truth value. A string-kind value
    /// yields `Some` for the case-insensitive literals `"true"` and
    /// `"false"`. Every other kind, and every other text, yields `None`;
    /// numbers are never truthy here.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindcheck::Value;
    ///
    /// assert_eq!(Value::from(false).to_bool(), Some(false));
    /// assert_eq!(Value::from("TRUE").to_bool(), Some(true));
    /// assert_eq!(Value::from("yes").to_bool(), None);
    /// assert_eq!(Value::from(1i64).to_bool(), None);
    /// ```
    pub fn to_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
            Value::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        }
    }
}
