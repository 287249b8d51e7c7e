//! Cross-kind relational comparisons
//!
//! Comparisons use the single-precision float coercion as their common
//! currency, which is what lets an int, a double, a boxed number, and a
//! numeric string compare directly. The price is precision loss beyond the
//! f32 mantissa for large integers and doubles; that trade-off is part of the
//! contract, not a defect.
//!
//! Two kind rules gate every comparison:
//!
//! - bool-kind values never participate, in any operand position;
//! - a string-kind value never orders as the LEFT operand, even when its text
//!   is numeric, but is accepted and coerced normally on the right. This
//!   asymmetry is preserved deliberately for compatibility.
//!
//! When a rule excludes an operand, or a coercion fails, the comparison is
//! `false` rather than an error, so predicates chain without guard code.

use super::Value;

impl Value {
    /// Inclusive range test: `min.to_float() <= self.to_float() <= max.to_float()`.
    ///
    /// Returns `false` when any of the three values is bool-kind or fails
    /// float coercion. `min` and `max` may be of any non-bool kind, including
    /// numeric strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindcheck::Value;
    ///
    /// let v = Value::from(10.0f64);
    /// assert!(v.is_between(&Value::from(9i64), &Value::from("11")));
    /// assert!(v.is_between(&Value::from(10.0f32), &Value::from(10.0f64)));
    /// assert!(!v.is_between(&Value::from(false), &Value::from(true)));
    /// assert!(!Value::from("ten").is_between(&Value::from(9i64), &Value::from(11i64)));
    /// ```
    pub fn is_between(&self, min: &Value, max: &Value) -> bool {
        if self.is_bool() || min.is_bool() || max.is_bool() {
            trace_refused!(op = "is_between", "boolean operand excluded from range comparison");
            return false;
        }
        let (Some(this), Some(lo), Some(hi)) = (self.to_float(), min.to_float(), max.to_float())
        else {
            trace_refused!(op = "is_between", "operand failed float coercion");
            return false;
        };
        (lo..=hi).contains(&this)
    }

    /// True iff this value orders strictly below `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindcheck::Value;
    ///
    /// assert!(Value::from(10i64).is_less_than(&Value::from("11")));
    /// assert!(!Value::from(10i64).is_less_than(&Value::from(10.0f64)));
    /// // A string never orders on the left, numeric-looking or not.
    /// assert!(!Value::from("10").is_less_than(&Value::from(11i64)));
    /// ```
    #[inline]
    pub fn is_less_than(&self, other: &Value) -> bool {
        self.ordering_operands(other)
            .is_some_and(|(lhs, rhs)| lhs < rhs)
    }

    /// True iff this value orders below or equal to `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindcheck::Value;
    ///
    /// assert!(Value::from(10i64).is_less_than_or_equal_to(&Value::from(10.0f64)));
    /// assert!(!Value::from(10i64).is_less_than_or_equal_to(&Value::from(9i64)));
    /// ```
    #[inline]
    pub fn is_less_than_or_equal_to(&self, other: &Value) -> bool {
        self.ordering_operands(other)
            .is_some_and(|(lhs, rhs)| lhs <= rhs)
    }

    /// True iff this value orders strictly above `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindcheck::Value;
    ///
    /// assert!(Value::from(10.0f64).is_greater_than(&Value::from(9i64)));
    /// assert!(!Value::from(10.0f64).is_greater_than(&Value::from("10.0")));
    /// ```
    #[inline]
    pub fn is_greater_than(&self, other: &Value) -> bool {
        self.ordering_operands(other)
            .is_some_and(|(lhs, rhs)| lhs > rhs)
    }

    /// True iff this value orders above or equal to `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindcheck::Value;
    ///
    /// assert!(Value::from(10.0f64).is_greater_than_or_equal_to(&Value::from("10.0")));
    /// assert!(!Value::from(10.0f64).is_greater_than_or_equal_to(&Value::from(11i64)));
    /// ```
    #[inline]
    pub fn is_greater_than_or_equal_to(&self, other: &Value) -> bool {
        self.ordering_operands(other)
            .is_some_and(|(lhs, rhs)| lhs >= rhs)
    }

    /// Shared guard for the four ordering predicates. `None` means the pair
    /// does not order: bool on either side, string on the left, or a failed
    /// float coercion on either side.
    fn ordering_operands(&self, other: &Value) -> Option<(f32, f32)> {
        if self.is_bool() || other.is_bool() {
            trace_refused!(op = "ordering", "boolean operand excluded from ordering");
            return None;
        }
        if self.is_string() {
            trace_refused!(op = "ordering", "string-kind left operand excluded from ordering");
            return None;
        }
        match (self.to_float(), other.to_float()) {
            (Some(lhs), Some(rhs)) => Some((lhs, rhs)),
            _ => {
                trace_refused!(op = "ordering", "operand failed float coercion");
                None
            }
        }
    }
}
