//! Regular-expression matching
//!
//! [`Value::matches`] runs a pattern against the value's textual rendering
//! and reports whether at least one match exists anywhere in the text; the
//! pattern anchors only if it says so itself. Bool-kind values never match:
//! their `true`/`false` rendering would satisfy far too many patterns to be a
//! meaningful validation answer, so the kind is refused before the text is
//! consulted.
//!
//! A pattern that does not compile is a caller programming error, not a
//! validation outcome, and surfaces as [`PatternError`] rather than a silent
//! `false`.

use std::fmt;

use regex::Regex;

use super::Value;

/// Error for a pattern string that failed to compile as a regular expression.
///
/// Carries the offending pattern and delegates to the regex crate's error as
/// its [`source`](std::error::Error::source).
///
/// # Examples
///
/// ```
/// use kindcheck::Value;
///
/// let err = Value::from("text").matches("[unclosed").unwrap_err();
/// assert!(err.to_string().contains("[unclosed"));
/// ```
#[derive(Debug, Clone)]
pub struct PatternError {
    pattern: String,
    source: regex::Error,
}

impl PatternError {
    /// The pattern string that failed to compile.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid pattern {:?}: {}", self.pattern, self.source)
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl Value {
    /// Test whether `pattern` matches anywhere in this value's text.
    ///
    /// Compiles `pattern` on every call. Callers that reuse a pattern should
    /// compile once and use [`matches_regex`](Value::matches_regex).
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when `pattern` is not a valid regular
    /// expression.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindcheck::Value;
    ///
    /// let id = Value::from(1321321i64);
    /// assert!(id.matches("^[0-9]+$").unwrap());
    /// assert!(!id.matches("^[a-zA-Z]+$").unwrap());
    ///
    /// // Unanchored by default: any match anywhere counts.
    /// assert!(Value::from("order-42").matches("[0-9]+").unwrap());
    ///
    /// // Booleans never match.
    /// assert!(!Value::from(true).matches("^(true|false)$").unwrap());
    /// ```
    pub fn matches(&self, pattern: &str) -> Result<bool, PatternError> {
        let re = Regex::new(pattern).map_err(|source| PatternError {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(self.matches_regex(&re))
    }

    /// [`matches`](Value::matches) with a precompiled pattern; infallible.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindcheck::Value;
    /// use regex::Regex;
    ///
    /// let digits = Regex::new("^[0-9]+$").unwrap();
    /// assert!(Value::from(7i64).matches_regex(&digits));
    /// assert!(!Value::from("7a").matches_regex(&digits));
    /// ```
    pub fn matches_regex(&self, re: &Regex) -> bool {
        if self.is_bool() {
            return false;
        }
        re.is_match(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use crate::Value;
    use regex::Regex;

    #[test]
    fn test_integer_text_matches_digit_pattern() {
        let v = Value::from(1321321i64);
        assert!(v.matches("^[0-9]+$").unwrap());
        assert!(!v.matches("^[a-zA-Z]+$").unwrap());
    }

    #[test]
    fn test_string_matching_is_case_exact() {
        assert!(Value::from("askdjhask").matches("^[a-z]+$").unwrap());
        assert!(Value::from("askSSdjhDask").matches("^[a-zA-Z]+$").unwrap());
        assert!(!Value::from("askSSdjhDask").matches("^[a-zA-Z]{1,5}$").unwrap());
        assert!(!Value::from("askSSdjhDask").matches("^[0-9]+$").unwrap());
    }

    #[test]
    fn test_unanchored_pattern_matches_anywhere() {
        assert!(Value::from("abc 123 def").matches("[0-9]+").unwrap());
        assert!(!Value::from("abc def").matches("[0-9]+").unwrap());
    }

    #[test]
    fn test_booleans_never_match() {
        for v in [Value::from(true), Value::from(false)] {
            assert!(!v.matches("^(true|false)$").unwrap());
            assert!(!v.matches(".*").unwrap());
        }
    }

    #[test]
    fn test_double_rendering_is_what_gets_matched() {
        // 10.0 renders as "10.0", so a digits-only pattern misses.
        let v = Value::from(10.0f64);
        assert!(!v.matches("^[0-9]+$").unwrap());
        assert!(v.matches(r"^[0-9]+\.[0-9]+$").unwrap());
    }

    #[test]
    fn test_invalid_pattern_is_an_error_not_false() {
        let err = Value::from("text").matches("[unclosed").unwrap_err();
        assert!(err.to_string().contains("[unclosed"));
        assert_eq!(err.pattern(), "[unclosed");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_precompiled_pattern_agrees_with_matches() {
        let re = Regex::new("^[0-9]+$").unwrap();
        for v in [Value::from(123i64), Value::from("123"), Value::from("12a")] {
            assert_eq!(v.matches_regex(&re), v.matches("^[0-9]+$").unwrap(), "{v:?}");
        }
    }
}
