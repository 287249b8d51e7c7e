//! The closed set of semantic kinds
//!
//! Every [`Value`](crate::Value) carries exactly one `Kind`, assigned at
//! construction and never changed. The six kinds cover text, three fixed-width
//! numeric representations, a boxed numeric, and booleans.
//!
//! # Examples
//!
//! ```
//! use kindcheck::Kind;
//!
//! assert_eq!(Kind::Double.as_str(), "double");
//! assert_eq!("double".parse::<Kind>(), Ok(Kind::Double));
//! assert_eq!(Kind::ALL.len(), 6);
//! ```

use std::fmt;
use std::str::FromStr;

/// Semantic tag identifying a value's kind.
///
/// The set is closed: there are exactly six kinds and no mechanism for adding
/// more. `Number` is the boxed/generic numeric kind, distinct from the
/// fixed-width `Int`, `Float`, and `Double` kinds.
///
/// # Examples
///
/// ```
/// use kindcheck::{Kind, Value};
///
/// assert_eq!(Value::from(10i64).kind(), Kind::Int);
/// assert_eq!(Value::from("ten").kind(), Kind::String);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Textual values.
    String,
    /// 64-bit signed integers.
    Int,
    /// Single-precision floats.
    Float,
    /// Double-precision floats.
    Double,
    /// Boxed numerics with no fixed width (see [`Number`](crate::Number)).
    Number,
    /// Booleans.
    Bool,
}

impl Kind {
    /// All six kinds in declaration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindcheck::Kind;
    ///
    /// assert_eq!(Kind::ALL[0], Kind::String);
    /// assert_eq!(Kind::ALL[5], Kind::Bool);
    /// ```
    pub const ALL: [Kind; 6] = [
        Kind::String,
        Kind::Int,
        Kind::Float,
        Kind::Double,
        Kind::Number,
        Kind::Bool,
    ];

    /// Canonical lowercase name of this kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindcheck::Kind;
    ///
    /// assert_eq!(Kind::Number.as_str(), "number");
    /// ```
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Double => "double",
            Kind::Number => "number",
            Kind::Bool => "bool",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown kind name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError {
    name: String,
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown kind name: {:?}", self.name)
    }
}

impl std::error::Error for ParseKindError {}

impl FromStr for Kind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(Kind::String),
            "int" => Ok(Kind::Int),
            "float" => Ok(Kind::Float),
            "double" => Ok(Kind::Double),
            "number" => Ok(Kind::Number),
            "bool" => Ok(Kind::Bool),
            other => Err(ParseKindError {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_round_trips_through_from_str() {
        for kind in Kind::ALL {
            assert_eq!(kind.as_str().parse::<Kind>(), Ok(kind));
        }
    }

    #[test]
    fn test_display_matches_as_str() {
        for kind in Kind::ALL {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let err = "decimal".parse::<Kind>().unwrap_err();
        assert!(err.to_string().contains("decimal"));
    }

    #[test]
    fn test_all_kinds_are_distinct() {
        for (i, a) in Kind::ALL.iter().enumerate() {
            for (j, b) in Kind::ALL.iter().enumerate() {
                assert_eq!(a == b, i == j);
            }
        }
    }
}
