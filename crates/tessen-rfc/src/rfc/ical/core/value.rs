//! iCalendar property values (RFC 5545 §3.3).
//!
//! Cardinality checks only look at property names, so values are kept as
//! loosely typed as the parser hands them over.

/// Value types a reply carries.
///
/// The raw string is preserved separately on [`super::Property`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// CAL-ADDRESS value (typically mailto: URI).
    CalAddress(String),
    /// INTEGER value.
    Integer(i32),
    /// TEXT value (unescaped).
    Text(String),
    /// Unparsed value, e.g. a DATE-TIME the parser left raw.
    Unknown(String),
}

impl Value {
    /// Returns this value as text, if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns this value as an integer, if it is an integer value.
    #[must_use]
    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }
}
