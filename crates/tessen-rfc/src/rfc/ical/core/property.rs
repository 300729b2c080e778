//! iCalendar property types (RFC 5545 §3.1, §3.8).

use super::{Parameter, Value};

/// A parsed iCalendar property.
///
/// Contains the parsed value along with the original raw value
/// for round-trip fidelity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Parsed value.
    pub value: Value,
    /// Original raw value string (for round-trip).
    pub raw_value: String,
}

impl Property {
    fn with_value(name: impl Into<String>, value: Value, raw_value: String) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value,
            raw_value,
        }
    }

    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value_str = value.into();
        Self::with_value(name, Value::Text(value_str.clone()), value_str)
    }

    /// Creates a property with an integer value.
    #[must_use]
    pub fn integer(name: impl Into<String>, value: i32) -> Self {
        Self::with_value(name, Value::Integer(value), value.to_string())
    }

    /// Creates a property with a CAL-ADDRESS value (ATTENDEE, ORGANIZER).
    #[must_use]
    pub fn cal_address(name: impl Into<String>, address: impl Into<String>) -> Self {
        let address = address.into();
        Self::with_value(name, Value::CalAddress(address.clone()), address)
    }

    /// Creates a property whose value was left unparsed.
    #[must_use]
    pub fn raw(name: impl Into<String>, raw_value: impl Into<String>) -> Self {
        let raw_value = raw_value.into();
        Self::with_value(name, Value::Unknown(raw_value.clone()), raw_value)
    }

    /// Returns whether this property has the given name (case-insensitive).
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Adds a parameter to this property.
    pub fn add_param(&mut self, param: Parameter) {
        self.params.push(param);
    }

    /// Builder-style variant of [`Property::add_param`].
    #[must_use]
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.add_param(param);
        self
    }

    /// Returns the value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_text()
    }

    /// Returns the value as an integer if it is an integer value.
    #[must_use]
    pub fn as_integer(&self) -> Option<i32> {
        self.value.as_integer()
    }

    /// Returns the value as an integer, parsing the raw text when the parser
    /// left it unparsed.
    #[must_use]
    pub fn integer_value(&self) -> Option<i32> {
        self.as_integer()
            .or_else(|| self.raw_value.trim().parse().ok())
    }

    /// Returns the value as text, or the raw value for non-text values.
    #[must_use]
    pub fn text_value(&self) -> &str {
        self.as_text().unwrap_or(&self.raw_value)
    }
}

/// Property names used by the iTIP rule tables.
pub mod names {
    // Descriptive component properties
    pub const ATTACH: &str = "ATTACH";
    pub const CATEGORIES: &str = "CATEGORIES";
    pub const CLASS: &str = "CLASS";
    pub const COMMENT: &str = "COMMENT";
    pub const DESCRIPTION: &str = "DESCRIPTION";
    pub const GEO: &str = "GEO";
    pub const LOCATION: &str = "LOCATION";
    pub const PERCENT_COMPLETE: &str = "PERCENT-COMPLETE";
    pub const PRIORITY: &str = "PRIORITY";
    pub const RESOURCES: &str = "RESOURCES";
    pub const STATUS: &str = "STATUS";
    pub const SUMMARY: &str = "SUMMARY";

    // Date and time properties
    pub const DTSTART: &str = "DTSTART";
    pub const DUE: &str = "DUE";
    pub const DURATION: &str = "DURATION";

    // Relationship properties
    pub const ATTENDEE: &str = "ATTENDEE";
    pub const CONTACT: &str = "CONTACT";
    pub const ORGANIZER: &str = "ORGANIZER";
    pub const RECURRENCE_ID: &str = "RECURRENCE-ID";
    pub const RELATED_TO: &str = "RELATED-TO";
    pub const URL: &str = "URL";
    pub const UID: &str = "UID";

    // Recurrence properties
    pub const EXDATE: &str = "EXDATE";
    pub const EXRULE: &str = "EXRULE";
    pub const RDATE: &str = "RDATE";
    pub const RRULE: &str = "RRULE";

    // Change management properties
    pub const CREATED: &str = "CREATED";
    pub const DTSTAMP: &str = "DTSTAMP";
    pub const LAST_MODIFIED: &str = "LAST-MODIFIED";
    pub const SEQUENCE: &str = "SEQUENCE";

    // Miscellaneous
    pub const REQUEST_STATUS: &str = "REQUEST-STATUS";
}
