//! iCalendar parameter types (RFC 5545 §3.2).

/// A single property parameter, e.g. the `PARTSTAT=ACCEPTED` in
/// `ATTENDEE;PARTSTAT=ACCEPTED:mailto:jane@example.com`.
///
/// Presence tables never look at parameters; they ride along so fixtures
/// read like real replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name (normalized to uppercase).
    pub name: String,
    /// Parameter value as written, comma-separated lists included.
    pub value: String,
}

impl Parameter {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            value: value.into(),
        }
    }

    /// `CN` (common name).
    #[must_use]
    pub fn cn(name: impl Into<String>) -> Self {
        Self::new("CN", name)
    }

    /// `PARTSTAT` (participation status).
    #[must_use]
    pub fn partstat(status: impl Into<String>) -> Self {
        Self::new("PARTSTAT", status)
    }
}
