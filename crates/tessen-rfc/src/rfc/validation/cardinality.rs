//! Property and sub-component occurrence checks.
//!
//! These are the primitives every rule table row delegates to. They are
//! pure: count, compare against the bound, and describe the mismatch.

use serde::{Deserialize, Serialize};

use super::error::{Scope, ValidationError};
use crate::rfc::ical::core::{Component, ComponentKind, Property};

/// Allowed number of occurrences of a property or sub-component.
///
/// `Display` renders the notation used by the RFC 5546 presence tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cardinality {
    /// Exactly one.
    One,
    /// Zero or one.
    OneOrLess,
    /// At least one.
    OneOrMore,
    /// Any number. Never fails; kept so tables document every known name.
    ZeroOrMore,
    /// Must not appear.
    None,
}

impl Cardinality {
    /// Returns whether `count` occurrences satisfy this bound.
    #[must_use]
    pub const fn permits(self, count: usize) -> bool {
        match self {
            Self::One => count == 1,
            Self::OneOrLess => count <= 1,
            Self::OneOrMore => count >= 1,
            Self::ZeroOrMore => true,
            Self::None => count == 0,
        }
    }

    /// Presence-table notation (`1`, `0 or 1`, `1+`, `0+`, `0`).
    #[must_use]
    pub const fn notation(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::OneOrLess => "0 or 1",
            Self::OneOrMore => "1+",
            Self::ZeroOrMore => "0+",
            Self::None => "0",
        }
    }

    /// Human-readable requirement used in diagnostics.
    #[must_use]
    pub const fn requirement(self) -> &'static str {
        match self {
            Self::One => "must be specified once",
            Self::OneOrLess => "must not be specified more than once",
            Self::OneOrMore => "must be specified at least once",
            Self::ZeroOrMore => "may be specified any number of times",
            Self::None => "must not be specified",
        }
    }
}

impl std::fmt::Display for Cardinality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.notation())
    }
}

fn check(
    scope: Scope,
    name: &str,
    expected: Cardinality,
    actual: usize,
) -> Result<(), ValidationError> {
    if expected.permits(actual) {
        return Ok(());
    }

    tracing::trace!(%scope, name, %expected, actual, "Cardinality violated");

    Err(ValidationError::Cardinality {
        scope,
        name: name.to_string(),
        expected,
        actual,
    })
}

/// ## Summary
/// Counts properties called `name` (case-insensitive) and checks the count
/// against `expected`.
///
/// ## Errors
/// Returns [`ValidationError::Cardinality`] with the observed count if the
/// bound is not met.
pub fn assert_property(
    name: &str,
    properties: &[Property],
    expected: Cardinality,
) -> Result<(), ValidationError> {
    if expected == Cardinality::ZeroOrMore {
        return Ok(());
    }

    let actual = properties.iter().filter(|p| p.is_named(name)).count();
    check(Scope::Property, name, expected, actual)
}

/// ## Summary
/// Checks that exactly one `name` property is present.
///
/// ## Errors
/// Returns an error if the property is missing or repeated.
pub fn assert_one(name: &str, properties: &[Property]) -> Result<(), ValidationError> {
    assert_property(name, properties, Cardinality::One)
}

/// ## Summary
/// Checks that `name` appears at most once.
///
/// ## Errors
/// Returns an error if the property is repeated.
pub fn assert_one_or_less(name: &str, properties: &[Property]) -> Result<(), ValidationError> {
    assert_property(name, properties, Cardinality::OneOrLess)
}

/// ## Summary
/// Checks that `name` appears at least once.
///
/// ## Errors
/// Returns an error if the property is missing.
pub fn assert_one_or_more(name: &str, properties: &[Property]) -> Result<(), ValidationError> {
    assert_property(name, properties, Cardinality::OneOrMore)
}

/// ## Summary
/// Checks that `name` does not appear.
///
/// ## Errors
/// Returns an error if the property is present.
pub fn assert_none(name: &str, properties: &[Property]) -> Result<(), ValidationError> {
    assert_property(name, properties, Cardinality::None)
}

/// ## Summary
/// Counts nested components of `kind` and checks the count against `expected`.
///
/// ## Errors
/// Returns [`ValidationError::Cardinality`] with the observed count if the
/// bound is not met.
pub fn assert_component(
    kind: ComponentKind,
    children: &[Component],
    expected: Cardinality,
) -> Result<(), ValidationError> {
    if expected == Cardinality::ZeroOrMore {
        return Ok(());
    }

    let actual = children.iter().filter(|c| c.kind == Some(kind)).count();
    check(Scope::Component, kind.as_str(), expected, actual)
}

/// ## Summary
/// Checks that no nested component of `kind` is present.
///
/// ## Errors
/// Returns an error if at least one such component exists.
pub fn assert_no_component(
    kind: ComponentKind,
    children: &[Component],
) -> Result<(), ValidationError> {
    assert_component(kind, children, Cardinality::None)
}
