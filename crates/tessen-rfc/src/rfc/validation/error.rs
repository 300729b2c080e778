use std::fmt;

use thiserror::Error;

use super::cardinality::Cardinality;
use super::rule_set::CrossFieldRule;

/// What a cardinality failure was counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Property,
    Component,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Property => f.write_str("Property"),
            Self::Component => f.write_str("Component"),
        }
    }
}

/// A violated rule-table row.
///
/// The `Display` output is meant to be shown to users as-is, e.g.
/// `Property [DTSTAMP] must be specified once (expected 1, found 2)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{scope} [{name}] {} (expected {expected}, found {actual})", .expected.requirement())]
    Cardinality {
        scope: Scope,
        name: String,
        expected: Cardinality,
        actual: usize,
    },

    #[error("Constraint [{rule}] violated: {detail}")]
    CrossField { rule: CrossFieldRule, detail: String },
}

impl ValidationError {
    /// Name of the property or component the failure is about.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Cardinality { name, .. } => name,
            Self::CrossField { rule, .. } => rule.subject(),
        }
    }

    #[must_use]
    pub fn scope(&self) -> Option<Scope> {
        match self {
            Self::Cardinality { scope, .. } => Some(*scope),
            Self::CrossField { .. } => None,
        }
    }

    #[must_use]
    pub fn expected(&self) -> Option<Cardinality> {
        match self {
            Self::Cardinality { expected, .. } => Some(*expected),
            Self::CrossField { .. } => None,
        }
    }

    #[must_use]
    pub fn actual(&self) -> Option<usize> {
        match self {
            Self::Cardinality { actual, .. } => Some(*actual),
            Self::CrossField { .. } => None,
        }
    }
}

/// Every violation found by a collecting validation run, in check order.
///
/// Never empty when returned as an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} validation error(s); {}", .errors.len(), joined(.errors))]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Wraps a list of failures. Returns `None` when there is nothing to report.
    #[must_use]
    pub fn from_errors(errors: Vec<ValidationError>) -> Option<Self> {
        (!errors.is_empty()).then_some(Self { errors })
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// The failure a fail-fast run would have stopped at.
    #[must_use]
    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl From<ValidationError> for ValidationReport {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

fn joined(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
