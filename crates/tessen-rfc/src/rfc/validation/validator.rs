//! Validator entry points.

use std::fmt;

use tessen_core::config::{ReportMode, ValidationConfig};

use super::cardinality::{assert_component, assert_property};
use super::error::{ValidationError, ValidationReport};
use super::rule_set::{RuleSet, TODO_REPLY};
use crate::error::{RfcError, RfcResult};
use crate::rfc::ical::core::{Component, ComponentKind, ICalendar, names};

/// Supported (component, method) pairs.
///
/// Each variant owns one constant [`RuleSet`]. Selecting the variant from an
/// incoming message's METHOD is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validator {
    /// VTODO in a METHOD:REPLY message.
    TodoReply,
}

/// Knobs for [`Validator::validate_with`] and [`Validator::validate_calendar`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    pub report: ReportMode,
    pub enforce_cross_field: bool,
}

impl From<&ValidationConfig> for ValidationOptions {
    fn from(config: &ValidationConfig) -> Self {
        Self {
            report: config.report,
            enforce_cross_field: config.enforce_cross_field,
        }
    }
}

/// Facts about the original REQUEST a reply answers.
///
/// Only consulted by cross-field constraints; unknown facts make the
/// corresponding constraint pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// SEQUENCE of the original request.
    pub original_sequence: Option<i32>,
    /// Whether the original request was a recurring component.
    pub recurring: Option<bool>,
}

impl RequestContext {
    #[must_use]
    pub fn with_sequence(sequence: i32) -> Self {
        Self {
            original_sequence: Some(sequence),
            recurring: None,
        }
    }

    /// ## Summary
    /// Collects the facts from the original request component.
    ///
    /// A request without SEQUENCE has sequence 0 (RFC 5545 §3.8.7.4). A
    /// SEQUENCE that is present but not a number leaves the sequence
    /// unknown.
    #[must_use]
    pub fn from_request(request: &Component) -> Self {
        let recurring = [names::RRULE, names::RDATE]
            .iter()
            .any(|name| request.get_property(name).is_some());
        let original_sequence = match request.get_property(names::SEQUENCE) {
            Some(sequence) => sequence.integer_value(),
            None => Some(0),
        };

        Self {
            original_sequence,
            recurring: Some(recurring),
        }
    }
}

impl Validator {
    /// Every supported pair.
    pub const ALL: &'static [Self] = &[Self::TodoReply];

    /// The presence table this validator enforces.
    #[must_use]
    pub fn rule_set(self) -> &'static RuleSet {
        match self {
            Self::TodoReply => &TODO_REPLY,
        }
    }

    /// Looks up the validator for a component kind and METHOD value
    /// (case-insensitive).
    #[must_use]
    pub fn for_component(kind: ComponentKind, method: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|validator| {
            let rules = validator.rule_set();
            rules.component == kind && rules.method.eq_ignore_ascii_case(method)
        })
    }

    /// ## Summary
    /// Like [`Validator::for_component`], but unsupported pairs are an error.
    ///
    /// ## Errors
    /// Returns [`RfcError::UnsupportedMethod`] if no rule set covers the pair.
    pub fn select(kind: ComponentKind, method: &str) -> RfcResult<Self> {
        Self::for_component(kind, method).ok_or_else(|| RfcError::UnsupportedMethod {
            component: kind.to_string(),
            method: method.to_string(),
        })
    }

    /// ## Summary
    /// Checks `component` against the rule set, stopping at the first
    /// violation.
    ///
    /// Rows run in table order: one-or-more, exactly-one, zero-or-one, then
    /// sub-component rows. Cross-field notes are not checked.
    ///
    /// ## Errors
    /// Returns the first violated rule.
    #[tracing::instrument(level = "debug", skip_all, fields(validator = %self, component = %component.name))]
    pub fn validate(self, component: &Component) -> Result<(), ValidationError> {
        let result = self
            .checks(component, &ValidationOptions::default(), &RequestContext::default())
            .collect::<Result<(), _>>();

        if let Err(error) = &result {
            tracing::debug!(%error, "Validation failed");
        }

        result
    }

    /// ## Summary
    /// Checks `component` against every row of the rule set and reports all
    /// violations in table order.
    ///
    /// Succeeds exactly when [`Validator::validate`] succeeds.
    ///
    /// ## Errors
    /// Returns a report listing every violated rule.
    #[tracing::instrument(level = "debug", skip_all, fields(validator = %self, component = %component.name))]
    pub fn validate_all(self, component: &Component) -> Result<(), ValidationReport> {
        let options = ValidationOptions {
            report: ReportMode::Collect,
            enforce_cross_field: false,
        };
        self.validate_with(component, &options, &RequestContext::default())
    }

    /// ## Summary
    /// Checks `component` using explicit options. With cross-field
    /// enforcement on, the table's constraints run after the cardinality
    /// rows, using `context` for facts about the original request.
    ///
    /// ## Errors
    /// Returns the violations found; in fail-fast mode the report holds
    /// exactly one.
    #[tracing::instrument(level = "debug", skip_all, fields(validator = %self, component = %component.name))]
    pub fn validate_with(
        self,
        component: &Component,
        options: &ValidationOptions,
        context: &RequestContext,
    ) -> Result<(), ValidationReport> {
        let result = report(options.report, self.checks(component, options, context));

        match &result {
            Ok(()) => tracing::trace!("Validation passed"),
            Err(report) => tracing::debug!(count = report.len(), %report, "Validation failed"),
        }

        result
    }

    /// ## Summary
    /// Checks a whole iTIP message: the calendar-level component rows, the
    /// calendar-level cross-field rows when enabled, then every component of
    /// the validator's kind.
    ///
    /// ## Errors
    /// Returns the violations found, honoring `options.report`.
    #[tracing::instrument(level = "debug", skip_all, fields(validator = %self))]
    pub fn validate_calendar(
        self,
        calendar: &ICalendar,
        options: &ValidationOptions,
        context: &RequestContext,
    ) -> Result<(), ValidationReport> {
        let rules = self.rule_set();
        let root = &calendar.root;

        let calendar_rows = rules
            .calendar_components
            .iter()
            .map(|rule| assert_component(rule.kind, &root.children, rule.bound));
        let calendar_constraints = rules
            .calendar_cross_field
            .iter()
            .filter(|_| options.enforce_cross_field)
            .map(|rule| rule.check(root, context));
        let members = root
            .children_of_kind(rules.component)
            .into_iter()
            .flat_map(|member| self.checks(member, options, context));

        let result = report(
            options.report,
            calendar_rows.chain(calendar_constraints).chain(members),
        );

        if let Err(report) = &result {
            tracing::debug!(count = report.len(), %report, "Calendar validation failed");
        }

        result
    }

    fn checks<'a>(
        self,
        component: &'a Component,
        options: &'a ValidationOptions,
        context: &'a RequestContext,
    ) -> impl Iterator<Item = Result<(), ValidationError>> + 'a {
        let rules = self.rule_set();

        let properties = rules
            .properties
            .iter()
            .map(move |rule| assert_property(rule.name, &component.properties, rule.bound));
        let components = rules
            .components
            .iter()
            .map(move |rule| assert_component(rule.kind, &component.children, rule.bound));
        let constraints = rules
            .cross_field
            .iter()
            .filter(move |_| options.enforce_cross_field)
            .map(move |rule| rule.check(component, context));

        properties.chain(components).chain(constraints)
    }
}

fn report(
    mode: ReportMode,
    mut checks: impl Iterator<Item = Result<(), ValidationError>>,
) -> Result<(), ValidationReport> {
    match mode {
        ReportMode::FailFast => match checks.find_map(Result::err) {
            Some(error) => Err(error.into()),
            None => Ok(()),
        },
        ReportMode::Collect => {
            match ValidationReport::from_errors(checks.filter_map(Result::err).collect()) {
                Some(report) => Err(report),
                None => Ok(()),
            }
        }
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rules = self.rule_set();
        write!(f, "{}/{}", rules.component, rules.method)
    }
}
