//! Constant presence tables for supported iTIP (component, method) pairs.

use std::fmt;

use super::cardinality::Cardinality;
use super::error::ValidationError;
use super::validator::RequestContext;
use crate::rfc::ical::core::{Component, ComponentKind, names};

/// One property row of a presence table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyRule {
    pub name: &'static str,
    pub bound: Cardinality,
}

/// One sub-component row of a presence table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentRule {
    pub kind: ComponentKind,
    pub bound: Cardinality,
}

const fn prop(name: &'static str, bound: Cardinality) -> PropertyRule {
    PropertyRule { name, bound }
}

const fn comp(kind: ComponentKind, bound: Cardinality) -> ComponentRule {
    ComponentRule { kind, bound }
}

/// A constraint spanning more than one row of a presence table.
///
/// Tables list these next to the cardinality rows. They are only checked
/// when cross-field enforcement is switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossFieldRule {
    /// The two properties must not both be present.
    MutuallyExclusive(&'static str, &'static str),
    /// A SEQUENCE greater than zero must equal the original request's.
    SequenceMatchesRequest,
    /// RECURRENCE-ID is only allowed when replying to an instance of a
    /// recurring component.
    RecurrenceIdOnlyForInstance,
    /// Every component of this kind below the calendar shares one UID.
    SameUid(ComponentKind),
}

impl CrossFieldRule {
    /// The property the constraint is about, for diagnostics.
    #[must_use]
    pub const fn subject(self) -> &'static str {
        match self {
            Self::MutuallyExclusive(first, _) => first,
            Self::SequenceMatchesRequest => names::SEQUENCE,
            Self::RecurrenceIdOnlyForInstance => names::RECURRENCE_ID,
            Self::SameUid(_) => names::UID,
        }
    }

    /// ## Summary
    /// Checks the constraint against `component`. For [`Self::SameUid`] the
    /// component is the enclosing VCALENDAR.
    ///
    /// Constraints that need facts about the original request pass when the
    /// context does not carry them.
    ///
    /// ## Errors
    /// Returns [`ValidationError::CrossField`] describing the conflict.
    pub fn check(
        self,
        component: &Component,
        context: &RequestContext,
    ) -> Result<(), ValidationError> {
        let violation = |detail: String| {
            Err(ValidationError::CrossField {
                rule: self,
                detail,
            })
        };

        match self {
            Self::MutuallyExclusive(first, second) => {
                if component.get_property(first).is_some()
                    && component.get_property(second).is_some()
                {
                    return violation(format!("{first} and {second} must not both be present"));
                }
            }
            Self::SequenceMatchesRequest => {
                if let (Some(sequence), Some(original)) =
                    (component.sequence(), context.original_sequence)
                    && sequence > 0
                    && sequence != original
                {
                    return violation(format!(
                        "SEQUENCE {sequence} does not match the request's {original}"
                    ));
                }
            }
            Self::RecurrenceIdOnlyForInstance => {
                if context.recurring == Some(false)
                    && component.get_property(names::RECURRENCE_ID).is_some()
                {
                    return violation(
                        "RECURRENCE-ID present but the request is not recurring".to_string(),
                    );
                }
            }
            Self::SameUid(kind) => {
                let mut uids: Vec<&str> = component
                    .children_of_kind(kind)
                    .into_iter()
                    .filter_map(Component::uid)
                    .collect();
                uids.sort_unstable();
                uids.dedup();
                if uids.len() > 1 {
                    return violation(format!(
                        "{kind} components carry {} different UIDs",
                        uids.len()
                    ));
                }
            }
        }

        Ok(())
    }
}

impl fmt::Display for CrossFieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MutuallyExclusive(first, second) => {
                write!(f, "{first}/{second} mutually exclusive")
            }
            Self::SequenceMatchesRequest => f.write_str("SEQUENCE matches request"),
            Self::RecurrenceIdOnlyForInstance => f.write_str("RECURRENCE-ID only for instances"),
            Self::SameUid(kind) => write!(f, "{kind} share UID"),
        }
    }
}

/// The presence table for one (component, method) pair.
///
/// Rows run in table order; the tables list one-or-more rows first, then
/// exactly-one, then zero-or-one, then documentation-only zero-or-more rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    pub component: ComponentKind,
    pub method: &'static str,
    pub properties: &'static [PropertyRule],
    pub components: &'static [ComponentRule],
    pub cross_field: &'static [CrossFieldRule],
    /// Rows checked against the enclosing VCALENDAR's children.
    pub calendar_components: &'static [ComponentRule],
    pub calendar_cross_field: &'static [CrossFieldRule],
}

impl RuleSet {
    /// Returns the bound for a property name, if the table knows it.
    #[must_use]
    pub fn property_bound(&self, name: &str) -> Option<Cardinality> {
        self.properties
            .iter()
            .find(|rule| rule.name.eq_ignore_ascii_case(name))
            .map(|rule| rule.bound)
    }

    /// Returns the bound for a sub-component kind, if the table knows it.
    #[must_use]
    pub fn component_bound(&self, kind: ComponentKind) -> Option<Cardinality> {
        self.components
            .iter()
            .find(|rule| rule.kind == kind)
            .map(|rule| rule.bound)
    }
}

/// VTODO with METHOD:REPLY (RFC 5546 §3.4.3).
///
/// ```text
/// Component/Property   Presence
/// VTODO                1+     All components MUST have the same UID
///     ATTENDEE         1+
///     DTSTAMP          1
///     ORGANIZER        1
///     UID              1
///     DUE/DURATION     0 or 1 If one is present the other MUST NOT be
///     RECURRENCE-ID    0 or 1 Only when replying to a recurrence instance
///     SEQUENCE         0 or 1 MUST match the original REQUEST if > 0
///     VALARM           0
/// VEVENT, VFREEBUSY    0
/// VTIMEZONE            0 or 1 MUST be present if any date/time refers to
///                             a timezone
/// ```
///
/// Only the upper bound of the VTIMEZONE row is checked; whether a date
/// actually refers to a timezone is left to timezone resolution.
///
/// COMMENT is listed as "0 or 1" in the RFC table but has never been
/// enforced here; it stays a zero-or-more row.
pub static TODO_REPLY: RuleSet = RuleSet {
    component: ComponentKind::Todo,
    method: "REPLY",
    properties: &[
        prop(names::ATTENDEE, Cardinality::OneOrMore),
        prop(names::DTSTAMP, Cardinality::One),
        prop(names::ORGANIZER, Cardinality::One),
        prop(names::UID, Cardinality::One),
        prop(names::CATEGORIES, Cardinality::OneOrLess),
        prop(names::CLASS, Cardinality::OneOrLess),
        prop(names::CREATED, Cardinality::OneOrLess),
        prop(names::DESCRIPTION, Cardinality::OneOrLess),
        prop(names::DTSTART, Cardinality::OneOrLess),
        prop(names::DUE, Cardinality::OneOrLess),
        prop(names::DURATION, Cardinality::OneOrLess),
        prop(names::GEO, Cardinality::OneOrLess),
        prop(names::LAST_MODIFIED, Cardinality::OneOrLess),
        prop(names::LOCATION, Cardinality::OneOrLess),
        prop(names::PERCENT_COMPLETE, Cardinality::OneOrLess),
        prop(names::PRIORITY, Cardinality::OneOrLess),
        prop(names::RESOURCES, Cardinality::OneOrLess),
        prop(names::RECURRENCE_ID, Cardinality::OneOrLess),
        prop(names::SEQUENCE, Cardinality::OneOrLess),
        prop(names::STATUS, Cardinality::OneOrLess),
        prop(names::SUMMARY, Cardinality::OneOrLess),
        prop(names::URL, Cardinality::OneOrLess),
        prop(names::REQUEST_STATUS, Cardinality::ZeroOrMore),
        prop(names::ATTACH, Cardinality::ZeroOrMore),
        prop(names::COMMENT, Cardinality::ZeroOrMore),
        prop(names::CONTACT, Cardinality::ZeroOrMore),
        prop(names::EXDATE, Cardinality::ZeroOrMore),
        prop(names::EXRULE, Cardinality::ZeroOrMore),
        prop(names::RDATE, Cardinality::ZeroOrMore),
        prop(names::RELATED_TO, Cardinality::ZeroOrMore),
        prop(names::RRULE, Cardinality::ZeroOrMore),
    ],
    components: &[comp(ComponentKind::Alarm, Cardinality::None)],
    cross_field: &[
        CrossFieldRule::MutuallyExclusive(names::DUE, names::DURATION),
        CrossFieldRule::SequenceMatchesRequest,
        CrossFieldRule::RecurrenceIdOnlyForInstance,
    ],
    calendar_components: &[
        comp(ComponentKind::Todo, Cardinality::OneOrMore),
        comp(ComponentKind::Event, Cardinality::None),
        comp(ComponentKind::FreeBusy, Cardinality::None),
        comp(ComponentKind::Timezone, Cardinality::OneOrLess),
    ],
    calendar_cross_field: &[CrossFieldRule::SameUid(ComponentKind::Todo)],
};
