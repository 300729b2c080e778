//! iTIP cardinality validation (RFC 5546 §3).
//!
//! Each supported (component, method) pair carries a constant [`RuleSet`].
//! A [`Validator`] runs that table against an already-parsed component,
//! delegating every row to the property or sub-component checkers in
//! [`cardinality`].

pub mod cardinality;
mod error;
mod rule_set;
mod validator;

#[cfg(test)]
mod tests;

pub use cardinality::{
    Cardinality, assert_component, assert_no_component, assert_none, assert_one,
    assert_one_or_less, assert_one_or_more, assert_property,
};
pub use error::{Scope, ValidationError, ValidationReport};
pub use rule_set::{ComponentRule, CrossFieldRule, PropertyRule, RuleSet, TODO_REPLY};
pub use tessen_core::config::ReportMode;
pub use validator::{RequestContext, ValidationOptions, Validator};
