//! iCalendar component model and iTIP cardinality validation.

pub mod error;
pub mod rfc;
