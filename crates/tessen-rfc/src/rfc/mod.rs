//! RFC 5545 / RFC 5546 data model and rule checking.

pub mod ical;
pub mod validation;
