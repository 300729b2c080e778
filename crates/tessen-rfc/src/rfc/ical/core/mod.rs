//! iCalendar core models (RFC 5545).
//!
//! This module defines the structural tree a parser hands to validators:
//! components holding ordered properties and nested sub-components.
//! Unknown properties and X-components are preserved as-is.

mod component;
mod parameter;
mod property;
mod value;

pub use component::{Component, ComponentKind, ICalendar};
pub use parameter::Parameter;
pub use property::{Property, names};
pub use value::Value;
