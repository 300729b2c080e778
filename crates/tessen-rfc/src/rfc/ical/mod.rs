//! iCalendar (RFC 5545) support.
//!
//! Text parsing and serialization live outside this crate; the types here are
//! what a parser produces and what validators consume.

pub mod core;
