//! Tessen - integration test support.
//!
//! Re-exports the workspace crates so integration tests can use
//! `tessen_test::` paths.

pub mod config {
    pub use tessen_core::config::*;
}

pub mod ical {
    pub use tessen_rfc::rfc::ical::core::*;
}

pub mod validation {
    pub use tessen_rfc::error::{RfcError, RfcResult};
    pub use tessen_rfc::rfc::validation::*;
}
