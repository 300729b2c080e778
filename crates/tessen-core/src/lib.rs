//! Shared configuration, error and logging plumbing for the Tessen crates.

pub mod config;
pub mod error;
pub mod logging;
