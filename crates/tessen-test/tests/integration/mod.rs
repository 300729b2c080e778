//! Integration tests for the validation surface.
//!
//! ## Running Tests
//!
//! ```sh
//! cargo test -p tessen-test --test validation_integration
//! ```

mod helpers;
mod settings;
mod todo_reply;
