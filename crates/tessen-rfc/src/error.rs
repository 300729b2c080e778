use thiserror::Error;

use crate::rfc::validation::{ValidationError, ValidationReport};

/// RFC validation errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    ValidationReport(#[from] ValidationReport),

    #[error("Unsupported component/method pair: {component} {method}")]
    UnsupportedMethod { component: String, method: String },

    #[error(transparent)]
    CoreError(#[from] tessen_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
