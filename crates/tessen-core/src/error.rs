use thiserror::Error;

/// Core-level errors.
///
/// Configuration loading reports through `anyhow` at the process boundary;
/// this enum covers failures library callers match on.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Logging setup error: {0}")]
    LoggingError(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
