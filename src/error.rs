use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid target: {0}")]
    InvalidTarget(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Stable machine-readable name for the error category.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Error::NotFound(_) => "not_found",
            Error::InvalidTarget(_) => "invalid_target",
            Error::Conflict(_) => "conflict",
            Error::InvalidOperation(_) => "invalid_operation",
            Error::BadRequest(_) => "bad_request",
            Error::Config(_) => "config",
            Error::Database(_) | Error::Io(_) => "internal",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
