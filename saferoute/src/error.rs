use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{what} exceeds limit ({got} > {limit})")]
    LimitExceeded { what: &'static str, limit: usize, got: usize },
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Stable machine-readable code, used by the wasm envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidInput(_) => "invalid_input",
            Error::LimitExceeded { .. } => "limit_exceeded",
            Error::Json(_) => "bad_json",
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
