use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response; `message` carries the server-supplied error text
    /// when one could be extracted, otherwise an operation-specific fallback.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error("request failed")]
    Transport(#[from] reqwest::Error),

    #[error("invalid JSON response: {body}")]
    InvalidJson { body: String },

    #[error("unexpected response shape")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),

    #[error("token store error")]
    TokenStore(#[source] std::io::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
