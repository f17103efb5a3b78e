//! Error types for the fantasy draft board API

use reqwest::StatusCode;
use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, FflError>;

#[derive(Error, Debug)]
pub enum FflError {
    #[error("SportsData API key not configured; set the {env_var} environment variable")]
    MissingApiKey { env_var: String },

    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Upstream returned malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid query: {message}")]
    InvalidQuery { message: String },

    #[error("Player not found: {id}")]
    PlayerNotFound { id: i64 },
}

impl FflError {
    /// HTTP status reported to API clients for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            FflError::InvalidQuery { .. } => StatusCode::BAD_REQUEST,
            FflError::PlayerNotFound { .. } => StatusCode::NOT_FOUND,
            FflError::Upstream(err) if err.status() == Some(StatusCode::NOT_FOUND) => {
                StatusCode::NOT_FOUND
            }
            FflError::Upstream(_) | FflError::Decode(_) => StatusCode::BAD_GATEWAY,
            FflError::MissingApiKey { .. } | FflError::Task(_) | FflError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
