use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("could not reach prediction service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API {status}\n{detail}")]
    Rejected { status: u16, detail: String },

    #[error("invalid JSON from backend:\n{body}")]
    InvalidJson { body: String },

    #[error("missing/NaN fields in response:\n{body}")]
    MissingFields { body: String },

    #[error("prediction client config error: {0}")]
    Config(String),
}

/// Coarse classification of a failed prediction, for callers that need to
/// tell an unreachable service apart from an unusable answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The request never completed.
    Transport,
    /// The service answered with a non-2xx status.
    Rejected,
    /// The service answered 2xx but the body was unusable.
    ResponseFormat,
}

impl PredictError {
    pub fn kind(&self) -> FailureKind {
        match self {
            PredictError::Transport(_) | PredictError::Config(_) => FailureKind::Transport,
            PredictError::Rejected { .. } => FailureKind::Rejected,
            PredictError::InvalidJson { .. } | PredictError::MissingFields { .. } => {
                FailureKind::ResponseFormat
            }
        }
    }
}
