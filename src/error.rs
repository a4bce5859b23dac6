use reqwest::StatusCode;
use thiserror::Error;

/// Failures of the activities backend, displayed to the user as-is.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to fetch activities")]
    ListingUnavailable { status: StatusCode },

    /// Non-2xx answer to signup or unregister; `detail` is already resolved to the
    /// backend text or a fallback.
    #[error("{detail}")]
    Rejected { status: StatusCode, detail: String },

    #[error("base url {0} cannot carry a path")]
    InvalidBaseUrl(String),

    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::ListingUnavailable { status } | ClientError::Rejected { status, .. } => {
                Some(*status)
            }
            ClientError::Http(e) => e.status(),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
#[error(transparent)]
pub struct LoadError(#[from] pub ClientError);

impl LoadError {
    pub fn status(&self) -> Option<StatusCode> {
        self.0.status()
    }
}

#[derive(Debug, Error)]
pub enum SignupError {
    #[error("Please provide an email and select an activity.")]
    MissingFields,

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl SignupError {
    /// HTTP status behind the failure; `None` when no request was answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SignupError::MissingFields => None,
            SignupError::Client(e) => e.status(),
        }
    }
}
