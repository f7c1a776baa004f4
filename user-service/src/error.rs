// Service Errors
// Failures raised while talking to the users API

use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    /// Map a non-success HTTP status to the matching error variant
    pub fn from_status(status: reqwest::StatusCode, url: &url::Url) -> Self {
        if status == reqwest::StatusCode::NOT_FOUND {
            ServiceError::NotFound(url.path().to_string())
        } else {
            ServiceError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            }
        }
    }
}
