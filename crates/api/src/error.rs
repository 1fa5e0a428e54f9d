use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout(e.to_string())
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e)
        }
    }
}

impl ApiError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "Network error. Check your connection.",
            ApiError::Timeout(_) => "Request timed out. Please try again.",
            ApiError::Status { status, .. } if *status >= 500 => {
                "Server error. Please try again later."
            }
            ApiError::Status { .. } => "Request rejected by the server.",
            ApiError::Decode(_) => "Unexpected response from the server.",
            ApiError::Validation(_) => "Invalid input. Please check the form.",
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network(_) | ApiError::Timeout(_) => true,
            ApiError::Status { status, .. } => *status >= 500,
            ApiError::Decode(_) | ApiError::Validation(_) => false,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
