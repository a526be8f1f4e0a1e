use thiserror::Error;

/// Uniform error taxonomy for every backend operation.
///
/// Flow stores surface these verbatim; nothing in the client retries.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    ///
    /// `message` is the JSON `message` field when the body carries one,
    /// otherwise the raw body.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body did not decode into the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The HTTP status, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend rejected the request (as opposed to the request
    /// never reaching it or the answer being unreadable).
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
