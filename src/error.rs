use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Everything that can go wrong while talking to the prediction backend.
/// Every variant is terminal for the submission that produced it: a single
/// message is surfaced and the user may correct input and resubmit.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input rejected locally, before any network call was made.
    #[error("{0}")]
    Validation(String),

    /// The deadline fired before a response arrived. Distinct from
    /// [`ApiError::Transport`] so a cold-starting backend is not reported as a
    /// generic network failure.
    #[error(
        "request timed out after {waited:?} - backend server may be starting up (first request can take up to 2 minutes)"
    )]
    Timeout { waited: Duration },

    /// The request itself failed: connection refused, DNS, TLS.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status from the backend; `message` carries the body's
    /// `error` field verbatim when one was present.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// Success status whose body did not decode as the expected shape.
    #[error("backend returned an unexpected response (status {status})")]
    UnexpectedBody {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    /// Local file access on the upload or download side of a call.
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for backend calls and submission flows.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
