use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Session expired - authorization rejected by server")]
    AuthExpired,

    #[error("Server returned {status}: {body}")]
    Server {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid authorization header: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid logging excessive data.
    /// The cut is backed off to a char boundary so multibyte text never
    /// splits mid-character.
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let mut end = MAX_ERROR_BODY_LENGTH;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..end],
                body.len()
            )
        }
    }

    /// Classify a non-success response. 401 signals session expiry; every
    /// other status is surfaced as-is with no status-specific handling.
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        match status.as_u16() {
            401 => ApiError::AuthExpired,
            _ => ApiError::Server {
                status,
                body: Self::truncate_body(body),
            },
        }
    }

    /// Whether this error is the server rejecting the stored credential
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, ApiError::AuthExpired)
    }
}
