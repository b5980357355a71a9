/// Crate-wide result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Typed errors for detect-intent calls.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Transport-level failure talking to the Dialogflow endpoint.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("detect intent failed ({status}): {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// No usable access token for the request.
    #[error("token acquisition failed: {message}")]
    Token { message: String },
}

impl EngineError {
    #[must_use]
    pub fn token(message: impl std::fmt::Display) -> Self {
        Self::Token {
            message: message.to_string(),
        }
    }
}
