use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Code used when an error response carries no recognizable envelope.
pub const UNKNOWN_ERROR_CODE: &str = "UNKNOWN_ERROR";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A non-2xx response, described by the server's error envelope.
    #[error("API error {status} {code}: {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Session storage error: {0}")]
    Storage(String),
}

impl ClientError {
    /// The server's error code, if this error came from an error envelope.
    pub fn code(&self) -> Option<&str> {
        match self {
            ClientError::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}
