use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Session expired. Please sign in again.")]
    Unauthorized,
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}

impl Error {
    /// Status code for HTTP-level failures, `None` for everything else.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            Error::Unauthorized => Some(401),
            _ => None,
        }
    }
}
