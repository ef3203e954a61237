use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShiftError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// The session is missing or expired; the user has to log in again.
    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] eyre::Report),
}

impl ShiftError {
    /// Maps a non-success HTTP status and the server's error message to the
    /// matching variant.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            400 => ShiftError::Validation(message),
            401 => ShiftError::Authentication(message),
            403 => ShiftError::Authorization(message),
            404 => ShiftError::NotFound(message),
            _ => ShiftError::Api { status, message },
        }
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, ShiftError::Authentication(_))
    }
}

pub type ShiftResult<T> = Result<T, ShiftError>;
