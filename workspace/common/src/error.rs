use thiserror::Error;

/// Input rejected locally, before any request is issued.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a student ID")]
    EmptyStudentId,

    #[error("A prediction request is already in flight")]
    RequestInFlight,
}

/// Failure of the persisted key/value store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write key '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// The request never produced an HTTP response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Request failed: {0}")]
pub struct TransportError(pub String);

/// Failure of a single backend request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("HTTP error: {status}")]
    Status { status: u16, message: Option<String> },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl RequestError {
    /// Message taken from the backend's `{"error": ...}` body, if it sent one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            RequestError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Login rejected by the backend or not completed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    #[error("{0}")]
    Rejected(String),

    #[error("Could not persist session: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    pub const FALLBACK_MESSAGE: &'static str = "Login failed";

    pub fn from_request(err: &RequestError) -> Self {
        AuthError::Rejected(
            err.backend_message()
                .unwrap_or(Self::FALLBACK_MESSAGE)
                .to_string(),
        )
    }
}

/// One of the dashboard reads failed; the whole dashboard is unavailable.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Failed to fetch {endpoint}: {source}")]
pub struct FetchError {
    pub endpoint: &'static str,
    #[source]
    pub source: RequestError,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Backend(String),
}

impl PredictionError {
    pub const FALLBACK_MESSAGE: &'static str = "Failed to predict performance";

    pub fn from_request(err: &RequestError) -> Self {
        PredictionError::Backend(
            err.backend_message()
                .unwrap_or(Self::FALLBACK_MESSAGE)
                .to_string(),
        )
    }
}

/// Report generation failed on the primary (authenticated) path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DownloadError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("Expected a report document, got content type '{0}'")]
    UnexpectedContent(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_prefers_backend_message() {
        let err = RequestError::Status {
            status: 401,
            message: Some("Invalid credentials".to_string()),
        };
        assert_eq!(
            AuthError::from_request(&err),
            AuthError::Rejected("Invalid credentials".to_string())
        );
    }

    #[test]
    fn auth_error_falls_back_to_generic_message() {
        let err = RequestError::Transport(TransportError("connection refused".to_string()));
        assert_eq!(AuthError::from_request(&err).to_string(), "Login failed");

        let err = RequestError::Status { status: 500, message: None };
        assert_eq!(AuthError::from_request(&err).to_string(), "Login failed");
    }

    #[test]
    fn prediction_error_messages() {
        let err = RequestError::Status {
            status: 500,
            message: Some("Student not found".to_string()),
        };
        assert_eq!(PredictionError::from_request(&err).to_string(), "Student not found");

        let err = RequestError::Decode("eof".to_string());
        assert_eq!(
            PredictionError::from_request(&err).to_string(),
            "Failed to predict performance"
        );
    }
}
