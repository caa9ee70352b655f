use std::fmt;
use thiserror::Error;

/// The error type for signing operations.
///
/// Every kind is a caller or configuration defect: none of them is fixed by
/// retrying the same signing attempt, and the request must not be sent.
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Request cannot be signed: unusable url, method or header values.
    RequestMalformed,

    /// Request body cannot be buffered, for example a stream that was already consumed.
    BodyUnavailable,

    /// Credentials are missing, empty or expired.
    CredentialInvalid,

    /// Signing time is not in UTC or cannot be parsed.
    TimestampInvalid,

    /// The credential provider failed to resolve credentials.
    CredentialResolutionFailed,

    /// Configuration error (missing fields, invalid values)
    ConfigInvalid,

    /// Unexpected errors
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Check if this is a credential error
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::CredentialInvalid | ErrorKind::CredentialResolutionFailed
        )
    }
}

// Convenience constructors
impl Error {
    /// Create a request malformed error
    pub fn request_malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestMalformed, message)
    }

    /// Create a body unavailable error
    pub fn body_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BodyUnavailable, message)
    }

    /// Create a credential invalid error
    pub fn credential_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalid, message)
    }

    /// Create a timestamp invalid error
    pub fn timestamp_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TimestampInvalid, message)
    }

    /// Create a credential resolution failed error
    pub fn credential_resolution_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialResolutionFailed, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::RequestMalformed => write!(f, "malformed request"),
            ErrorKind::BodyUnavailable => write!(f, "body unavailable"),
            ErrorKind::CredentialInvalid => write!(f, "invalid credentials"),
            ErrorKind::TimestampInvalid => write!(f, "invalid timestamp"),
            ErrorKind::CredentialResolutionFailed => write!(f, "credential resolution failed"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

/// Signing failures cross the HTTP pipeline as I/O errors, keeping the
/// original error as source.
impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        std::io::Error::other(err)
    }
}

// Common From implementations
impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_malformed(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_malformed(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderName> for Error {
    fn from(err: http::header::InvalidHeaderName) -> Self {
        Self::request_malformed(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Self::request_malformed(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::request_malformed(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::method::InvalidMethod> for Error {
    fn from(err: http::method::InvalidMethod) -> Self {
        Self::request_malformed(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
