//! Error types for toggl-client.

/// Result type alias for toggl-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for toggl-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Shorthand for an [`ErrorKind::InvalidArgument`] error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Shorthand for an [`ErrorKind::Config`] error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(message.into()))
    }

    /// Returns true if the server rejected the API token (HTTP 403).
    pub fn is_auth_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication(_))
    }

    /// Returns true if the caller passed an invalid combination of arguments.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidArgument(_))
    }

    /// Returns the HTTP status code for request errors.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Request { status, .. } => Some(*status),
            ErrorKind::Authentication(_) => Some(403),
            _ => None,
        }
    }

    /// Returns the decoded error detail for request errors.
    pub fn detail(&self) -> Option<&serde_json::Value> {
        match &self.kind {
            ErrorKind::Request { detail, .. } => Some(detail),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The API token was rejected (HTTP 403).
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Any other non-2xx response.
    ///
    /// `detail` is the decoded JSON body when the body is JSON, otherwise
    /// the status reason phrase as a JSON string.
    #[error("HTTP error: {status} {detail}")]
    Request {
        status: u16,
        detail: serde_json::Value,
    },

    /// The caller supplied an invalid combination of arguments.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The request never produced a response (DNS, connect, TLS, ...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// A successful response body could not be decoded.
    #[error("JSON error: {0}")]
    Json(String),

    /// The request body could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::with_source(ErrorKind::Transport(err.to_string()), err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::Config(format!("Invalid URL: {}", err)), err)
    }
}
