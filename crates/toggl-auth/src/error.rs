//! Error types for toggl-auth.
//!
//! Error messages never include credential values.

/// Result type alias for toggl-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for toggl-auth operations.
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
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// A required environment variable is not set.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),

    /// Credentials are present but unusable.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
}
