//! Credentials trait and implementations.
//!
//! All credential types implement custom Debug to redact sensitive data.

use tracing::debug;

use crate::error::{Error, ErrorKind, Result};
use crate::{ENV_API_TOKEN, ENV_ORGANIZATION_ID, ENV_WORKSPACE_ID};

/// Trait for Toggl credentials.
pub trait Credentials: Send + Sync {
    /// Get the API token.
    fn api_token(&self) -> &str;

    /// The default workspace id, if any.
    fn workspace_id(&self) -> Option<u64> {
        None
    }

    /// The default organization id, if any.
    fn organization_id(&self) -> Option<u64> {
        None
    }

    /// Returns true if the credentials appear to be valid (non-empty).
    fn is_valid(&self) -> bool {
        !self.api_token().trim().is_empty()
    }
}

/// API-token credentials with optional scoping ids.
///
/// The token is redacted in Debug output to prevent accidental exposure in
/// logs.
#[derive(Clone, PartialEq, Eq)]
pub struct TogglCredentials {
    api_token: String,
    workspace_id: Option<u64>,
    organization_id: Option<u64>,
}

impl std::fmt::Debug for TogglCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TogglCredentials")
            .field("api_token", &"[REDACTED]")
            .field("workspace_id", &self.workspace_id)
            .field("organization_id", &self.organization_id)
            .finish()
    }
}

impl TogglCredentials {
    /// Create credentials from an API token.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            workspace_id: None,
            organization_id: None,
        }
    }

    /// Set the default workspace id.
    pub fn with_workspace_id(mut self, workspace_id: u64) -> Self {
        self.workspace_id = Some(workspace_id);
        self
    }

    /// Set the default organization id.
    pub fn with_organization_id(mut self, organization_id: u64) -> Self {
        self.organization_id = Some(organization_id);
        self
    }

    /// Replace the API token (e.g., after a token reset).
    pub fn set_api_token(&mut self, token: impl Into<String>) {
        self.api_token = token.into();
    }

    /// Load credentials from environment variables.
    ///
    /// Required:
    /// - `TOGGL_API_TOKEN`
    ///
    /// Optional:
    /// - `TOGGL_WORKSPACE_ID`
    /// - `TOGGL_ORGANIZATION_ID`
    ///
    /// The optional ids must be unsigned integers when set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_token = lookup(ENV_API_TOKEN)
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| Error::new(ErrorKind::EnvVar(ENV_API_TOKEN.to_string())))?;

        let workspace_id = parse_id(ENV_WORKSPACE_ID, lookup(ENV_WORKSPACE_ID))?;
        let organization_id = parse_id(ENV_ORGANIZATION_ID, lookup(ENV_ORGANIZATION_ID))?;

        debug!(?workspace_id, ?organization_id, "Loaded credentials from environment");

        Ok(Self {
            api_token,
            workspace_id,
            organization_id,
        })
    }
}

fn parse_id(name: &str, value: Option<String>) -> Result<Option<u64>> {
    let Some(value) = value else {
        return Ok(None);
    };
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value.parse::<u64>().map(Some).map_err(|e| {
        Error::with_source(
            ErrorKind::InvalidCredentials(format!("{name} is not an integer")),
            e,
        )
    })
}

impl Credentials for TogglCredentials {
    fn api_token(&self) -> &str {
        &self.api_token
    }

    fn workspace_id(&self) -> Option<u64> {
        self.workspace_id
    }

    fn organization_id(&self) -> Option<u64> {
        self.organization_id
    }
}
