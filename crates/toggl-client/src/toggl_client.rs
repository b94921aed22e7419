//! High-level Toggl client with typed HTTP methods.
//!
//! This module provides `TogglClient`, which combines the API token and
//! scoping ids with an HTTP client and provides the request dispatcher used
//! by the resource layer.
//!
//! ## Security
//!
//! - The API token is redacted in Debug output
//! - Request bodies and credentials are skipped in tracing spans

use serde::{de::DeserializeOwned, Serialize};
use tracing::instrument;

use crate::client::TogglHttpClient;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::request::{Query, RequestBuilder};
use crate::{API_TOKEN_PASSWORD, DEFAULT_API_VERSION, DEFAULT_BASE_URL};

/// Toggl Track API client.
///
/// Holds the base URL, API version, API token and the optional workspace
/// and organization ids used to scope resources. Immutable once built, so a
/// single instance can be shared freely between tasks.
///
/// # Example
///
/// ```rust,ignore
/// use togglwrapper_client::{Query, TogglClient};
///
/// let client = TogglClient::builder("my-api-token")
///     .workspace_id(777)
///     .build()?;
///
/// let clients: serde_json::Value = client
///     .get("/workspaces/777/clients", &Query::new())
///     .await?;
///
/// client.delete("/workspaces/777/clients/1239455").await?;
/// ```
#[derive(Clone)]
pub struct TogglClient {
    http: TogglHttpClient,
    base_url: String,
    api_version: String,
    api_token: String,
    workspace_id: Option<u64>,
    organization_id: Option<u64>,
}

impl std::fmt::Debug for TogglClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TogglClient")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("api_token", &"[REDACTED]")
            .field("workspace_id", &self.workspace_id)
            .field("organization_id", &self.organization_id)
            .finish_non_exhaustive()
    }
}

impl TogglClient {
    /// Create a client for the production API with default settings.
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        Self::builder(api_token).build()
    }

    /// Start building a client.
    pub fn builder(api_token: impl Into<String>) -> TogglClientBuilder {
        TogglClientBuilder::new(api_token)
    }

    /// Get the base URL (without version).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the API version (e.g., "v9").
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Get the API token.
    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    /// The workspace id used for workspace-scoped resources.
    pub fn workspace_id(&self) -> Option<u64> {
        self.workspace_id
    }

    /// The organization id used for organization-scoped resources.
    pub fn organization_id(&self) -> Option<u64> {
        self.organization_id
    }

    /// Get the underlying HTTP client.
    pub fn http(&self) -> &TogglHttpClient {
        &self.http
    }

    /// Build the full URL for a compiled path.
    ///
    /// Example: `url("/me")` -> `https://api.track.toggl.com/api/v9/me`
    pub fn url(&self, path: &str) -> String {
        if path.is_empty() || path.starts_with('/') {
            format!("{}/{}{}", self.base_url, self.api_version, path)
        } else {
            format!("{}/{}/{}", self.base_url, self.api_version, path)
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth(&self.api_token, API_TOKEN_PASSWORD)
    }

    // =========================================================================
    // Request dispatcher
    // =========================================================================

    /// GET `path`. Parameters whose value is `None` are not sent.
    #[instrument(skip(self, params), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str, params: &Query) -> Result<T> {
        let request = self
            .authorize(self.http.get(self.url(path)))
            .query_all(params);
        self.http.execute(request).await?.json()
    }

    /// POST `path`, with `body` serialized to JSON when present.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<T, B>(&self, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let mut request = self.authorize(self.http.post(self.url(path)));
        if let Some(body) = body {
            request = request.json(body)?;
        }
        self.http.execute(request).await?.json()
    }

    /// PUT `path` with `body` serialized to JSON.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let request = self.authorize(self.http.put(self.url(path))).json(body)?;
        self.http.execute(request).await?.json()
    }

    /// PATCH `path` with `body` serialized to JSON.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let request = self.authorize(self.http.patch(self.url(path))).json(body)?;
        self.http.execute(request).await?.json()
    }

    /// DELETE `path`. Returns `true` on any 2xx; the body is ignored.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn delete(&self, path: &str) -> Result<bool> {
        let request = self.authorize(self.http.delete(self.url(path)));
        let response = self.http.execute(request).await?;
        Ok(response.is_success())
    }
}

/// Builder for [`TogglClient`].
#[derive(Clone)]
pub struct TogglClientBuilder {
    api_token: String,
    base_url: String,
    api_version: String,
    workspace_id: Option<u64>,
    organization_id: Option<u64>,
    config: ClientConfig,
}

impl std::fmt::Debug for TogglClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TogglClientBuilder")
            .field("api_token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("workspace_id", &self.workspace_id)
            .field("organization_id", &self.organization_id)
            .field("config", &self.config)
            .finish()
    }
}

impl TogglClientBuilder {
    /// Start from the production defaults.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            workspace_id: None,
            organization_id: None,
            config: ClientConfig::default(),
        }
    }

    /// Override the base URL (everything before the version segment).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the API version segment (e.g., "v9").
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set the workspace id used to scope workspace-level resources.
    pub fn workspace_id(mut self, workspace_id: u64) -> Self {
        self.workspace_id = Some(workspace_id);
        self
    }

    /// Set the organization id used to scope organization-level resources.
    pub fn organization_id(mut self, organization_id: u64) -> Self {
        self.organization_id = Some(organization_id);
        self
    }

    /// Use a custom HTTP configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the settings and build the client.
    pub fn build(self) -> Result<TogglClient> {
        if self.api_token.trim().is_empty() {
            return Err(Error::config("API token must not be empty"));
        }

        let base_url = self.base_url.trim_end_matches('/').to_string();
        url::Url::parse(&base_url)?;

        let api_version = self.api_version.trim_matches('/').to_string();
        if api_version.is_empty() {
            return Err(Error::config("API version must not be empty"));
        }

        let http = TogglHttpClient::new(self.config)?;
        Ok(TogglClient {
            http,
            base_url,
            api_version,
            api_token: self.api_token,
            workspace_id: self.workspace_id,
            organization_id: self.organization_id,
        })
    }
}
