//! The API entry point.

use serde::Serialize;
use serde_json::Value;
use togglwrapper_auth::Credentials;
use togglwrapper_client::{ClientConfig, Result, TogglClient, TogglClientBuilder};
use tracing::instrument;

use crate::resources::{
    Clients, Dashboard, Organizations, ProjectTasks, ProjectUsers, Projects, Tags, Tasks,
    TimeEntries, User, WorkspaceUsers, Workspaces,
};

/// Toggl Track API client.
///
/// Owns a [`TogglClient`] and hands out one handle per resource type. The
/// handles borrow the client, so they are cheap to create on every call.
///
/// # Example
///
/// ```rust,ignore
/// use togglwrapper_api::{Delete, Get, Query, Toggl};
///
/// let toggl = Toggl::builder("my-api-token").workspace_id(777).build()?;
/// let toggl = Toggl::from_client(toggl);
///
/// let tags = toggl.tags().get(None, None, &Query::new()).await?;
/// toggl.tags().delete(Some(1239455), None).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Toggl {
    client: TogglClient,
}

impl Toggl {
    /// Create a client for the production API.
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        Ok(Self::from_client(TogglClient::new(api_token)?))
    }

    /// Create a client for the production API with custom HTTP configuration.
    pub fn with_config(api_token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let client = TogglClient::builder(api_token).config(config).build()?;
        Ok(Self::from_client(client))
    }

    /// Start building a client with a custom base URL, version or scope.
    pub fn builder(api_token: impl Into<String>) -> TogglClientBuilder {
        TogglClient::builder(api_token)
    }

    /// Start building a client from credentials, carrying over their
    /// workspace and organization ids.
    pub fn builder_from_credentials(credentials: &impl Credentials) -> TogglClientBuilder {
        let mut builder = TogglClient::builder(credentials.api_token());
        if let Some(wid) = credentials.workspace_id() {
            builder = builder.workspace_id(wid);
        }
        if let Some(oid) = credentials.organization_id() {
            builder = builder.organization_id(oid);
        }
        builder
    }

    /// Create a client for the production API from credentials.
    pub fn from_credentials(credentials: &impl Credentials) -> Result<Self> {
        Ok(Self::from_client(
            Self::builder_from_credentials(credentials).build()?,
        ))
    }

    /// Wrap an existing client.
    pub fn from_client(client: TogglClient) -> Self {
        Self { client }
    }

    /// Get the underlying client.
    pub fn client(&self) -> &TogglClient {
        &self.client
    }

    /// Clients of the client's workspace.
    pub fn clients(&self) -> Clients<'_> {
        Clients::new(&self.client)
    }

    /// Workspace dashboards.
    pub fn dashboard(&self) -> Dashboard<'_> {
        Dashboard::new(&self.client)
    }

    /// Organizations the user belongs to.
    pub fn organizations(&self) -> Organizations<'_> {
        Organizations::new(&self.client)
    }

    /// Projects of the client's workspace.
    pub fn projects(&self) -> Projects<'_> {
        Projects::new(&self.client)
    }

    /// Project memberships in the client's workspace.
    pub fn project_users(&self) -> ProjectUsers<'_> {
        ProjectUsers::new(&self.client)
    }

    /// Tasks of one project.
    pub fn project_tasks(&self, project_id: u64) -> ProjectTasks<'_> {
        ProjectTasks::new(&self.client, project_id)
    }

    /// Tags of the client's workspace.
    pub fn tags(&self) -> Tags<'_> {
        Tags::new(&self.client)
    }

    /// Tasks across the client's workspace.
    pub fn tasks(&self) -> Tasks<'_> {
        Tasks::new(&self.client)
    }

    /// Time entries of the current user.
    pub fn time_entries(&self) -> TimeEntries<'_> {
        TimeEntries::new(&self.client)
    }

    /// The user that owns the API token.
    pub fn user(&self) -> User<'_> {
        User::new(&self.client)
    }

    /// Workspaces the user belongs to.
    pub fn workspaces(&self) -> Workspaces<'_> {
        Workspaces::new(&self.client)
    }

    /// Memberships of the client's workspace.
    pub fn workspace_users(&self) -> WorkspaceUsers<'_> {
        WorkspaceUsers::new(&self.client)
    }

    /// Create a new user account.
    #[instrument(skip(self, body))]
    pub async fn signups<B>(&self, body: &B) -> Result<Value>
    where
        B: Serialize + Sync + ?Sized,
    {
        self.client.post("/signups", Some(body)).await
    }
}

impl From<TogglClient> for Toggl {
    fn from(client: TogglClient) -> Self {
        Self::from_client(client)
    }
}
