use serde::Serialize;
use serde_json::Value;
use togglwrapper_client::{Query, Result};
use tracing::instrument;

use crate::resource::{resource, Access, Get, Resource};

resource! {
    /// Workspaces the current user belongs to.
    Workspaces {
        name: "Workspaces",
        path: "/workspaces",
        scope: Global,
        read_scope: Global,
    }
    capabilities: [Get, Update]
}

impl Workspaces<'_> {
    /// Get the users of a workspace.
    #[instrument(skip(self))]
    pub async fn get_users(&self, workspace_id: u64) -> Result<Value> {
        self.get_child(workspace_id, "/users").await
    }

    /// Get the clients of a workspace.
    #[instrument(skip(self))]
    pub async fn get_clients(&self, workspace_id: u64) -> Result<Value> {
        self.get_child(workspace_id, "/clients").await
    }

    /// Get the projects of a workspace.
    #[instrument(skip(self))]
    pub async fn get_projects(&self, workspace_id: u64) -> Result<Value> {
        self.get_child(workspace_id, "/projects").await
    }

    /// Get the tasks of a workspace.
    #[instrument(skip(self))]
    pub async fn get_tasks(&self, workspace_id: u64) -> Result<Value> {
        self.get_child(workspace_id, "/tasks").await
    }

    /// Get the tags of a workspace.
    #[instrument(skip(self))]
    pub async fn get_tags(&self, workspace_id: u64) -> Result<Value> {
        self.get_child(workspace_id, "/tags").await
    }

    /// Get the memberships of a workspace.
    #[instrument(skip(self))]
    pub async fn get_workspace_users(&self, workspace_id: u64) -> Result<Value> {
        self.get_child(workspace_id, "/workspace_users").await
    }

    /// Invite users to a workspace. The API emails each invitee.
    #[instrument(skip(self, body))]
    pub async fn invite<B>(&self, workspace_id: u64, body: &B) -> Result<Value>
    where
        B: Serialize + Sync + ?Sized,
    {
        let path = self.compile(Access::Write, Some(workspace_id), None, Some("/invite"))?;
        self.client.post(&path, Some(body)).await
    }

    async fn get_child(&self, workspace_id: u64, child_path: &str) -> Result<Value> {
        self.get(Some(workspace_id), Some(child_path), &Query::new())
            .await
    }
}
