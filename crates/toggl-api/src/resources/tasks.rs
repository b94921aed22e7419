use serde_json::Value;
use togglwrapper_client::{Error, Result, TogglClient};
use tracing::instrument;

use crate::resource::{
    resource, Access, Create, Delete, Get, Patch, Resource, ResourceDescriptor, Scope, Update,
};

resource! {
    /// Tasks across the current workspace.
    Tasks {
        name: "Tasks",
        path: "/tasks",
        scope: Workspace,
        read_scope: Workspace,
    }
    capabilities: [Get]
}

impl<'a> Tasks<'a> {
    /// Tasks of one project, which can also be created and modified.
    pub fn for_project(&self, project_id: u64) -> ProjectTasks<'a> {
        ProjectTasks::new(self.client, project_id)
    }

    /// Get the tasks of a project.
    #[instrument(skip(self))]
    pub async fn get_for_project(&self, project_id: u64) -> Result<Value> {
        self.for_project(project_id)
            .get(None, None, &togglwrapper_client::Query::new())
            .await
    }
}

/// Tasks of a single project, addressed under
/// `/workspaces/{workspace_id}/projects/{project_id}`.
#[derive(Debug, Clone, Copy)]
pub struct ProjectTasks<'a> {
    client: &'a TogglClient,
    project_id: u64,
}

impl<'a> ProjectTasks<'a> {
    /// Bind the handle to a client and project.
    pub fn new(client: &'a TogglClient, project_id: u64) -> Self {
        Self { client, project_id }
    }

    /// The project the tasks belong to.
    pub fn project_id(&self) -> u64 {
        self.project_id
    }
}

impl Resource for ProjectTasks<'_> {
    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        name: "ProjectTasks",
        path: "/tasks",
        scope: Scope::Workspace,
        read_scope: Scope::Workspace,
    };

    fn client(&self) -> &TogglClient {
        self.client
    }

    fn parent_path(&self, access: Access) -> Result<Option<String>> {
        let workspace = Self::DESCRIPTOR
            .scope_for(access)
            .parent_path(self.client)?
            .ok_or_else(|| Error::config("a workspace id is required for project tasks"))?;
        Ok(Some(format!("{workspace}/projects/{}", self.project_id)))
    }
}

impl Get for ProjectTasks<'_> {}
impl Create for ProjectTasks<'_> {}
impl Update for ProjectTasks<'_> {}
impl Patch for ProjectTasks<'_> {}
impl Delete for ProjectTasks<'_> {}
