use serde_json::Value;
use togglwrapper_client::{Query, Result};
use tracing::instrument;

use super::{ProjectTasks, ProjectUsers};
use crate::resource::{resource, Get};

resource! {
    /// Projects of the current workspace.
    Projects {
        name: "Projects",
        path: "/projects",
        scope: Workspace,
        read_scope: Workspace,
    }
    capabilities: [Get, Create, Update, Patch, Delete]
}

impl Projects<'_> {
    /// Get a single project.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, project_id: u64) -> Result<Value> {
        self.get(Some(project_id), None, &Query::new()).await
    }

    /// Get the tasks of a project.
    #[instrument(skip(self))]
    pub async fn get_tasks(&self, project_id: u64) -> Result<Value> {
        ProjectTasks::new(self.client, project_id)
            .get(None, None, &Query::new())
            .await
    }

    /// Get the users assigned to a project.
    #[instrument(skip(self))]
    pub async fn get_project_users(&self, project_id: u64) -> Result<Value> {
        let params = Query::new().param("project_ids", project_id);
        ProjectUsers::new(self.client).get(None, None, &params).await
    }
}
