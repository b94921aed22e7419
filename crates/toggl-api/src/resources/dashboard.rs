use serde_json::Value;
use togglwrapper_client::{Query, Result};
use tracing::instrument;

use crate::resource::{resource, Get};

resource! {
    /// Workspace dashboards: recent activity and most active users.
    Dashboard {
        name: "Dashboard",
        path: "/dashboard",
        scope: Global,
        read_scope: Global,
    }
    capabilities: [Get]
}

impl Dashboard<'_> {
    /// Get the dashboard of a workspace.
    #[instrument(skip(self))]
    pub async fn for_workspace(&self, workspace_id: u64) -> Result<Value> {
        self.get(Some(workspace_id), None, &Query::new()).await
    }
}
