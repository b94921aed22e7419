use std::fmt;

use serde_json::Value;
use togglwrapper_client::{Query, Result};
use tracing::instrument;

use super::Projects;
use crate::resource::{resource, Get};

resource! {
    /// Clients of the current workspace.
    Clients {
        name: "Clients",
        path: "/clients",
        scope: Workspace,
        read_scope: Workspace,
    }
    capabilities: [Get, Create, Update, Delete]
}

/// Which projects to return when filtering by activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveFilter {
    #[default]
    Active,
    Inactive,
    Both,
}

impl fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActiveFilter::Active => "true",
            ActiveFilter::Inactive => "false",
            ActiveFilter::Both => "both",
        })
    }
}

impl Clients<'_> {
    /// Get the projects belonging to a client.
    #[instrument(skip(self))]
    pub async fn get_projects(&self, client_id: u64, active: ActiveFilter) -> Result<Value> {
        let params = Query::new()
            .param("client_ids", client_id)
            .param("active", active);
        Projects::new(self.client).get(None, None, &params).await
    }
}
