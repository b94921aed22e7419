use serde::Serialize;
use serde_json::Value;
use togglwrapper_client::{Result, TogglClient};
use tracing::instrument;

use crate::resource::{resource, Scope};

resource! {
    /// Organizations the current user belongs to.
    Organizations {
        name: "Organizations",
        path: "/organizations",
        scope: Global,
        read_scope: Global,
    }
    capabilities: [Get, Update]
}

impl Organizations<'_> {
    /// Invite users to the client's organization.
    ///
    /// Requires an organization id on the client.
    #[instrument(skip(self, body))]
    pub async fn invite<B>(&self, body: &B) -> Result<Value>
    where
        B: Serialize + Sync + ?Sized,
    {
        let path = invitations_path(self.client)?;
        self.client.post(&path, Some(body)).await
    }
}

fn invitations_path(client: &TogglClient) -> Result<String> {
    let parent = Scope::Organization.parent_path(client)?.unwrap_or_default();
    Ok(format!("{parent}/invitations"))
}
