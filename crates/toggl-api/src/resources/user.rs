use serde::Serialize;
use serde_json::Value;
use togglwrapper_client::{Query, Result};
use tracing::instrument;

use crate::resource::{resource, Access, Get, Resource, Update};

resource! {
    /// The user that owns the API token.
    User {
        name: "User",
        path: "/me",
        scope: Global,
        read_scope: Global,
    }
    capabilities: [Get, Update]
}

impl User<'_> {
    /// Get the current user.
    ///
    /// With `related_data`, the response also carries the workspaces,
    /// clients, projects, tasks, time entries and tags the user can see.
    /// `since` is a unix timestamp limiting related data to objects changed
    /// after it.
    #[instrument(skip(self))]
    pub async fn get_current(&self, related_data: bool, since: Option<i64>) -> Result<Value> {
        let params = Query::new()
            .maybe("since", since)
            .maybe("with_related_data", related_data.then_some(true));
        self.get(None, None, &params).await
    }

    /// Update the current user.
    #[instrument(skip(self, body))]
    pub async fn update_current<B>(&self, body: &B) -> Result<Value>
    where
        B: Serialize + Sync + ?Sized,
    {
        self.update(None, None, None, body).await
    }

    /// Invalidate the current API token and return a new one.
    ///
    /// The client keeps using the old token; build a new client with the
    /// returned one.
    #[instrument(skip(self))]
    pub async fn reset_token(&self) -> Result<Value> {
        let path = self.compile(Access::Write, None, None, Some("/reset_token"))?;
        self.client.post(&path, None::<&Value>).await
    }
}
