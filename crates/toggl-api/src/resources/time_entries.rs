use chrono::{SecondsFormat, Utc};
use serde_json::{json, Map, Value};
use togglwrapper_client::{uri, Error, Query, Result};
use tracing::{debug, instrument};

use crate::resource::{resource, Get, Patch, Resource};

/// Value of `created_with` when the caller does not set one.
const CREATED_WITH: &str = "togglwrapper";

resource! {
    /// Time entries. Listed from the current user, written under the
    /// current workspace.
    TimeEntries {
        name: "TimeEntries",
        path: "/time_entries",
        scope: Workspace,
        read_scope: Me,
    }
    capabilities: [Get, Create, Update, Patch, Delete]
}

impl TimeEntries<'_> {
    /// Get the time entries started within a date range.
    ///
    /// Both dates are ISO 8601 strings, e.g. `2013-03-10T15:42:46+02:00`.
    /// Without a range the API returns recent entries.
    #[instrument(skip(self))]
    pub async fn get_in_range(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Value> {
        let params = Query::new()
            .maybe("start_date", start_date)
            .maybe("end_date", end_date);
        self.get(None, None, &params).await
    }

    /// Get a single time entry.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, time_entry_id: u64) -> Result<Value> {
        self.get(Some(time_entry_id), None, &Query::new()).await
    }

    /// Get the running time entry, or `null` when none is running.
    #[instrument(skip(self))]
    pub async fn get_current(&self) -> Result<Value> {
        self.get(None, Some("/current"), &Query::new()).await
    }

    /// Start a new time entry.
    ///
    /// `body` must be a JSON object. A negative `duration`, a `start` of now,
    /// the client's `workspace_id` and `created_with` are filled in when the
    /// caller leaves them out. The entry is posted under the workspace named
    /// in the body.
    #[instrument(skip(self, body))]
    pub async fn start(&self, body: &Value) -> Result<Value> {
        let mut entry: Map<String, Value> = body
            .as_object()
            .cloned()
            .ok_or_else(|| Error::invalid_argument("a time entry must be a JSON object"))?;

        entry.entry("duration").or_insert(json!(-1));
        entry
            .entry("start")
            .or_insert_with(|| json!(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)));
        entry
            .entry("created_with")
            .or_insert_with(|| json!(CREATED_WITH));

        let workspace_id = match entry.get("workspace_id") {
            Some(wid) => wid.as_u64().ok_or_else(|| {
                Error::invalid_argument("workspace_id must be an unsigned integer")
            })?,
            None => self.client().workspace_id().ok_or_else(|| {
                Error::config("a workspace id is required to start a time entry")
            })?,
        };
        entry.insert("workspace_id".to_string(), json!(workspace_id));

        let parent = format!("/workspaces/{workspace_id}");
        let path = uri::compile(Self::DESCRIPTOR.path, None, None, Some(&parent), None)?;

        debug!(workspace_id, fields = entry.len(), "Starting time entry");
        self.client().post(&path, Some(&entry)).await
    }

    /// Stop a running time entry.
    #[instrument(skip(self))]
    pub async fn stop(&self, time_entry_id: u64) -> Result<Value> {
        self.patch(Some(time_entry_id), None, Some("/stop"), &json!({}))
            .await
    }
}
