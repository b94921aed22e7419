//! # toggl-api
//!
//! Toggl Track API resources.
//!
//! Each remote resource type is a small handle borrowing a
//! [`TogglClient`]. The operations a resource supports are the capability
//! traits it implements:
//!
//! | Handle | Get | Create | Update | Patch | Delete |
//! |---|---|---|---|---|---|
//! | [`Clients`] | ✓ | ✓ | ✓ | | ✓ |
//! | [`Dashboard`] | ✓ | | | | |
//! | [`Organizations`] | ✓ | | ✓ | | |
//! | [`Projects`] | ✓ | ✓ | ✓ | ✓ | ✓ |
//! | [`ProjectUsers`] | ✓ | ✓ | ✓ | ✓ | ✓ |
//! | [`ProjectTasks`] | ✓ | ✓ | ✓ | ✓ | ✓ |
//! | [`Tags`] | ✓ | ✓ | ✓ | | ✓ |
//! | [`Tasks`] | ✓ | | | | |
//! | [`TimeEntries`] | ✓ | ✓ | ✓ | ✓ | ✓ |
//! | [`User`] | ✓ | | ✓ | | |
//! | [`Workspaces`] | ✓ | | ✓ | | |
//! | [`WorkspaceUsers`] | ✓ | | ✓ | | ✓ |
//!
//! ## Example
//!
//! ```rust,ignore
//! use togglwrapper_api::{Create, Toggl};
//! use togglwrapper_auth::TogglCredentials;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let toggl = Toggl::from_credentials(&TogglCredentials::from_env()?)?;
//!
//!     // Start and stop a time entry
//!     let entry = toggl
//!         .time_entries()
//!         .start(&serde_json::json!({"description": "Meeting with possible clients"}))
//!         .await?;
//!     let id = entry["id"].as_u64().unwrap_or_default();
//!     toggl.time_entries().stop(id).await?;
//!
//!     // Create a client
//!     toggl
//!         .clients()
//!         .create(&serde_json::json!({"name": "Very Big Company"}), None)
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod resource;
mod resources;
mod toggl;

#[cfg(test)]
mod test_support;

pub use resource::{Access, Create, Delete, Get, Patch, Resource, ResourceDescriptor, Scope, Update};
pub use resources::*;
pub use toggl::Toggl;

// Re-export client types that users need
pub use togglwrapper_client::{
    ClientConfig, ClientConfigBuilder, Error, ErrorKind, Query, Result, TogglClient,
    TogglClientBuilder,
};
