//! # togglwrapper
//!
//! A client library for the Toggl Track API.
//!
//! Every remote resource (clients, projects, tasks, time entries,
//! workspaces, users, tags, dashboards) is exposed as a handle whose
//! supported operations are checked at compile time. Requests authenticate
//! with HTTP Basic using an API token.
//!
//! ## Security
//!
//! - The API token is redacted in Debug output
//! - Tracing spans never record credentials or request bodies
//! - Logged error bodies have token-shaped strings redacted
//!
//! ## Crates
//!
//! - **togglwrapper-client** - URI compilation, request dispatch, response interpretation
//! - **togglwrapper-auth** - API-token credentials, loading from the environment
//! - **togglwrapper-api** - Resource handles and capability traits
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use togglwrapper::{Get, Query, Toggl, TogglCredentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // TOGGL_API_TOKEN, and optionally TOGGL_WORKSPACE_ID
//!     let toggl = Toggl::from_credentials(&TogglCredentials::from_env()?)?;
//!
//!     let me = toggl.user().get_current(false, None).await?;
//!     println!("{}", me["fullname"]);
//!
//!     let projects = toggl.projects().get(None, None, &Query::new()).await?;
//!     for project in projects.as_array().into_iter().flatten() {
//!         println!("{}", project["name"]);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "api")]
pub use togglwrapper_api as api;
#[cfg(feature = "auth")]
pub use togglwrapper_auth as auth;
#[cfg(feature = "client")]
pub use togglwrapper_client as client;

// Re-export commonly used types at the top level
#[cfg(feature = "api")]
pub use togglwrapper_api::{Create, Delete, Get, Patch, Toggl, Update};
#[cfg(feature = "auth")]
pub use togglwrapper_auth::{Credentials, TogglCredentials};
#[cfg(feature = "client")]
pub use togglwrapper_client::{ClientConfig, Error, ErrorKind, Query, Result, TogglClient};
