//! # toggl-client
//!
//! Core HTTP client infrastructure for the Toggl Track API.
//!
//! This crate provides:
//! - URI compilation from a base path, ids, a parent scope and a child path
//! - Request dispatch with HTTP Basic authentication
//! - Response interpretation into decoded JSON or a typed error
//! - Request/response tracing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (togglwrapper-api: resource handles and capabilities)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TogglClient                            │
//! │  - Holds base URL, API version, token, workspace/org ids    │
//! │  - Provides get / post / put / patch / delete               │
//! │  - Attaches Basic Auth (token, "api_token")                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   TogglHttpClient                           │
//! │  - One round trip per request                               │
//! │  - Status interpretation (403, non-2xx, 2xx)                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use togglwrapper_client::{Query, TogglClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), togglwrapper_client::Error> {
//!     let client = TogglClient::builder("my-api-token")
//!         .workspace_id(777)
//!         .build()?;
//!
//!     let me: serde_json::Value = client.get("/me", &Query::new()).await?;
//!
//!     let tag: serde_json::Value = client
//!         .post("/workspaces/777/tags", Some(&serde_json::json!({"name": "billed"})))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;
mod toggl_client;
pub mod uri;

pub use client::TogglHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use request::{Query, RequestBuilder, RequestMethod};
pub use response::Response;
pub use toggl_client::{TogglClient, TogglClientBuilder};

/// Default Toggl Track API base URL (without the version segment).
pub const DEFAULT_BASE_URL: &str = "https://api.track.toggl.com/api";

/// Default Toggl Track API version.
pub const DEFAULT_API_VERSION: &str = "v9";

/// Password sent alongside the API token in HTTP Basic authentication.
pub const API_TOKEN_PASSWORD: &str = "api_token";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("togglwrapper/", env!("CARGO_PKG_VERSION"));
