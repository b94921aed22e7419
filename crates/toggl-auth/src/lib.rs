//! # toggl-auth
//!
//! Credentials for the Toggl Track API.
//!
//! Toggl authenticates every request with HTTP Basic auth, using the
//! account's API token as the username and the literal string `api_token`
//! as the password. This crate only holds and loads those credentials; the
//! client crate attaches them to requests.
//!
//! ## Security
//!
//! - The API token is redacted in Debug output
//! - Error messages never include the token
//!
//! ## Example
//!
//! ```rust,ignore
//! use togglwrapper_auth::{Credentials, TogglCredentials};
//!
//! // From environment variables
//! let creds = TogglCredentials::from_env()?;
//!
//! // Explicitly
//! let creds = TogglCredentials::new("1971800d4d82861d8f2c1651fea4d212")
//!     .with_workspace_id(777);
//! assert_eq!(creds.workspace_id(), Some(777));
//! ```

mod credentials;
mod error;

pub use credentials::{Credentials, TogglCredentials};
pub use error::{Error, ErrorKind, Result};

/// Environment variable holding the API token.
pub const ENV_API_TOKEN: &str = "TOGGL_API_TOKEN";

/// Environment variable holding the default workspace id.
pub const ENV_WORKSPACE_ID: &str = "TOGGL_WORKSPACE_ID";

/// Environment variable holding the default organization id.
pub const ENV_ORGANIZATION_ID: &str = "TOGGL_ORGANIZATION_ID";
