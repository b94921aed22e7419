//! Shared helpers for tests that talk to a mock server.

use togglwrapper_client::TogglClient;
use wiremock::MockServer;

pub(crate) const WORKSPACE_ID: u64 = 777;
pub(crate) const ORGANIZATION_ID: u64 = 42;
pub(crate) const TOKEN: &str = "fake_token_1";

/// A client pointed at `server`, scoped to workspace 777 and organization 42.
pub(crate) fn mock_client(server: &MockServer) -> TogglClient {
    TogglClient::builder(TOKEN)
        .base_url(format!("{}/api", server.uri()))
        .workspace_id(WORKSPACE_ID)
        .organization_id(ORGANIZATION_ID)
        .build()
        .unwrap()
}
