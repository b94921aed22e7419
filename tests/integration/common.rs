use togglwrapper::{Toggl, TogglClient};
use tracing_subscriber::EnvFilter;
use wiremock::MockServer;

pub const TOKEN: &str = "fake_token_1";
pub const WORKSPACE_ID: u64 = 777;

/// Route library logs through the test harness so they show with `--nocapture`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("togglwrapper_client=debug,togglwrapper_api=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// A mock server and a `Toggl` pointed at it, scoped to workspace 777.
pub async fn mock_toggl() -> (MockServer, Toggl) {
    init_tracing();
    let server = MockServer::start().await;
    let client = TogglClient::builder(TOKEN)
        .base_url(format!("{}/api", server.uri()))
        .workspace_id(WORKSPACE_ID)
        .build()
        .expect("mock client should build");
    (server, Toggl::from_client(client))
}
