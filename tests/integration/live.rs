use togglwrapper::{Toggl, TogglCredentials};

use crate::common::init_tracing;

/// Fetch the current user from the real API.
#[tokio::test]
#[ignore = "requires TOGGL_API_TOKEN"]
async fn test_live_current_user() {
    init_tracing();
    let creds = TogglCredentials::from_env()
        .expect("TOGGL_API_TOKEN must be set to run live tests");
    let toggl = Toggl::from_credentials(&creds).expect("client should build");

    let me = toggl
        .user()
        .get_current(false, None)
        .await
        .expect("current user should be readable");
    assert!(me["id"].is_u64());
}
