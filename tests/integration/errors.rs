use serde_json::json;
use togglwrapper::{Delete, ErrorKind, Get, Patch, Query, Update};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::mock_toggl;

#[tokio::test]
async fn test_forbidden_is_authentication_error_whatever_the_body() {
    let (server, toggl) = mock_toggl().await;

    Mock::given(method("GET"))
        .and(path("/api/v9/me"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v9/workspaces/777/tags"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"error": "forbidden"})))
        .expect(1)
        .mount(&server)
        .await;

    let err = toggl.user().get_current(false, None).await.unwrap_err();
    assert!(err.is_auth_error());

    let err = toggl.tags().get(None, None, &Query::new()).await.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Authentication(_)));
}

#[tokio::test]
async fn test_not_found_carries_decoded_detail() {
    let (server, toggl) = mock_toggl().await;

    Mock::given(method("GET"))
        .and(path("/api/v9/workspaces/777/projects/5"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "not found"})))
        .expect(1)
        .mount(&server)
        .await;

    let err = toggl.projects().get_by_id(5).await.unwrap_err();
    match err.kind {
        ErrorKind::Request { status, ref detail } => {
            assert_eq!(status, 404);
            assert_eq!(detail, &json!({"error": "not found"}));
        }
        ref other => panic!("expected a request error, got {other:?}"),
    }
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_server_error_without_json_uses_reason() {
    let (server, toggl) = mock_toggl().await;

    Mock::given(method("PUT"))
        .and(path("/api/v9/workspaces/777/clients/5"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let err = toggl
        .clients()
        .update(Some(5), None, None, &json!({"name": "x"}))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.detail(), Some(&json!("Internal Server Error")));
}

#[tokio::test]
async fn test_invalid_arguments_never_reach_the_network() {
    let (server, toggl) = mock_toggl().await;

    let err = toggl.clients().delete(None, None).await.unwrap_err();
    assert!(err.is_invalid_argument());

    let err = toggl
        .projects()
        .patch(Some(1), Some(&[2, 3]), None, &json!([]))
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());

    let err = toggl
        .tags()
        .update(Some(1), Some(&[2]), None, &json!({}))
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_workspace_is_config_error() {
    let toggl = togglwrapper::Toggl::new("token").unwrap();
    let err = toggl.clients().get(None, None, &Query::new()).await.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Config(_)));
}
