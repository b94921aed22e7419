use serde_json::json;
use togglwrapper::{Create, Get, Query};
use wiremock::matchers::{basic_auth, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{mock_toggl, TOKEN};

#[tokio::test]
async fn test_create_client_round_trip() {
    let (server, toggl) = mock_toggl().await;
    let input = json!({"client": {"name": "Acme", "wid": 777}});
    let output = json!({"id": 1239455, "name": "Acme", "wid": 777});

    Mock::given(method("POST"))
        .and(path("/api/v9/workspaces/777/clients"))
        .and(basic_auth(TOKEN, "api_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&output))
        .expect(1)
        .mount(&server)
        .await;

    let created = toggl.clients().create(&input, None).await.unwrap();
    assert_eq!(created, output);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method.as_str(), "POST");
    assert_eq!(requests[0].body, serde_json::to_vec(&input).unwrap());
}

#[tokio::test]
async fn test_time_entries_in_range() {
    let (server, toggl) = mock_toggl().await;

    Mock::given(method("GET"))
        .and(path("/api/v9/me/time_entries"))
        .and(query_param("start_date", "2013-03-10T15:42:46+02:00"))
        .and(query_param("end_date", "2013-03-12T15:42:46+02:00"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 436694100}])))
        .expect(1)
        .mount(&server)
        .await;

    let entries = toggl
        .time_entries()
        .get_in_range(
            Some("2013-03-10T15:42:46+02:00"),
            Some("2013-03-12T15:42:46+02:00"),
        )
        .await
        .unwrap();
    assert_eq!(entries[0]["id"], 436694100);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let keys: Vec<String> = requests[0]
        .url
        .query_pairs()
        .map(|(k, _)| k.into_owned())
        .collect();
    assert_eq!(keys, ["start_date", "end_date"]);
    assert_eq!(requests[0].url.path(), "/api/v9/me/time_entries");
}

#[tokio::test]
async fn test_get_by_id_ends_with_id() {
    let (server, toggl) = mock_toggl().await;

    for resource in ["clients", "projects", "tags", "workspace_users", "project_users"] {
        Mock::given(method("GET"))
            .and(path(format!("/api/v9/workspaces/777/{resource}/4242")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 4242})))
            .expect(1)
            .mount(&server)
            .await;
    }

    let params = Query::new();
    toggl.clients().get(Some(4242), None, &params).await.unwrap();
    toggl.projects().get(Some(4242), None, &params).await.unwrap();
    toggl.tags().get(Some(4242), None, &params).await.unwrap();
    toggl.workspace_users().get(Some(4242), None, &params).await.unwrap();
    toggl.project_users().get(Some(4242), None, &params).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 5);
    assert!(requests
        .iter()
        .all(|r| r.method.as_str() == "GET" && r.url.path().ends_with("/4242")));
}

#[tokio::test]
async fn test_shared_client_across_tasks() {
    let (server, toggl) = mock_toggl().await;

    Mock::given(method("GET"))
        .and(path("/api/v9/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(4)
        .mount(&server)
        .await;

    let toggl = std::sync::Arc::new(toggl);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let toggl = toggl.clone();
            tokio::spawn(async move { toggl.user().get_current(false, None).await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap()["id"], 1);
    }
}
