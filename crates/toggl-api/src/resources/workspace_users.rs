use crate::resource::resource;

resource! {
    /// Memberships of the current workspace.
    WorkspaceUsers {
        name: "WorkspaceUsers",
        path: "/workspace_users",
        scope: Workspace,
        read_scope: Workspace,
    }
    capabilities: [Get, Update, Delete]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{Delete, Get, Update};
    use crate::test_support::mock_client;
    use serde_json::json;
    use togglwrapper_client::Query;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_workspace_user_operations() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v9/workspaces/777/workspace_users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 19012628}])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/v9/workspaces/777/workspace_users/19012628"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"admin": true})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/v9/workspaces/777/workspace_users/19012628"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let users = WorkspaceUsers::new(&client);

        assert_eq!(
            users.get(None, None, &Query::new()).await.unwrap()[0]["id"],
            19012628
        );
        let updated = users
            .update(Some(19012628), None, None, &json!({"admin": true}))
            .await
            .unwrap();
        assert_eq!(updated["admin"], true);
        assert!(users.delete(Some(19012628), None).await.unwrap());
    }
}
