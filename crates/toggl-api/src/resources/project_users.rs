use serde_json::Value;
use togglwrapper_client::Result;
use tracing::instrument;

use super::Projects;
use crate::resource::resource;

resource! {
    /// Project memberships in the current workspace.
    ProjectUsers {
        name: "ProjectUsers",
        path: "/project_users",
        scope: Workspace,
        read_scope: Workspace,
    }
    capabilities: [Get, Create, Update, Patch, Delete]
}

impl ProjectUsers<'_> {
    /// Get the users assigned to a project.
    #[instrument(skip(self))]
    pub async fn get_for_project(&self, project_id: u64) -> Result<Value> {
        Projects::new(self.client).get_project_users(project_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{Create, Delete, Patch, Update};
    use crate::test_support::mock_client;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_for_project() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v9/workspaces/777/project_users"))
            .and(query_param("project_ids", "11"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"project_id": 11}])))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let users = ProjectUsers::new(&client).get_for_project(11).await.unwrap();
        assert_eq!(users[0]["project_id"], 11);
    }

    #[tokio::test]
    async fn test_bulk_operations_join_ids() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v9/workspaces/777/project_users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/v9/workspaces/777/project_users/4,1,4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/api/v9/workspaces/777/project_users/4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": [4]})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/v9/workspaces/777/project_users/4,1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let users = ProjectUsers::new(&client);

        users
            .create(&json!({"project_id": 11, "user_id": 2}), None)
            .await
            .unwrap();
        users
            .update(None, Some(&[4, 1, 4]), None, &json!({"manager": true}))
            .await
            .unwrap();
        users
            .patch(Some(4), None, None, &json!([]))
            .await
            .unwrap();
        assert!(users.delete(None, Some(&[4, 1])).await.unwrap());
    }
}
