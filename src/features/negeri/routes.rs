use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::negeri::handlers;
use crate::features::negeri::services::NegeriService;

/// Create routes for the negeri feature
pub fn routes(service: Arc<NegeriService>) -> Router {
    Router::new()
        .route(
            "/api/negeri",
            get(handlers::list_negeri).post(handlers::create_negeri),
        )
        .route(
            "/api/negeri/{id}",
            get(handlers::get_negeri)
                .patch(handlers::update_negeri)
                .delete(handlers::delete_negeri),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::core::config::NegeriDeletePolicy;
    use crate::shared::test_helpers::test_app;

    fn server() -> TestServer {
        let (app, _) = test_app(NegeriDeletePolicy::Unguarded);
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_created() {
        let server = server();

        let response = server
            .post("/api/negeri")
            .json(&json!({ "name": "Selangor" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], 1);
        assert_eq!(body["data"]["name"], "Selangor");
    }

    #[tokio::test]
    async fn test_create_blank_name_is_bad_request() {
        let server = server();

        let response = server
            .post("/api/negeri")
            .json(&json!({ "name": "" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_create_missing_name_is_bad_request() {
        let server = server();

        let response = server.post("/api/negeri").json(&json!({})).await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_duplicate_is_conflict() {
        let server = server();
        server
            .post("/api/negeri")
            .json(&json!({ "name": "Johor" }))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server
            .post("/api/negeri")
            .json(&json!({ "name": "Johor" }))
            .await;

        response.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_list_with_name_filter() {
        let server = server();
        for name in ["Sabah", "Sarawak", "Perak"] {
            server
                .post("/api/negeri")
                .json(&json!({ "name": name }))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let response = server
            .get("/api/negeri")
            .add_query_param("name", "Sa")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["meta"]["total"], 2);
        assert_eq!(body["data"][0]["name"], "Sabah");
        assert_eq!(body["data"][1]["name"], "Sarawak");

        let all: Value = server.get("/api/negeri").await.json();
        assert_eq!(all["meta"]["total"], 3);
    }

    #[tokio::test]
    async fn test_get_update_delete_lifecycle() {
        let server = server();
        server
            .post("/api/negeri")
            .json(&json!({ "name": "Penang" }))
            .await
            .assert_status(StatusCode::CREATED);

        let updated: Value = server
            .patch("/api/negeri/1")
            .json(&json!({ "name": "Pulau Pinang" }))
            .await
            .json();
        assert_eq!(updated["data"]["name"], "Pulau Pinang");

        let fetched: Value = server.get("/api/negeri/1").await.json();
        assert_eq!(fetched["data"]["name"], "Pulau Pinang");

        server.delete("/api/negeri/1").await.assert_status_ok();
        server
            .get("/api/negeri/1")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_negeri_is_not_found() {
        let server = server();

        let response = server.get("/api/negeri/99").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["message"], "Negeri with ID 99 not found");

        server
            .patch("/api/negeri/99")
            .json(&json!({ "name": "Labuan" }))
            .await
            .assert_status(StatusCode::NOT_FOUND);
        server
            .delete("/api/negeri/99")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
