use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::feed::handlers;
use crate::features::feed::services::FeedService;

/// Create routes for the category feed
pub fn routes(service: Arc<FeedService>) -> Router {
    Router::new()
        .route(
            "/api/categories/with-news",
            get(handlers::list_categories_with_news),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::core::config::FeedConfig;
    use crate::shared::test_helpers::{sample_stores, Stores};

    fn server(stores: &Stores) -> TestServer {
        TestServer::new(stores.router(&FeedConfig::default())).unwrap()
    }

    #[tokio::test]
    async fn test_feed_envelope_and_shape() {
        let response = server(&sample_stores())
            .get("/api/categories/with-news")
            .add_query_param("page", "1")
            .add_query_param("pageSize", "2")
            .add_query_param("isLatest", "true")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Categories with news retrieved");
        assert_eq!(body["meta"]["total"], 3);

        let data = &body["data"];
        assert_eq!(data["total"], 3);
        assert_eq!(data["page"], 1);
        assert_eq!(data["pageSize"], 2);
        assert_eq!(data["items"][0]["category"]["name"], "A");
        assert_eq!(data["items"][1]["category"]["name"], "B");

        let first = &data["items"][0]["news"][0];
        assert_eq!(first["id"], "a-latest-new");
        assert_eq!(first["sourceName"], "Acme");
        assert_eq!(first["sourceTitle"], "Acme");
        assert_eq!(first["sourceProfilePictureUrl"], "u");
        assert_eq!(first["categoryName"], "A");
        assert_eq!(first["isLatest"], true);
    }

    #[tokio::test]
    async fn test_unmatched_sources_return_empty_news() {
        let response = server(&sample_stores())
            .get("/api/categories/with-news")
            .add_query_param("sourceIds", "x")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        let items = body["data"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|item| item["news"] == json!([])));
    }

    #[tokio::test]
    async fn test_page_out_of_range() {
        let response = server(&sample_stores())
            .get("/api/categories/with-news")
            .add_query_param("page", "99")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["items"], json!([]));
        assert_eq!(body["data"]["total"], 3);
    }

    #[tokio::test]
    async fn test_invalid_page_size_is_bad_request() {
        let response = server(&sample_stores())
            .get("/api/categories/with-news")
            .add_query_param("pageSize", "ten")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_store_failure_is_internal_error() {
        let stores = sample_stores().with_failing_categories();

        let response = server(&stores).get("/api/categories/with-news").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Database error occurred");
    }
}
