use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::news::handlers;
use crate::features::news::services::NewsService;

/// Create routes for the news feature
pub fn routes(service: Arc<NewsService>) -> Router {
    Router::new()
        .route("/api/news", get(handlers::list_news))
        .route(
            "/api/news/category/{category_id}",
            get(handlers::list_news_by_category),
        )
        .with_state(service)
}
