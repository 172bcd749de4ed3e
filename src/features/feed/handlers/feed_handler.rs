use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppQuery;
use crate::features::feed::dtos::{CategoryWithNewsDto, FeedQuery};
use crate::features::feed::services::FeedService;
use crate::shared::types::{ApiResponse, Meta, Paginated};

/// List categories with their news
///
/// Categories are paginated by name. Each carries every news item matching
/// the filter, newest first. A category without matching news is still
/// listed with an empty `news` array.
#[utoipa::path(
    get,
    path = "/api/categories/with-news",
    params(FeedQuery),
    responses(
        (status = 200, description = "Paginated categories with news", body = ApiResponse<Paginated<CategoryWithNewsDto>>),
        (status = 400, description = "Invalid query parameters"),
        (status = 500, description = "Store unavailable")
    ),
    tag = "categories"
)]
pub async fn list_categories_with_news(
    State(service): State<Arc<FeedService>>,
    AppQuery(query): AppQuery<FeedQuery>,
) -> Result<Json<ApiResponse<Paginated<CategoryWithNewsDto>>>> {
    let page = service
        .list_categories_with_news(&query.into_request())
        .await?;
    let total = page.total;

    Ok(Json(ApiResponse::success(
        Some(page.map(Into::into)),
        Some("Categories with news retrieved".to_string()),
        Some(Meta { total }),
    )))
}
