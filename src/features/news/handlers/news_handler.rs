use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppQuery;
use crate::features::news::dtos::{NewsListQuery, NewsResponseDto};
use crate::features::news::services::NewsService;
use crate::shared::types::{ApiResponse, Meta, Paginated, PaginationQuery};

/// List news across all categories
///
/// Filtered by the `isLatest`, `isPopular` and `sourceIds` flags, newest first.
#[utoipa::path(
    get,
    path = "/api/news",
    params(NewsListQuery),
    responses(
        (status = 200, description = "Paginated news", body = ApiResponse<Paginated<NewsResponseDto>>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "news"
)]
pub async fn list_news(
    State(service): State<Arc<NewsService>>,
    AppQuery(query): AppQuery<NewsListQuery>,
) -> Result<Json<ApiResponse<Paginated<NewsResponseDto>>>> {
    let page = service.list(query.page(), &query.filter()).await?;
    let total = page.total;
    Ok(Json(ApiResponse::success(
        Some(page.map(Into::into)),
        Some("News retrieved".to_string()),
        Some(Meta { total }),
    )))
}

/// List news of one category, newest first
#[utoipa::path(
    get,
    path = "/api/news/category/{category_id}",
    params(
        ("category_id" = String, Path, description = "Category id"),
        PaginationQuery
    ),
    responses(
        (status = 200, description = "Paginated news of the category", body = ApiResponse<Paginated<NewsResponseDto>>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "news"
)]
pub async fn list_news_by_category(
    State(service): State<Arc<NewsService>>,
    Path(category_id): Path<String>,
    AppQuery(pagination): AppQuery<PaginationQuery>,
) -> Result<Json<ApiResponse<Paginated<NewsResponseDto>>>> {
    let page = service
        .list_by_category(&category_id, pagination.capped())
        .await?;
    let total = page.total;
    Ok(Json(ApiResponse::success(
        Some(page.map(Into::into)),
        Some("News retrieved".to_string()),
        Some(Meta { total }),
    )))
}
