use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::feed::{dtos as feed_dtos, handlers as feed_handlers};
use crate::features::news::{dtos as news_dtos, handlers as news_handlers};
use crate::shared::types::{ApiResponse, Meta, Paginated};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Category feed
        feed_handlers::list_categories_with_news,
        // Categories
        categories_handlers::list_categories,
        // News
        news_handlers::list_news,
        news_handlers::list_news_by_category,
    ),
    components(
        schemas(
            Meta,
            // Categories
            categories_dtos::CategoryResponseDto,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            // News
            news_dtos::NewsResponseDto,
            Paginated<news_dtos::NewsResponseDto>,
            ApiResponse<Paginated<news_dtos::NewsResponseDto>>,
            // Feed
            feed_dtos::CategoryWithNewsDto,
            Paginated<feed_dtos::CategoryWithNewsDto>,
            ApiResponse<Paginated<feed_dtos::CategoryWithNewsDto>>,
        )
    ),
    tags(
        (name = "categories", description = "News categories and the category feed (public)"),
        (name = "news", description = "News listings (public)"),
    ),
    info(
        title = "Newsfeed API",
        version = "0.1.0",
        description = "API documentation for the newsfeed service",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
