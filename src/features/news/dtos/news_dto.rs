use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::feed::filter::ContentFilter;
use crate::features::news::models::NewsView;
use crate::shared::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::shared::query::{parse_flag, split_csv};
use crate::shared::types::PageRequest;

/// Response DTO for a news item with its resolved display attributes
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponseDto {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub category_id: String,
    pub source_id: String,
    pub published_at: DateTime<Utc>,
    pub is_latest: bool,
    pub is_popular: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_profile_picture_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_title: Option<String>,
}

impl From<NewsView> for NewsResponseDto {
    fn from(view: NewsView) -> Self {
        let item = view.item;
        Self {
            id: item.id,
            title: item.title,
            content: item.content,
            image_url: item.image_url,
            category_id: item.category_id,
            source_id: item.source_id,
            published_at: item.published_at,
            is_latest: item.is_latest,
            is_popular: item.is_popular,
            source_name: view.source_name,
            category_name: view.category_name,
            source_profile_picture_url: view.source_profile_picture_url,
            source_title: view.source_title,
        }
    }
}

/// Query parameters for the filtered news listing
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct NewsListQuery {
    /// Page number (1-indexed, default: 1)
    pub page: Option<i64>,
    /// Number of items per page (default: 10, max: 100)
    pub page_size: Option<i64>,
    /// Only latest news when `true` or `1`
    pub is_latest: Option<String>,
    /// Only popular news when `true` or `1`
    pub is_popular: Option<String>,
    /// Comma separated source ids
    pub source_ids: Option<String>,
}

impl NewsListQuery {
    pub fn page(&self) -> PageRequest {
        PageRequest::new(
            self.page.unwrap_or(DEFAULT_PAGE),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE),
        )
    }

    pub fn filter(&self) -> ContentFilter {
        ContentFilter::normalize(
            parse_flag(self.is_latest.as_deref()),
            parse_flag(self.is_popular.as_deref()),
            split_csv(self.source_ids.as_deref()),
        )
    }
}
