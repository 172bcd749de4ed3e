use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::feed::filter::ContentFilter;
use crate::features::feed::models::CategoryWithNews;
use crate::features::feed::services::FeedRequest;
use crate::features::news::dtos::NewsResponseDto;
use crate::shared::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::shared::query::{parse_flag, split_csv};
use crate::shared::types::PageRequest;

/// Query parameters for the category feed
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FeedQuery {
    /// Page of categories (1-indexed, default: 1)
    pub page: Option<i64>,
    /// Categories per page (default: 10)
    pub page_size: Option<i64>,
    /// Only latest news when `true` or `1`
    pub is_latest: Option<String>,
    /// Only popular news when `true` or `1`
    pub is_popular: Option<String>,
    /// Comma separated source ids
    pub source_ids: Option<String>,
}

impl FeedQuery {
    /// Normalize once at the boundary; nothing downstream re-parses
    pub fn into_request(self) -> FeedRequest {
        FeedRequest {
            page: PageRequest::new(
                self.page.unwrap_or(DEFAULT_PAGE),
                self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            ),
            filter: ContentFilter::normalize(
                parse_flag(self.is_latest.as_deref()),
                parse_flag(self.is_popular.as_deref()),
                split_csv(self.source_ids.as_deref()),
            ),
        }
    }
}

/// One category of the feed with its news
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryWithNewsDto {
    pub category: CategoryResponseDto,
    pub news: Vec<NewsResponseDto>,
}

impl From<CategoryWithNews> for CategoryWithNewsDto {
    fn from(value: CategoryWithNews) -> Self {
        Self {
            category: value.category.into(),
            news: value.news.into_iter().map(Into::into).collect(),
        }
    }
}
