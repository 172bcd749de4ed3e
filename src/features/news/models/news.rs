use chrono::{DateTime, Utc};
use sqlx::FromRow;
use validator::Validate;

use crate::core::error::Result;
use crate::shared::validation::{not_blank, validate_entity};

/// Database model for a news item. Only persisted columns live here.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub category_id: String,
    pub source_id: String,
    pub published_at: DateTime<Utc>,
    pub is_latest: bool,
    pub is_popular: bool,
}

/// Input for building a validated news item
#[derive(Debug, Clone, Default, Validate)]
pub struct NewNewsItem {
    pub id: String,
    #[validate(custom(function = "not_blank", message = "News title cannot be empty."))]
    pub title: String,
    pub content: String,
    pub image_url: String,
    #[validate(length(min = 1, message = "News category cannot be empty."))]
    pub category_id: String,
    #[validate(length(min = 1, message = "News source cannot be empty."))]
    pub source_id: String,
    /// Defaults to the creation time
    pub published_at: Option<DateTime<Utc>>,
    pub is_latest: bool,
    pub is_popular: bool,
}

impl NewsItem {
    #[allow(dead_code)]
    pub fn create(props: NewNewsItem) -> Result<Self> {
        validate_entity(&props)?;

        Ok(Self {
            id: props.id,
            title: props.title,
            content: props.content,
            image_url: props.image_url,
            category_id: props.category_id,
            source_id: props.source_id,
            published_at: props.published_at.unwrap_or_else(Utc::now),
            is_latest: props.is_latest,
            is_popular: props.is_popular,
        })
    }
}

/// Read-time projection of a news item with display attributes resolved
/// from its source and category. Never written back to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsView {
    pub item: NewsItem,
    pub source_name: Option<String>,
    pub category_name: Option<String>,
    pub source_profile_picture_url: Option<String>,
    pub source_title: Option<String>,
}

impl From<NewsItem> for NewsView {
    fn from(item: NewsItem) -> Self {
        Self {
            item,
            source_name: None,
            category_name: None,
            source_profile_picture_url: None,
            source_title: None,
        }
    }
}
