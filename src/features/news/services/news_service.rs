use std::sync::Arc;

use crate::core::error::Result;
use crate::features::categories::CategoryStore;
use crate::features::feed::filter::ContentFilter;
use crate::features::feed::services::MetadataResolver;
use crate::features::news::models::{NewsItem, NewsView};
use crate::features::news::repositories::{NewsPredicate, NewsQuery};
use crate::features::news::NewsStore;
use crate::features::sources::SourceStore;
use crate::shared::types::{PageRequest, Paginated};

/// Service for plain news listings
pub struct NewsService {
    news: Arc<dyn NewsStore>,
    categories: Arc<dyn CategoryStore>,
    resolver: MetadataResolver,
}

impl NewsService {
    pub fn new(
        news: Arc<dyn NewsStore>,
        categories: Arc<dyn CategoryStore>,
        sources: Arc<dyn SourceStore>,
    ) -> Self {
        Self {
            news,
            categories,
            resolver: MetadataResolver::new(sources),
        }
    }

    /// One page of filtered news across every category, newest first
    pub async fn list(
        &self,
        page: PageRequest,
        filter: &ContentFilter,
    ) -> Result<Paginated<NewsView>> {
        let query = NewsQuery::matching(filter.compile());
        let (items, total) = self.fetch_page(&query, page).await?;
        let items = self.enrich(items).await?;

        Ok(Paginated::new(items, total, page))
    }

    /// One page of news in a single category. An unknown category yields an
    /// empty page rather than an error.
    pub async fn list_by_category(
        &self,
        category_id: &str,
        page: PageRequest,
    ) -> Result<Paginated<NewsView>> {
        let query = NewsQuery::in_category(category_id, NewsPredicate::default());
        let (category, (items, total)) = tokio::try_join!(
            self.categories.find_by_id(category_id),
            self.fetch_page(&query, page),
        )?;

        let mut items = self.enrich(items).await?;
        match category {
            Some(category) => MetadataResolver::attach_category_name(&category, &mut items),
            None => tracing::debug!(category_id, "News requested for unknown category"),
        }

        Ok(Paginated::new(items, total, page))
    }

    async fn fetch_page(
        &self,
        query: &NewsQuery,
        page: PageRequest,
    ) -> Result<(Vec<NewsItem>, i64)> {
        tokio::try_join!(
            self.news.find_page(query, page.offset(), page.page_size()),
            self.news.count(query),
        )
    }

    async fn enrich(
        &self,
        items: Vec<NewsItem>,
    ) -> Result<Vec<NewsView>> {
        let rows = items.into_iter().map(NewsView::from).collect();
        self.resolver.attach_source_metadata(rows).await
    }
}
