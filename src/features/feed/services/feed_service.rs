use std::sync::Arc;

use crate::core::config::{FeedConfig, PaginationMode};
use crate::core::error::Result;
use crate::features::categories::models::Category;
use crate::features::categories::CategoryStore;
use crate::features::feed::filter::ContentFilter;
use crate::features::feed::models::CategoryWithNews;
use crate::features::feed::services::{CategoryPageSelector, ContentJoiner, MetadataResolver};
use crate::features::news::models::NewsView;
use crate::features::news::repositories::{NewsPredicate, NewsQuery};
use crate::features::news::NewsStore;
use crate::features::sources::SourceStore;
use crate::shared::types::{PageRequest, Paginated};

/// A normalized feed request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedRequest {
    pub page: PageRequest,
    pub filter: ContentFilter,
}

/// Service for the categories-with-news feed
pub struct FeedService {
    categories: Arc<dyn CategoryStore>,
    news: Arc<dyn NewsStore>,
    selector: CategoryPageSelector,
    joiner: ContentJoiner,
    mode: PaginationMode,
}

impl FeedService {
    pub fn new(
        categories: Arc<dyn CategoryStore>,
        news: Arc<dyn NewsStore>,
        sources: Arc<dyn SourceStore>,
        config: &FeedConfig,
    ) -> Self {
        Self {
            selector: CategoryPageSelector::new(Arc::clone(&categories)),
            joiner: ContentJoiner::new(
                Arc::clone(&news),
                MetadataResolver::new(sources),
                config.category_fetch_concurrency,
            ),
            categories,
            news,
            mode: config.pagination_mode,
        }
    }

    /// One page of categories, each with its filtered news newest first.
    ///
    /// In `Categories` mode `total` counts categories and the page bounds the
    /// number of categories. In `NewsWindow` mode every category is returned,
    /// the page bounds news rows per category and `total` counts matching news.
    pub async fn list_categories_with_news(
        &self,
        request: &FeedRequest,
    ) -> Result<Paginated<CategoryWithNews>> {
        let predicate = request.filter.compile();

        let page = match self.mode {
            PaginationMode::Categories => {
                self.paginate_by_category(request.page, &predicate).await?
            }
            PaginationMode::NewsWindow => {
                self.paginate_by_news_window(request.page, &predicate)
                    .await?
            }
        };

        tracing::debug!(
            mode = ?self.mode,
            page = page.page,
            page_size = page.page_size,
            source_filter = request.filter.source_ids().len(),
            items = page.items.len(),
            total = page.total,
            "Assembled category feed page"
        );

        Ok(page)
    }

    async fn paginate_by_category(
        &self,
        page: PageRequest,
        predicate: &NewsPredicate,
    ) -> Result<Paginated<CategoryWithNews>> {
        let selection = self.selector.select_page(page).await?;
        let groups = self
            .joiner
            .join_page(&selection.categories, predicate)
            .await?;

        Ok(assemble(selection.categories, groups, selection.total, page))
    }

    async fn paginate_by_news_window(
        &self,
        page: PageRequest,
        predicate: &NewsPredicate,
    ) -> Result<Paginated<CategoryWithNews>> {
        let query = NewsQuery::matching(predicate.clone());
        let (categories, total) =
            tokio::try_join!(self.categories.list_all(), self.news.count(&query))?;
        let groups = self
            .joiner
            .join_windowed(&categories, predicate, page)
            .await?;

        Ok(assemble(categories, groups, total, page))
    }
}

fn assemble(
    categories: Vec<Category>,
    groups: Vec<Vec<NewsView>>,
    total: i64,
    page: PageRequest,
) -> Paginated<CategoryWithNews> {
    let items = categories
        .into_iter()
        .zip(groups)
        .map(|(category, news)| CategoryWithNews { category, news })
        .collect();

    Paginated::new(items, total, page)
}
