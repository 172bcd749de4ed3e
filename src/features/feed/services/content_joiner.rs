use std::collections::HashMap;
use std::sync::Arc;

use futures::{stream, StreamExt, TryStreamExt};

use crate::core::error::Result;
use crate::features::categories::models::Category;
use crate::features::feed::services::MetadataResolver;
use crate::features::news::models::{NewsItem, NewsView};
use crate::features::news::repositories::{NewsPredicate, NewsQuery};
use crate::features::news::NewsStore;
use crate::shared::types::PageRequest;

/// Fetches the news of each selected category and merges in display metadata.
///
/// Output is one vector per input category, in input order. News inside a
/// category is ordered newest first with ties broken by id.
pub struct ContentJoiner {
    news: Arc<dyn NewsStore>,
    resolver: MetadataResolver,
    concurrency: usize,
}

impl ContentJoiner {
    pub fn new(news: Arc<dyn NewsStore>, resolver: MetadataResolver, concurrency: usize) -> Self {
        Self {
            news,
            resolver,
            concurrency: concurrency.max(1),
        }
    }

    /// Every matching row of every category, unbounded per category.
    ///
    /// One news query per category (at most `concurrency` in flight) and a
    /// single source lookup for the whole page.
    pub async fn join_page(
        &self,
        categories: &[Category],
        predicate: &NewsPredicate,
    ) -> Result<Vec<Vec<NewsView>>> {
        // Owned queries and store handles keep the page future Send
        let queries: Vec<NewsQuery> = categories
            .iter()
            .map(|category| NewsQuery::in_category(category.id.clone(), predicate.clone()))
            .collect();

        let groups: Vec<Vec<NewsItem>> = stream::iter(queries)
            .map(|query| {
                let news = Arc::clone(&self.news);
                async move { news.find(&query).await }
            })
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        self.enrich_groups(categories, groups).await
    }

    /// Row-window join: each category keeps only the rows whose per-category
    /// row number falls inside the page window.
    pub async fn join_windowed(
        &self,
        categories: &[Category],
        predicate: &NewsPredicate,
        page: PageRequest,
    ) -> Result<Vec<Vec<NewsView>>> {
        let rows = self
            .news
            .find_windowed(
                &NewsQuery::matching(predicate.clone()),
                page.offset(),
                page.page_size(),
            )
            .await?;

        let mut by_category: HashMap<String, Vec<NewsItem>> = HashMap::new();
        for row in rows {
            by_category
                .entry(row.category_id.clone())
                .or_default()
                .push(row);
        }

        let groups = categories
            .iter()
            .map(|category| by_category.remove(&category.id).unwrap_or_default())
            .collect();

        self.enrich_groups(categories, groups).await
    }

    async fn enrich_groups(
        &self,
        categories: &[Category],
        groups: Vec<Vec<NewsItem>>,
    ) -> Result<Vec<Vec<NewsView>>> {
        let lengths: Vec<usize> = groups.iter().map(Vec::len).collect();
        let rows: Vec<NewsView> = groups
            .into_iter()
            .flat_map(|mut group| {
                sort_newest_first(&mut group);
                group
            })
            .map(NewsView::from)
            .collect();

        // Flattened so the whole page shares one source lookup
        let mut enriched = self.resolver.attach_source_metadata(rows).await?.into_iter();

        Ok(categories
            .iter()
            .zip(lengths)
            .map(|(category, len)| {
                let mut rows: Vec<NewsView> = enriched.by_ref().take(len).collect();
                MetadataResolver::attach_category_name(category, &mut rows);
                rows
            })
            .collect())
    }
}

fn sort_newest_first(items: &mut [NewsItem]) {
    items.sort_by(|a, b| {
        b.published_at
            .cmp(&a.published_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}
