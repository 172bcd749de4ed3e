//! In-memory stores and fixture builders shared by unit tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use chrono::{DateTime, Duration, TimeZone, Utc};
use fake::faker::lorem::en::Sentence;
use fake::Fake;

use crate::core::config::FeedConfig;
use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, NewCategory};
use crate::features::categories::{CategoryService, CategoryStore};
use crate::features::feed::FeedService;
use crate::features::news::models::{NewNewsItem, NewsItem};
use crate::features::news::repositories::NewsQuery;
use crate::features::news::{NewsService, NewsStore};
use crate::features::sources::models::{NewSource, Source};
use crate::features::sources::SourceStore;
use crate::features::{categories, feed, news as news_feature};

fn unavailable() -> AppError {
    AppError::Database(sqlx::Error::PoolTimedOut)
}

fn newest_first(items: &mut [NewsItem]) {
    items.sort_by(|a, b| {
        b.published_at
            .cmp(&a.published_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}

fn slice<T: Clone>(items: &[T], offset: i64, limit: i64) -> Vec<T> {
    items
        .iter()
        .skip(offset.max(0) as usize)
        .take(limit.max(0) as usize)
        .cloned()
        .collect()
}

// =============================================================================
// STORES
// =============================================================================

pub struct InMemoryCategoryStore {
    categories: Vec<Category>,
    failing: bool,
}

impl InMemoryCategoryStore {
    pub fn new(mut categories: Vec<Category>) -> Self {
        categories.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Self {
            categories,
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            categories: Vec::new(),
            failing: true,
        }
    }

    fn check(&self) -> Result<()> {
        if self.failing {
            return Err(unavailable());
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryStore for InMemoryCategoryStore {
    async fn list_all(&self) -> Result<Vec<Category>> {
        self.check()?;
        Ok(self.categories.clone())
    }

    async fn list_page(&self, offset: i64, limit: i64) -> Result<Vec<Category>> {
        self.check()?;
        Ok(slice(&self.categories, offset, limit))
    }

    async fn count(&self) -> Result<i64> {
        self.check()?;
        Ok(self.categories.len() as i64)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Category>> {
        self.check()?;
        Ok(self.categories.iter().find(|c| c.id == id).cloned())
    }
}

pub struct InMemoryNewsStore {
    items: Vec<NewsItem>,
    failing: bool,
    find_calls: AtomicU64,
}

impl InMemoryNewsStore {
    pub fn new(mut items: Vec<NewsItem>) -> Self {
        newest_first(&mut items);
        Self {
            items,
            failing: false,
            find_calls: AtomicU64::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new(Vec::new())
        }
    }

    /// Number of `find` calls served so far
    pub fn find_calls(&self) -> u64 {
        self.find_calls.load(Ordering::Relaxed)
    }

    fn matching(&self, query: &NewsQuery) -> Result<Vec<NewsItem>> {
        if self.failing {
            return Err(unavailable());
        }
        Ok(self
            .items
            .iter()
            .filter(|item| query.matches(item))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl NewsStore for InMemoryNewsStore {
    async fn find(&self, query: &NewsQuery) -> Result<Vec<NewsItem>> {
        self.find_calls.fetch_add(1, Ordering::Relaxed);
        self.matching(query)
    }

    async fn find_page(
        &self,
        query: &NewsQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<NewsItem>> {
        Ok(slice(&self.matching(query)?, offset, limit))
    }

    async fn find_windowed(
        &self,
        query: &NewsQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<NewsItem>> {
        let rows = self.matching(query)?;
        let mut category_ids: Vec<&str> = rows.iter().map(|r| r.category_id.as_str()).collect();
        category_ids.sort_unstable();
        category_ids.dedup();

        Ok(category_ids
            .into_iter()
            .flat_map(|category_id| {
                let partition: Vec<NewsItem> = rows
                    .iter()
                    .filter(|r| r.category_id == category_id)
                    .cloned()
                    .collect();
                slice(&partition, offset, limit)
            })
            .collect())
    }

    async fn count(&self, query: &NewsQuery) -> Result<i64> {
        Ok(self.matching(query)?.len() as i64)
    }
}

pub struct InMemorySourceStore {
    sources: Vec<Source>,
    requested: Mutex<Vec<Vec<String>>>,
}

impl InMemorySourceStore {
    pub fn new(sources: Vec<Source>) -> Self {
        Self {
            sources,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn find_by_ids_calls(&self) -> usize {
        self.requested.lock().unwrap().len()
    }

    /// Id lists received by each `find_by_ids` call, in call order
    pub fn requested_ids(&self) -> Vec<Vec<String>> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl SourceStore for InMemorySourceStore {
    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<Source>> {
        self.requested.lock().unwrap().push(ids.to_vec());
        Ok(self
            .sources
            .iter()
            .filter(|source| ids.contains(&source.id))
            .cloned()
            .collect())
    }
}

/// One set of in-memory stores wired into every service
pub struct Stores {
    pub categories: Arc<InMemoryCategoryStore>,
    pub news: Arc<InMemoryNewsStore>,
    pub sources: Arc<InMemorySourceStore>,
}

impl Stores {
    pub fn new(categories: Vec<Category>, news: Vec<NewsItem>, sources: Vec<Source>) -> Self {
        Self {
            categories: Arc::new(InMemoryCategoryStore::new(categories)),
            news: Arc::new(InMemoryNewsStore::new(news)),
            sources: Arc::new(InMemorySourceStore::new(sources)),
        }
    }

    pub fn with_failing_categories(self) -> Self {
        Self {
            categories: Arc::new(InMemoryCategoryStore::failing()),
            ..self
        }
    }

    pub fn feed_service(&self, config: &FeedConfig) -> FeedService {
        FeedService::new(
            self.categories.clone(),
            self.news.clone(),
            self.sources.clone(),
            config,
        )
    }

    pub fn news_service(&self) -> NewsService {
        NewsService::new(
            self.news.clone(),
            self.categories.clone(),
            self.sources.clone(),
        )
    }

    pub fn category_service(&self) -> CategoryService {
        CategoryService::new(self.categories.clone())
    }

    /// Public routes of every feature, backed by these stores
    pub fn router(&self, config: &FeedConfig) -> Router {
        Router::new()
            .merge(feed::routes::routes(Arc::new(self.feed_service(config))))
            .merge(categories::routes::routes(Arc::new(self.category_service())))
            .merge(news_feature::routes::routes(Arc::new(self.news_service())))
    }
}

// =============================================================================
// FIXTURES
// =============================================================================

/// Fixed origin for fixture timestamps
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

pub fn category(id: &str, name: &str) -> Category {
    Category::create(NewCategory {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("All about {}", name),
        color_code: "#336699".to_string(),
        image_url: format!("https://cdn.example.com/categories/{}.png", id),
    })
    .unwrap()
}

/// News item published `minutes` after [`base_time`]
pub fn news(id: &str, category_id: &str, source_id: &str, minutes: i64, is_latest: bool) -> NewsItem {
    NewsItem::create(NewNewsItem {
        id: id.to_string(),
        title: format!("Headline {}", id),
        content: Sentence(3..8).fake(),
        image_url: format!("https://cdn.example.com/news/{}.png", id),
        category_id: category_id.to_string(),
        source_id: source_id.to_string(),
        published_at: Some(base_time() + Duration::minutes(minutes)),
        is_latest,
        is_popular: false,
    })
    .unwrap()
}

pub fn source(id: &str, name: &str, image_url: &str) -> Source {
    Source::create(NewSource {
        id: id.to_string(),
        name: name.to_string(),
        image_url: image_url.to_string(),
        description: String::new(),
        source_category_id: "press".to_string(),
    })
    .unwrap()
}

/// Three categories A, B, C with a mix of latest and older news from two
/// sources. C has no latest news.
pub fn sample_stores() -> Stores {
    Stores::new(
        vec![
            category("cat-c", "C"),
            category("cat-a", "A"),
            category("cat-b", "B"),
        ],
        vec![
            news("a-latest-old", "cat-a", "s1", 10, true),
            news("a-stale", "cat-a", "s2", 20, false),
            news("a-latest-new", "cat-a", "s1", 30, true),
            news("b-latest", "cat-b", "s2", 15, true),
            news("b-stale", "cat-b", "s1", 5, false),
            news("c-stale", "cat-c", "s2", 25, false),
        ],
        vec![source("s1", "Acme", "u"), source("s2", "Globe", "g")],
    )
}
