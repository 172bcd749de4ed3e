use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::core::error::{AppError, Result};
use crate::features::news::models::NewsItem;
use crate::features::news::repositories::NewsQuery;

/// Read access to the news collection.
///
/// Every listing is ordered `published_at DESC, id ASC`.
#[async_trait]
pub trait NewsStore: Send + Sync {
    /// All rows matching `query`
    async fn find(&self, query: &NewsQuery) -> Result<Vec<NewsItem>>;

    /// One offset/limit slice of the rows matching `query`
    async fn find_page(&self, query: &NewsQuery, offset: i64, limit: i64)
        -> Result<Vec<NewsItem>>;

    /// Rows matching `query`, partitioned by category and numbered from 1
    /// inside each partition; keeps rows with `offset < n <= offset + limit`
    async fn find_windowed(
        &self,
        query: &NewsQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<NewsItem>>;

    async fn count(&self, query: &NewsQuery) -> Result<i64>;
}

const NEWS_COLUMNS: &str =
    "id, title, content, image_url, category_id, source_id, published_at, is_latest, is_popular";

/// Postgres-backed news store
pub struct PgNewsStore {
    pool: PgPool,
}

impl PgNewsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn select(query: &NewsQuery) -> QueryBuilder<'static, Postgres> {
        let mut builder =
            QueryBuilder::new(format!("SELECT {} FROM news WHERE TRUE", NEWS_COLUMNS));
        query.push_sql(&mut builder);
        builder
    }
}

#[async_trait]
impl NewsStore for PgNewsStore {
    async fn find(&self, query: &NewsQuery) -> Result<Vec<NewsItem>> {
        let mut builder = Self::select(query);
        builder.push(" ORDER BY published_at DESC, id ASC");

        builder
            .build_query_as::<NewsItem>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch news: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_page(
        &self,
        query: &NewsQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<NewsItem>> {
        let mut builder = Self::select(query);
        builder
            .push(" ORDER BY published_at DESC, id ASC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        builder
            .build_query_as::<NewsItem>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch news page: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_windowed(
        &self,
        query: &NewsQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<NewsItem>> {
        let mut builder: QueryBuilder<'static, Postgres> = QueryBuilder::new(format!(
            r#"
            SELECT {columns}
            FROM (
                SELECT {columns},
                       ROW_NUMBER() OVER (
                           PARTITION BY category_id
                           ORDER BY published_at DESC, id ASC
                       ) AS row_number
                FROM news
                WHERE TRUE"#,
            columns = NEWS_COLUMNS
        ));
        query.push_sql(&mut builder);
        builder
            .push(") windowed WHERE row_number > ")
            .push_bind(offset)
            .push(" AND row_number <= ")
            .push_bind(offset.saturating_add(limit))
            .push(" ORDER BY category_id ASC, published_at DESC, id ASC");

        builder
            .build_query_as::<NewsItem>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch windowed news: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn count(&self, query: &NewsQuery) -> Result<i64> {
        let mut builder: QueryBuilder<'static, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM news WHERE TRUE");
        query.push_sql(&mut builder);

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count news: {:?}", e);
                AppError::Database(e)
            })
    }
}
