use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::sources::models::Source;

/// Read access to the sources collection
#[async_trait]
pub trait SourceStore: Send + Sync {
    /// Batched lookup by id. Unknown ids are simply absent from the result.
    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<Source>>;
}

/// Postgres-backed source store
pub struct PgSourceStore {
    pool: PgPool,
}

impl PgSourceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SourceStore for PgSourceStore {
    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<Source>> {
        sqlx::query_as::<_, Source>(
            r#"
            SELECT id, name, image_url, description, source_category_id
            FROM sources
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch sources by ids: {:?}", e);
            AppError::Database(e)
        })
    }
}
