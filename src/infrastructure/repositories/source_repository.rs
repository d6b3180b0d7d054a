use crate::domain::source::{NewsSource, SourceDefinition};
use crate::domain::source::model::DEFAULT_CRAWL_INTERVAL;
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use std::sync::Arc;
use uuid::Uuid;

pub struct SourceRepository {
    pool: Arc<DbPool>,
}

impl SourceRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> AppResult<Vec<NewsSource>> {
        let pool = self.pool.as_ref();
        let sources = sqlx::query_as::<_, NewsSource>(
            r#"
            SELECT id, source_key, name, url, enabled, crawl_interval,
                   last_crawl_time, crawl_status, error_message
            FROM news_sources
            ORDER BY source_key
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(sources)
    }

    pub async fn find_by_id(&self, source_id: Uuid) -> AppResult<Option<NewsSource>> {
        let pool = self.pool.as_ref();
        let source = sqlx::query_as::<_, NewsSource>(
            r#"
            SELECT id, source_key, name, url, enabled, crawl_interval,
                   last_crawl_time, crawl_status, error_message
            FROM news_sources
            WHERE id = $1
            "#,
        )
        .bind(source_id)
        .fetch_optional(pool)
        .await?;

        Ok(source)
    }

    pub async fn update_enabled(
        &self,
        source_id: Uuid,
        enabled: bool,
    ) -> AppResult<Option<NewsSource>> {
        let pool = self.pool.as_ref();
        let source = sqlx::query_as::<_, NewsSource>(
            r#"
            UPDATE news_sources
            SET enabled = $2
            WHERE id = $1
            RETURNING id, source_key, name, url, enabled, crawl_interval,
                      last_crawl_time, crawl_status, error_message
            "#,
        )
        .bind(source_id)
        .bind(enabled)
        .fetch_optional(pool)
        .await?;

        Ok(source)
    }

    pub async fn update_interval(
        &self,
        source_id: Uuid,
        crawl_interval: i32,
    ) -> AppResult<Option<NewsSource>> {
        let pool = self.pool.as_ref();
        let source = sqlx::query_as::<_, NewsSource>(
            r#"
            UPDATE news_sources
            SET crawl_interval = $2
            WHERE id = $1
            RETURNING id, source_key, name, url, enabled, crawl_interval,
                      last_crawl_time, crawl_status, error_message
            "#,
        )
        .bind(source_id)
        .bind(crawl_interval)
        .fetch_optional(pool)
        .await?;

        Ok(source)
    }

    /// Register a source unless one with the same key already exists.
    /// Returns true when a row was inserted.
    pub async fn insert_if_missing(&self, definition: &SourceDefinition) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query(
            r#"
            INSERT INTO news_sources (id, source_key, name, url, enabled, crawl_interval, crawl_status)
            VALUES ($1, $2, $3, $4, $5, $6, 'idle')
            ON CONFLICT (source_key) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&definition.source_key)
        .bind(&definition.name)
        .bind(&definition.url)
        .bind(definition.enabled)
        .bind(DEFAULT_CRAWL_INTERVAL)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    pub async fn count(&self) -> AppResult<i64> {
        let pool = self.pool.as_ref();
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM news_sources")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
