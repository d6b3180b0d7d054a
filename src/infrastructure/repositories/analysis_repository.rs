use crate::domain::hotness::StoredAnalysis;
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use chrono::{DateTime, NaiveDate, Utc};
use std::sync::Arc;
use uuid::Uuid;

pub struct AnalysisRepository {
    pool: Arc<DbPool>,
}

impl AnalysisRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Persist the outcome of an analysis pass
    pub async fn create(
        &self,
        analysis_type: &str,
        analysis_time: DateTime<Utc>,
        result_data: serde_json::Value,
        summary: &str,
    ) -> AppResult<StoredAnalysis> {
        let pool = self.pool.as_ref();
        let stored = sqlx::query_as::<_, StoredAnalysis>(
            r#"
            INSERT INTO analysis_results (id, analysis_type, analysis_date, analysis_time, result_data, summary)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, analysis_type, analysis_date, analysis_time, result_data, summary
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(analysis_type)
        .bind(analysis_time.date_naive())
        .bind(analysis_time)
        .bind(result_data)
        .bind(summary)
        .fetch_one(pool)
        .await?;

        Ok(stored)
    }

    /// Stored results dated on or after `since`, newest first
    pub async fn find_since(
        &self,
        since: NaiveDate,
        analysis_type: Option<&str>,
    ) -> AppResult<Vec<StoredAnalysis>> {
        let pool = self.pool.as_ref();
        let history = sqlx::query_as::<_, StoredAnalysis>(
            r#"
            SELECT id, analysis_type, analysis_date, analysis_time, result_data, summary
            FROM analysis_results
            WHERE analysis_date >= $1
              AND ($2::text IS NULL OR analysis_type = $2)
            ORDER BY analysis_time DESC
            "#,
        )
        .bind(since)
        .bind(analysis_type)
        .fetch_all(pool)
        .await?;

        Ok(history)
    }
}
