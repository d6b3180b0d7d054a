use crate::domain::hotness::model::ArticleScore;
use crate::domain::news::{
    Article, IngestArticle, NewsFilter, NewsSort, SortOrder, DEFAULT_CATEGORY,
};
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

const ARTICLE_COLUMNS: &str = "id, title, content, source, url, category, published_at, \
     crawled_at, hotness_score, sentiment_score, view_count, comment_count, share_count";

/// `$1` source, `$2` category, `$3` the label missing and blank categories are grouped under
const LIST_FILTER: &str = "($1::text IS NULL OR source = $1) \
     AND ($2::text IS NULL OR category = $2 \
          OR ($2 = $3 AND (category IS NULL OR trim(category) = '')))";

pub struct ArticleRepository {
    pool: Arc<DbPool>,
}

impl ArticleRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// One page of articles matching the filter, plus the total match count
    pub async fn list(&self, filter: &NewsFilter) -> AppResult<(Vec<Article>, i64)> {
        let pool = self.pool.as_ref();

        let sort_column = match filter.sort {
            NewsSort::PublishTime => "published_at",
            NewsSort::Hotness => "hotness_score",
        };
        let direction = match filter.order {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        };

        let query = format!(
            r#"
            SELECT {}
            FROM news
            WHERE {}
            ORDER BY {} {}, id
            LIMIT $4 OFFSET $5
            "#,
            ARTICLE_COLUMNS, LIST_FILTER, sort_column, direction
        );

        let articles = sqlx::query_as::<_, Article>(&query)
            .bind(filter.source.as_deref())
            .bind(filter.category.as_deref())
            .bind(DEFAULT_CATEGORY)
            .bind(filter.per_page)
            .bind(filter.offset())
            .fetch_all(pool)
            .await?;

        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM news WHERE {}",
            LIST_FILTER
        ))
        .bind(filter.source.as_deref())
        .bind(filter.category.as_deref())
        .bind(DEFAULT_CATEGORY)
        .fetch_one(pool)
        .await?;

        Ok((articles, total))
    }

    pub async fn find_by_id(&self, news_id: Uuid) -> AppResult<Option<Article>> {
        let pool = self.pool.as_ref();
        let article = sqlx::query_as::<_, Article>(&format!(
            "SELECT {} FROM news WHERE id = $1",
            ARTICLE_COLUMNS
        ))
        .bind(news_id)
        .fetch_optional(pool)
        .await?;

        Ok(article)
    }

    /// Snapshot of every article published inside `[start, end]`, newest first
    pub async fn find_published_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<Article>> {
        let pool = self.pool.as_ref();
        let articles = sqlx::query_as::<_, Article>(&format!(
            r#"
            SELECT {}
            FROM news
            WHERE published_at >= $1 AND published_at <= $2
            ORDER BY published_at DESC, id
            "#,
            ARTICLE_COLUMNS
        ))
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await?;

        Ok(articles)
    }

    /// Count a read atomically and return the updated article
    pub async fn increment_view_count(&self, news_id: Uuid) -> AppResult<Option<Article>> {
        let pool = self.pool.as_ref();
        let article = sqlx::query_as::<_, Article>(&format!(
            r#"
            UPDATE news
            SET view_count = view_count + 1
            WHERE id = $1
            RETURNING {}
            "#,
            ARTICLE_COLUMNS
        ))
        .bind(news_id)
        .fetch_optional(pool)
        .await?;

        Ok(article)
    }

    /// Replace the counters that are given, leave the others untouched
    pub async fn update_interactions(
        &self,
        news_id: Uuid,
        view_count: Option<i64>,
        comment_count: Option<i64>,
        share_count: Option<i64>,
    ) -> AppResult<Option<Article>> {
        let pool = self.pool.as_ref();
        let article = sqlx::query_as::<_, Article>(&format!(
            r#"
            UPDATE news
            SET view_count = COALESCE($2, view_count),
                comment_count = COALESCE($3, comment_count),
                share_count = COALESCE($4, share_count)
            WHERE id = $1
            RETURNING {}
            "#,
            ARTICLE_COLUMNS
        ))
        .bind(news_id)
        .bind(view_count)
        .bind(comment_count)
        .bind(share_count)
        .fetch_optional(pool)
        .await?;

        Ok(article)
    }

    /// Insert a fetched article or refresh the text of the row with the same URL.
    /// Returns true when a new row was created.
    /// Upsert a batch of records by URL in one transaction.
    /// Returns how many rows were inserted and how many were updated.
    pub async fn upsert_batch(&self, articles: &[IngestArticle]) -> AppResult<(usize, usize)> {
        let mut tx = self.pool.begin().await?;
        let crawled_at = Utc::now();
        let (mut inserted, mut updated) = (0, 0);

        for article in articles {
            let is_new = sqlx::query_scalar::<_, bool>(
                r#"
                INSERT INTO news (id, title, content, source, url, category, published_at, crawled_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ON CONFLICT (url) DO UPDATE
                SET title = EXCLUDED.title,
                    content = EXCLUDED.content,
                    category = EXCLUDED.category,
                    crawled_at = EXCLUDED.crawled_at
                RETURNING (xmax = 0) AS inserted
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(&article.title)
            .bind(&article.content)
            .bind(&article.source)
            .bind(&article.url)
            .bind(article.category.as_deref())
            .bind(article.published_at)
            .bind(crawled_at)
            .fetch_one(&mut *tx)
            .await?;

            if is_new {
                inserted += 1;
            } else {
                updated += 1;
            }
        }

        tx.commit().await?;

        Ok((inserted, updated))
    }

    /// Write back a full set of hotness scores in one transaction
    pub async fn update_hotness_scores(&self, scores: &[ArticleScore]) -> AppResult<u64> {
        let ids: Vec<Uuid> = scores.iter().map(|s| s.id).collect();
        let values: Vec<f64> = scores.iter().map(|s| s.hotness_score).collect();
        self.write_scores("hotness_score", ids, values).await
    }

    /// Write back a full set of sentiment scores in one transaction
    pub async fn update_sentiment_scores(&self, scores: &[(Uuid, f64)]) -> AppResult<u64> {
        let (ids, values): (Vec<Uuid>, Vec<f64>) = scores.iter().copied().unzip();
        self.write_scores("sentiment_score", ids, values).await
    }

    async fn write_scores(&self, column: &str, ids: Vec<Uuid>, values: Vec<f64>) -> AppResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        let result = sqlx::query(&format!(
            r#"
            UPDATE news
            SET {column} = scores.value
            FROM UNNEST($1::uuid[], $2::float8[]) AS scores(id, value)
            WHERE news.id = scores.id
            "#,
            column = column
        ))
        .bind(ids)
        .bind(values)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        Ok(result.rows_affected())
    }
}
