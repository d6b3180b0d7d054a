use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use moka::future::Cache;
use std::sync::Arc;

use super::dto::{
    describe_period, CategoryResponse, HistoryResponse, HotRankResponse, TrendResponse,
    TrendSeries,
};
use super::engine;
use super::error::HotnessServiceError;
use super::model::{AnalysisResult, TrendGranularity};
use super::sentiment::{score_sentiment, SentimentReport};
use super::weights::SourceWeights;
use crate::infrastructure::repositories::{AnalysisRepository, ArticleRepository};

/// Largest analysis window accepted, in days
pub const MAX_WINDOW_DAYS: i64 = 3650;
const CACHE_CAPACITY: u64 = 64;

pub struct HotnessService {
    article_repo: Arc<ArticleRepository>,
    analysis_repo: Arc<AnalysisRepository>,
    weights: SourceWeights,
    cache: Option<Cache<i64, AnalysisResult>>,
}

impl HotnessService {
    pub fn new(
        article_repo: Arc<ArticleRepository>,
        analysis_repo: Arc<AnalysisRepository>,
        weights: SourceWeights,
        cache_enabled: bool,
        cache_ttl: std::time::Duration,
    ) -> Self {
        // Results depend on "now", so entries expire on a fixed TTL rather than on idle
        let cache = if cache_enabled {
            Some(
                Cache::builder()
                    .max_capacity(CACHE_CAPACITY)
                    .time_to_live(cache_ttl)
                    .build(),
            )
        } else {
            None
        };

        Self {
            article_repo,
            analysis_repo,
            weights,
            cache,
        }
    }
}

#[async_trait]
pub trait HotnessServiceApi: Send + Sync {
    /// Full hotness pass over the last `days` days.
    ///
    /// Writes every computed score back to the article store and persists the
    /// result. May be answered from cache when caching is enabled.
    async fn analyze_hotness(&self, days: i64) -> Result<AnalysisResult, HotnessServiceError>;

    /// Same as `analyze_hotness` but always recomputes
    async fn recompute(&self, days: i64) -> Result<AnalysisResult, HotnessServiceError>;

    async fn hot_rank(&self, days: i64, limit: i64)
        -> Result<HotRankResponse, HotnessServiceError>;

    async fn trend(
        &self,
        days: i64,
        granularity: TrendGranularity,
    ) -> Result<TrendResponse, HotnessServiceError>;

    async fn category(&self, days: i64) -> Result<CategoryResponse, HotnessServiceError>;

    async fn sentiment(&self, days: i64) -> Result<SentimentReport, HotnessServiceError>;

    async fn history(
        &self,
        analysis_type: Option<String>,
        days: i64,
    ) -> Result<HistoryResponse, HotnessServiceError>;
}

#[async_trait]
impl HotnessServiceApi for HotnessService {
    async fn analyze_hotness(&self, days: i64) -> Result<AnalysisResult, HotnessServiceError> {
        if let Some(cache) = &self.cache {
            if let Some(cached) = cache.get(&days).await {
                tracing::debug!(days, "Hotness analysis cache hit");
                return Ok(cached);
            }
        }

        let result = self.recompute(days).await?;

        if let Some(cache) = &self.cache {
            cache.insert(days, result.clone()).await;
        }

        Ok(result)
    }

    async fn recompute(&self, days: i64) -> Result<AnalysisResult, HotnessServiceError> {
        let now = Utc::now();
        let window_start = window_start(days, now)?;

        let articles = self
            .article_repo
            .find_published_between(window_start, now)
            .await?;

        let result = engine::analyze(&articles, window_start, now, now, &self.weights)?
            .ok_or_else(|| {
                tracing::warn!(days, "No news found in analysis window");
                HotnessServiceError::NoData(days)
            })?;

        self.article_repo
            .update_hotness_scores(&result.scores)
            .await?;

        let result_data = serde_json::to_value(&result)
            .map_err(|e| HotnessServiceError::Other(e.into()))?;
        self.analysis_repo
            .create(&result.analysis_type, now, result_data, &result.summary())
            .await?;

        tracing::info!(
            days,
            total_news_count = result.total_news_count,
            skipped_count = result.skipped_count,
            "Hotness analysis completed"
        );

        Ok(result)
    }

    async fn hot_rank(
        &self,
        days: i64,
        limit: i64,
    ) -> Result<HotRankResponse, HotnessServiceError> {
        // Reject a bad limit before paying for a full pass
        if limit <= 0 {
            return Err(HotnessServiceError::Invalid(format!(
                "limit must be positive, got {}",
                limit
            )));
        }

        let result = self.analyze_hotness(days).await?;
        Ok(HotRankResponse {
            top_news: result.top(limit)?,
            limit,
            analysis_period: describe_period(days),
        })
    }

    async fn trend(
        &self,
        days: i64,
        granularity: TrendGranularity,
    ) -> Result<TrendResponse, HotnessServiceError> {
        let result = self.analyze_hotness(days).await?;
        let trend_data = match granularity {
            TrendGranularity::Hourly => TrendSeries::Hourly(result.trend_data.hourly),
            TrendGranularity::Daily => TrendSeries::Daily(result.trend_data.daily),
        };

        Ok(TrendResponse {
            trend_data,
            trend_type: granularity,
            analysis_period: describe_period(days),
        })
    }

    async fn category(&self, days: i64) -> Result<CategoryResponse, HotnessServiceError> {
        let result = self.analyze_hotness(days).await?;
        Ok(CategoryResponse {
            category_data: result.category_data,
            analysis_period: describe_period(days),
        })
    }

    async fn sentiment(&self, days: i64) -> Result<SentimentReport, HotnessServiceError> {
        let now = Utc::now();
        let window_start = window_start(days, now)?;

        let articles = self
            .article_repo
            .find_published_between(window_start, now)
            .await?;

        if articles.is_empty() {
            return Err(HotnessServiceError::NoData(days));
        }

        let report = score_sentiment(&articles);

        let scores: Vec<_> = report
            .sentiment_data
            .iter()
            .map(|row| (row.id, row.sentiment_score))
            .collect();
        self.article_repo
            .update_sentiment_scores(&scores)
            .await?;

        tracing::info!(
            days,
            articles = articles.len(),
            average_sentiment = report.average_sentiment,
            "Sentiment analysis completed"
        );

        Ok(report)
    }

    async fn history(
        &self,
        analysis_type: Option<String>,
        days: i64,
    ) -> Result<HistoryResponse, HotnessServiceError> {
        if !(0..=MAX_WINDOW_DAYS).contains(&days) {
            return Err(HotnessServiceError::Invalid(format!(
                "days must be between 0 and {}",
                MAX_WINDOW_DAYS
            )));
        }

        let today = Utc::now().date_naive();
        let since = today - Duration::days(days);
        let analysis_type = analysis_type.filter(|t| !t.trim().is_empty());

        let history = self
            .analysis_repo
            .find_since(since, analysis_type.as_deref())
            .await?;

        Ok(HistoryResponse {
            total: history.len(),
            analysis_history: history,
            analysis_period: format!("{} to {}", since, today),
        })
    }
}

fn window_start(days: i64, now: DateTime<Utc>) -> Result<DateTime<Utc>, HotnessServiceError> {
    if !(1..=MAX_WINDOW_DAYS).contains(&days) {
        return Err(HotnessServiceError::Invalid(format!(
            "days must be between 1 and {}",
            MAX_WINDOW_DAYS
        )));
    }
    Ok(now - Duration::days(days))
}
