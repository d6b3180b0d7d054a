use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::error::HotnessError;
use crate::domain::news::Article;

pub const ANALYSIS_TYPE_HOTNESS: &str = "hotness";

/// One entry of the hotness ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedArticle {
    pub id: Uuid,
    pub title: String,
    pub source: String,
    pub category: String,
    pub published_at: DateTime<Utc>,
    pub hotness_score: f64,
    pub view_count: i64,
    pub comment_count: i64,
    pub share_count: i64,
}

impl RankedArticle {
    pub fn new(article: &Article, hotness_score: f64) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            source: article.source.clone(),
            category: article.category_label().to_string(),
            published_at: article.published_at,
            hotness_score,
            view_count: article.view_count,
            comment_count: article.comment_count,
            share_count: article.share_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyTrendPoint {
    pub hour: u32,
    pub average_hotness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTrendPoint {
    pub date: NaiveDate,
    pub average_hotness: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendData {
    pub hourly: Vec<HourlyTrendPoint>,
    pub daily: Vec<DailyTrendPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryHotNews {
    pub id: Uuid,
    pub title: String,
    pub hotness_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub count: usize,
    pub average_hotness: f64,
    pub total_hotness: f64,
    pub hot_news: Vec<CategoryHotNews>,
}

/// Score computed for a single article, pending write-back
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArticleScore {
    pub id: Uuid,
    pub hotness_score: f64,
}

/// Output of one hotness analysis pass. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub analysis_type: String,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    pub top_news: Vec<RankedArticle>,
    pub trend_data: TrendData,
    pub category_data: Vec<CategorySummary>,
    pub total_news_count: usize,
    pub skipped_count: usize,
    pub analysis_period: String,
    /// Every computed score, not just the ranked head
    #[serde(skip)]
    pub scores: Vec<ArticleScore>,
}

impl AnalysisResult {
    /// First `limit` entries of the ranking
    pub fn top(&self, limit: i64) -> Result<Vec<RankedArticle>, HotnessError> {
        if limit <= 0 {
            return Err(HotnessError::InvalidInput(format!(
                "limit must be positive, got {}",
                limit
            )));
        }
        Ok(self
            .top_news
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    pub fn summary(&self) -> String {
        format!(
            "Analyzed {} articles, top {} ranked",
            self.total_news_count,
            self.top_news.len()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendGranularity {
    Hourly,
    Daily,
}

impl TrendGranularity {
    /// Unknown values fall back to hourly
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("daily") => TrendGranularity::Daily,
            _ => TrendGranularity::Hourly,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrendGranularity::Hourly => "hourly",
            TrendGranularity::Daily => "daily",
        }
    }
}

impl std::fmt::Display for TrendGranularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Persisted copy of an analysis pass
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StoredAnalysis {
    pub id: Uuid,
    pub analysis_type: String,
    pub analysis_date: NaiveDate,
    pub analysis_time: DateTime<Utc>,
    pub result_data: serde_json::Value,
    pub summary: Option<String>,
}
