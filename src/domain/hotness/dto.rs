use serde::{Deserialize, Serialize};

use super::model::{
    CategorySummary, DailyTrendPoint, HourlyTrendPoint, RankedArticle, StoredAnalysis,
    TrendGranularity,
};

/// Response data for GET /api/analysis/hot-rank
#[derive(Debug, Serialize, Deserialize)]
pub struct HotRankResponse {
    pub top_news: Vec<RankedArticle>,
    pub limit: i64,
    pub analysis_period: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrendSeries {
    Hourly(Vec<HourlyTrendPoint>),
    Daily(Vec<DailyTrendPoint>),
}

/// Response data for GET /api/analysis/trend
#[derive(Debug, Serialize, Deserialize)]
pub struct TrendResponse {
    pub trend_data: TrendSeries,
    pub trend_type: TrendGranularity,
    pub analysis_period: String,
}

/// Response data for GET /api/analysis/category
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub category_data: Vec<CategorySummary>,
    pub analysis_period: String,
}

/// Response data for GET /api/analysis/history
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub analysis_history: Vec<StoredAnalysis>,
    pub total: usize,
    pub analysis_period: String,
}

pub fn describe_period(days: i64) -> String {
    format!("last {} days", days)
}
