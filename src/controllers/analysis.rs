use axum::extract::{rejection::QueryRejection, Query, State};
use serde::Deserialize;
use std::sync::Arc;

use crate::domain::hotness::{
    AnalysisResult, CategoryResponse, HistoryResponse, HotRankResponse, HotnessService,
    HotnessServiceApi, SentimentReport, TrendGranularity, TrendResponse,
};
use crate::domain::shared::ApiJson;
use crate::error::AppResult;

const DEFAULT_DAYS: i64 = 7;
const DEFAULT_HISTORY_DAYS: i64 = 30;
const DEFAULT_LIMIT: i64 = 20;

/// Query string shared by the analysis endpoints
#[derive(Debug, Default, Deserialize)]
pub struct AnalysisQuery {
    pub days: Option<i64>,
    pub limit: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl AnalysisQuery {
    fn days(&self) -> i64 {
        self.days.unwrap_or(DEFAULT_DAYS)
    }
}

pub struct AnalysisController {
    hotness_service: Arc<HotnessService>,
}

impl AnalysisController {
    pub fn new(hotness_service: Arc<HotnessService>) -> Self {
        Self { hotness_service }
    }

    /// GET /api/analysis/hotness - Full hotness pass
    pub async fn hotness(
        State(controller): State<Arc<AnalysisController>>,
        query: Result<Query<AnalysisQuery>, QueryRejection>,
    ) -> AppResult<ApiJson<AnalysisResult>> {
        let Query(query) = query?;
        let result = controller
            .hotness_service
            .analyze_hotness(query.days())
            .await?;
        Ok(ApiJson::ok(result, "Hotness analysis completed"))
    }

    /// GET /api/analysis/hot-rank
    pub async fn hot_rank(
        State(controller): State<Arc<AnalysisController>>,
        query: Result<Query<AnalysisQuery>, QueryRejection>,
    ) -> AppResult<ApiJson<HotRankResponse>> {
        let Query(query) = query?;
        let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
        let rank = controller
            .hotness_service
            .hot_rank(query.days(), limit)
            .await?;
        Ok(ApiJson::ok(rank, "Hot ranking retrieved"))
    }

    /// GET /api/analysis/trend - `type` is hourly (default) or daily
    pub async fn trend(
        State(controller): State<Arc<AnalysisController>>,
        query: Result<Query<AnalysisQuery>, QueryRejection>,
    ) -> AppResult<ApiJson<TrendResponse>> {
        let Query(query) = query?;
        let granularity = TrendGranularity::from_param(query.kind.as_deref());
        let trend = controller
            .hotness_service
            .trend(query.days(), granularity)
            .await?;
        Ok(ApiJson::ok(trend, "Hotness trend retrieved"))
    }

    /// GET /api/analysis/category
    pub async fn category(
        State(controller): State<Arc<AnalysisController>>,
        query: Result<Query<AnalysisQuery>, QueryRejection>,
    ) -> AppResult<ApiJson<CategoryResponse>> {
        let Query(query) = query?;
        let categories = controller.hotness_service.category(query.days()).await?;
        Ok(ApiJson::ok(categories, "Category hotness retrieved"))
    }

    /// GET /api/analysis/sentiment
    pub async fn sentiment(
        State(controller): State<Arc<AnalysisController>>,
        query: Result<Query<AnalysisQuery>, QueryRejection>,
    ) -> AppResult<ApiJson<SentimentReport>> {
        let Query(query) = query?;
        let report = controller.hotness_service.sentiment(query.days()).await?;
        Ok(ApiJson::ok(report, "Sentiment analysis completed"))
    }

    /// GET /api/analysis/history - Stored analysis results, newest first
    pub async fn history(
        State(controller): State<Arc<AnalysisController>>,
        query: Result<Query<AnalysisQuery>, QueryRejection>,
    ) -> AppResult<ApiJson<HistoryResponse>> {
        let Query(query) = query?;
        let days = query.days.unwrap_or(DEFAULT_HISTORY_DAYS);
        let history = controller.hotness_service.history(query.kind, days).await?;
        Ok(ApiJson::ok(history, "Analysis history retrieved"))
    }
}
