use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::news::{
    Article, IngestRequest, IngestResponse, InteractionRequest, NewsFilter, NewsListResponse,
    NewsQuery, NewsService, NewsServiceApi,
};
use crate::domain::shared::ApiJson;
use crate::error::AppResult;

pub struct NewsController {
    news_service: Arc<NewsService>,
}

impl NewsController {
    pub fn new(news_service: Arc<NewsService>) -> Self {
        Self { news_service }
    }

    /// GET /api/news - Paginated, filterable article list
    pub async fn list_news(
        State(controller): State<Arc<NewsController>>,
        query: Result<Query<NewsQuery>, QueryRejection>,
    ) -> AppResult<ApiJson<NewsListResponse>> {
        let Query(query) = query?;
        let filter = NewsFilter::try_from(query)?;
        let news = controller.news_service.list_news(filter).await?;
        Ok(ApiJson::ok(news, "News list retrieved"))
    }

    /// GET /api/news/{newsId} - Article detail, counts as one view
    pub async fn get_news(
        State(controller): State<Arc<NewsController>>,
        news_id: Result<Path<Uuid>, PathRejection>,
    ) -> AppResult<ApiJson<Article>> {
        let Path(news_id) = news_id?;
        let article = controller.news_service.get_news(news_id).await?;
        Ok(ApiJson::ok(article, "News detail retrieved"))
    }

    /// POST /api/news/{newsId}/interact - Replace interaction counters
    pub async fn interact(
        State(controller): State<Arc<NewsController>>,
        news_id: Result<Path<Uuid>, PathRejection>,
        body: Result<Json<InteractionRequest>, JsonRejection>,
    ) -> AppResult<ApiJson<Article>> {
        let Path(news_id) = news_id?;
        let Json(request) = body?;
        let article = controller
            .news_service
            .update_interaction(news_id, request)
            .await?;
        Ok(ApiJson::ok(article, "Interaction data updated"))
    }

    /// POST /api/news - Ingest raw articles from fetchers
    pub async fn ingest(
        State(controller): State<Arc<NewsController>>,
        body: Result<Json<IngestRequest>, JsonRejection>,
    ) -> AppResult<ApiJson<IngestResponse>> {
        let Json(request) = body?;
        let response = controller.news_service.ingest(request).await?;
        let message = format!(
            "Stored {} new and {} updated articles",
            response.inserted, response.updated
        );
        Ok(ApiJson::ok(response, message))
    }
}
