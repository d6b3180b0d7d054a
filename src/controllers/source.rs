use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::shared::ApiJson;
use crate::domain::source::{
    InitializeSourcesResponse, SourceEnabledResponse, SourceIntervalResponse, SourceListResponse,
    SourceService, SourceServiceApi, SourceStatusListResponse, UpdateIntervalRequest,
    UpdateStatusRequest,
};
use crate::error::AppResult;

pub struct SourceController {
    source_service: Arc<SourceService>,
}

impl SourceController {
    pub fn new(source_service: Arc<SourceService>) -> Self {
        Self { source_service }
    }

    /// GET /api/sources
    pub async fn list_sources(
        State(controller): State<Arc<SourceController>>,
    ) -> AppResult<ApiJson<SourceListResponse>> {
        let sources = controller.source_service.list_sources().await?;
        Ok(ApiJson::ok(sources, "News sources retrieved"))
    }

    /// GET /api/sources/status
    pub async fn list_statuses(
        State(controller): State<Arc<SourceController>>,
    ) -> AppResult<ApiJson<SourceStatusListResponse>> {
        let statuses = controller.source_service.list_statuses().await?;
        Ok(ApiJson::ok(statuses, "News source status retrieved"))
    }

    /// PUT /api/sources/{sourceId}/status - Enable or disable a source
    pub async fn update_status(
        State(controller): State<Arc<SourceController>>,
        source_id: Result<Path<Uuid>, PathRejection>,
        body: Result<Json<UpdateStatusRequest>, JsonRejection>,
    ) -> AppResult<ApiJson<SourceEnabledResponse>> {
        let Path(source_id) = source_id?;
        let Json(request) = body?;
        let updated = controller
            .source_service
            .set_enabled(source_id, request.enabled)
            .await?;
        let message = format!(
            "{} {}",
            updated.name,
            if updated.enabled { "enabled" } else { "disabled" }
        );
        Ok(ApiJson::ok(updated, message))
    }

    /// PUT /api/sources/{sourceId}/interval - Change the crawl interval
    pub async fn update_interval(
        State(controller): State<Arc<SourceController>>,
        source_id: Result<Path<Uuid>, PathRejection>,
        body: Result<Json<UpdateIntervalRequest>, JsonRejection>,
    ) -> AppResult<ApiJson<SourceIntervalResponse>> {
        let Path(source_id) = source_id?;
        let Json(request) = body?;
        let updated = controller
            .source_service
            .set_interval(source_id, request.crawl_interval)
            .await?;
        let message = format!(
            "Crawl interval of {} set to {} minutes",
            updated.name, updated.crawl_interval
        );
        Ok(ApiJson::ok(updated, message))
    }

    /// POST /api/sources/init - Register the built-in sources
    pub async fn initialize(
        State(controller): State<Arc<SourceController>>,
    ) -> AppResult<ApiJson<InitializeSourcesResponse>> {
        let response = controller.source_service.initialize().await?;
        let message = format!("Initialized {} news sources", response.initialized_count);
        Ok(ApiJson::ok(response, message))
    }
}
