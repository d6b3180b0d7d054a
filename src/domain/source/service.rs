use super::error::SourceServiceError;
use super::model::{NewsSource, SourceDefinition};
use super::{
    InitializeSourcesResponse, SourceEnabledResponse, SourceIntervalResponse, SourceListResponse,
    SourceStatus, SourceStatusListResponse,
};
use crate::infrastructure::repositories::SourceRepository;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

pub struct SourceService {
    source_repo: Arc<SourceRepository>,
    defaults: Vec<SourceDefinition>,
}

impl SourceService {
    pub fn new(source_repo: Arc<SourceRepository>, defaults: Vec<SourceDefinition>) -> Self {
        Self {
            source_repo,
            defaults,
        }
    }
}

#[async_trait]
pub trait SourceServiceApi: Send + Sync {
    async fn list_sources(&self) -> Result<SourceListResponse, SourceServiceError>;

    async fn list_statuses(&self) -> Result<SourceStatusListResponse, SourceServiceError>;

    async fn set_enabled(
        &self,
        source_id: Uuid,
        enabled: Option<bool>,
    ) -> Result<SourceEnabledResponse, SourceServiceError>;

    async fn set_interval(
        &self,
        source_id: Uuid,
        crawl_interval: Option<Value>,
    ) -> Result<SourceIntervalResponse, SourceServiceError>;

    /// Insert the configured default sources that are not registered yet
    async fn initialize(&self) -> Result<InitializeSourcesResponse, SourceServiceError>;
}

#[async_trait]
impl SourceServiceApi for SourceService {
    async fn list_sources(&self) -> Result<SourceListResponse, SourceServiceError> {
        let sources = self.find_all().await?;
        Ok(SourceListResponse {
            total: sources.len(),
            sources,
        })
    }

    async fn list_statuses(&self) -> Result<SourceStatusListResponse, SourceServiceError> {
        let status_list: Vec<SourceStatus> = self
            .find_all()
            .await?
            .into_iter()
            .map(SourceStatus::from)
            .collect();
        Ok(SourceStatusListResponse {
            total: status_list.len(),
            status_list,
        })
    }

    async fn set_enabled(
        &self,
        source_id: Uuid,
        enabled: Option<bool>,
    ) -> Result<SourceEnabledResponse, SourceServiceError> {
        self.find_source(source_id).await?;

        let enabled = enabled
            .ok_or_else(|| SourceServiceError::Invalid("enabled is required".to_string()))?;

        let source = self
            .source_repo
            .update_enabled(source_id, enabled)
            .await?
            .ok_or(SourceServiceError::NotFound)?;

        tracing::info!(source_id = %source.id, name = %source.name, enabled, "Source status changed");

        Ok(SourceEnabledResponse {
            source_id: source.id,
            name: source.name,
            enabled: source.enabled,
        })
    }

    async fn set_interval(
        &self,
        source_id: Uuid,
        crawl_interval: Option<Value>,
    ) -> Result<SourceIntervalResponse, SourceServiceError> {
        self.find_source(source_id).await?;

        let minutes = parse_interval(crawl_interval.as_ref())?;

        let source = self
            .source_repo
            .update_interval(source_id, minutes)
            .await?
            .ok_or(SourceServiceError::NotFound)?;

        Ok(SourceIntervalResponse {
            source_id: source.id,
            name: source.name,
            crawl_interval: source.crawl_interval,
        })
    }

    async fn initialize(&self) -> Result<InitializeSourcesResponse, SourceServiceError> {
        let mut created = 0;
        for definition in &self.defaults {
            let inserted = self
                .source_repo
                .insert_if_missing(definition)
                .await?;
            if inserted {
                tracing::info!(source_key = %definition.source_key, name = %definition.name, "Registered news source");
                created += 1;
            }
        }

        let initialized_count = self
            .source_repo
            .count()
            .await?;

        Ok(InitializeSourcesResponse {
            initialized_count: initialized_count as usize,
            created,
        })
    }
}

impl SourceService {
    async fn find_all(&self) -> Result<Vec<NewsSource>, SourceServiceError> {
        Ok(self.source_repo.find_all().await?)
    }

    async fn find_source(&self, source_id: Uuid) -> Result<NewsSource, SourceServiceError> {
        self.source_repo
            .find_by_id(source_id)
            .await?
            .ok_or(SourceServiceError::NotFound)
    }
}

/// Crawl intervals must be positive whole minutes
fn parse_interval(value: Option<&Value>) -> Result<i32, SourceServiceError> {
    value
        .and_then(Value::as_i64)
        .filter(|minutes| *minutes > 0)
        .and_then(|minutes| i32::try_from(minutes).ok())
        .ok_or_else(|| {
            SourceServiceError::Invalid("crawl_interval must be a positive integer".to_string())
        })
}
