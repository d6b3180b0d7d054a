use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::controllers::{
    analysis::AnalysisController, health, news::NewsController, source::SourceController,
};
use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;
use crate::infrastructure::middleware::request_id_middleware;

/// Controllers wired into the router
pub struct Controllers {
    pub news: Arc<NewsController>,
    pub source: Arc<SourceController>,
    pub analysis: Arc<AnalysisController>,
}

/// Build the application router with every route and layer
pub fn build_router(pool: Arc<DbPool>, controllers: Controllers) -> Router {
    let news_routes = Router::new()
        .route(
            "/api/news",
            get(NewsController::list_news).post(NewsController::ingest),
        )
        .route("/api/news/:newsId", get(NewsController::get_news))
        .route("/api/news/:newsId/interact", post(NewsController::interact))
        .with_state(controllers.news);

    let source_routes = Router::new()
        .route("/api/sources", get(SourceController::list_sources))
        .route("/api/sources/status", get(SourceController::list_statuses))
        .route("/api/sources/init", post(SourceController::initialize))
        .route(
            "/api/sources/:sourceId/status",
            put(SourceController::update_status),
        )
        .route(
            "/api/sources/:sourceId/interval",
            put(SourceController::update_interval),
        )
        .with_state(controllers.source);

    let analysis_routes = Router::new()
        .route("/api/analysis/hotness", get(AnalysisController::hotness))
        .route("/api/analysis/hot-rank", get(AnalysisController::hot_rank))
        .route("/api/analysis/trend", get(AnalysisController::trend))
        .route("/api/analysis/category", get(AnalysisController::category))
        .route("/api/analysis/sentiment", get(AnalysisController::sentiment))
        .route("/api/analysis/history", get(AnalysisController::history))
        .with_state(controllers.analysis);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(pool)
        .merge(news_routes)
        .merge(source_routes)
        .merge(analysis_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(middleware::from_fn(request_id_middleware)),
        )
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    pool: Arc<DbPool>,
    config: Arc<Config>,
    controllers: Controllers,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(pool, controllers);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
