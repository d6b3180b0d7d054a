use hotnews_backend::controllers::{
    analysis::AnalysisController, news::NewsController, source::SourceController,
};
use hotnews_backend::domain::{
    hotness::HotnessService, news::NewsService, source::SourceDefinition, source::SourceService,
};
use hotnews_backend::infrastructure::config::{Config, LogFormat};
use hotnews_backend::infrastructure::db::{check_connection, create_pool, run_migrations};
use hotnews_backend::infrastructure::http::{start_http_server, Controllers};
use hotnews_backend::infrastructure::jobs::HotnessRefreshJob;
use hotnews_backend::infrastructure::repositories::{
    AnalysisRepository, ArticleRepository, SourceRepository,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting HotNews Backend on {}:{}",
        config.host,
        config.port
    );

    // Create database connection pool
    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    // Verify database connection
    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject db pool)
    tracing::info!("Instantiating repositories...");
    let article_repo = Arc::new(ArticleRepository::new(pool.clone()));
    let source_repo = Arc::new(SourceRepository::new(pool.clone()));
    let analysis_repo = Arc::new(AnalysisRepository::new(pool.clone()));

    // 2. Instantiate services (inject repositories)
    tracing::info!("Instantiating services...");
    let source_weights = config.source_weights();
    tracing::info!(
        overrides = config.source_weight_overrides.len(),
        default_weight = source_weights.default_weight(),
        "Source weights loaded"
    );
    let news_service = Arc::new(NewsService::new(article_repo.clone()));
    let source_service = Arc::new(SourceService::new(
        source_repo.clone(),
        SourceDefinition::builtin(),
    ));
    let hotness_service = Arc::new(HotnessService::new(
        article_repo.clone(),
        analysis_repo.clone(),
        source_weights,
        config.analysis_cache_enabled,
        config.analysis_cache_ttl(),
    ));

    // 3. Background hotness refresh
    match config.hotness_refresh_interval() {
        Some(period) => {
            HotnessRefreshJob::new(hotness_service.clone(), period).start();
        }
        None => tracing::info!("Hotness refresh job disabled"),
    }

    // 4. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let controllers = Controllers {
        news: Arc::new(NewsController::new(news_service)),
        source: Arc::new(SourceController::new(source_service)),
        analysis: Arc::new(AnalysisController::new(hotness_service)),
    };

    // Start HTTP server with all routes
    start_http_server(pool, config, controllers).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let default_filter = if config.is_development() {
        "hotnews_backend=debug,tower_http=debug"
    } else {
        "hotnews_backend=info,tower_http=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
