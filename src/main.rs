//! Constitution assessment server.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use constitution_assessment::adapters::http::{api_router, AssessmentAppState};
use constitution_assessment::adapters::storage::{
    FileAssessmentHistory, InMemoryAssessmentHistory,
};
use constitution_assessment::config::{AppConfig, ConfigError};
use constitution_assessment::domain::assessment::{AssessmentEngine, TracingObserver};
use constitution_assessment::domain::questionnaire::{standard_catalog, CatalogVariant};
use constitution_assessment::ports::AssessmentHistory;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;

    init_tracing(&config);

    // fail fast on a broken embedded catalog
    for variant in [CatalogVariant::Short, CatalogVariant::Full] {
        let catalog = standard_catalog(variant)?;
        info!(%variant, items = catalog.len(), "questionnaire loaded");
    }

    let mut engine = AssessmentEngine::new(config.scoring.answer_policy);
    if config.scoring.trace_scoring {
        engine = engine.with_observer(Arc::new(TracingObserver));
    }

    let history: Arc<dyn AssessmentHistory> = match &config.storage.history_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "using file assessment history");
            Arc::new(FileAssessmentHistory::new(dir))
        }
        None => {
            info!("using in-memory assessment history");
            Arc::new(InMemoryAssessmentHistory::new())
        }
    };

    let state = AssessmentAppState::new(engine, history, config.scoring.default_variant);
    let app = api_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
