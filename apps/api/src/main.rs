mod catalog;
mod config;
mod corpus;
mod errors;
mod exercise;
mod models;
mod nutrient;
mod routes;
mod state;
mod text;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::HttpFoodCatalog;
use crate::config::Config;
use crate::corpus::load_corpus;
use crate::exercise::engine::ExerciseEngine;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting recommend-service v{}", env!("CARGO_PKG_VERSION"));

    // Build the exercise engine once: corpus load → TF-IDF fit → similarity
    // matrix. Fatal here on schema violations or a degenerate corpus; the
    // state is immutable for the rest of the process lifetime.
    let rows = load_corpus(Path::new(&config.corpus_path))?;
    let engine = Arc::new(ExerciseEngine::build(rows)?);
    info!("Exercise engine ready ({} exercises)", engine.exercises().len());

    // Food catalog client (fetched fresh per nutrient request)
    let food_catalog = Arc::new(HttpFoodCatalog::new(config.food_api_url.clone()));
    info!("Food catalog client initialized ({})", config.food_api_url);

    let state = AppState {
        engine,
        catalog: food_catalog,
        config: config.clone(),
    };

    // The original service ran with open CORS; kept permissive here too.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
