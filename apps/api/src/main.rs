mod analysis;
mod config;
mod errors;
mod extraction;
mod improvement;
mod lexicon;
mod nlp;
mod requirements;
mod routes;
mod scoring;
mod state;
mod text;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::analysis::AnalysisEngine;
use crate::config::Config;
use crate::lexicon::{CompiledLexicon, Lexicon};
use crate::nlp::{LinguisticTagger, NullTagger};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting atscore API v{}", env!("CARGO_PKG_VERSION"));

    // Load lexicon tables (built-in Spanish defaults unless LEXICON_PATH is set)
    let tables = match &config.lexicon_path {
        Some(path) => {
            let tables = Lexicon::from_json_file(path)?;
            info!("Lexicon loaded from {}", path.display());
            tables
        }
        None => Lexicon::default(),
    };
    let lexicon = Arc::new(CompiledLexicon::new(tables).context("failed to compile lexicon")?);
    info!(
        "Lexicon compiled: {} technical skills, {} experience patterns",
        lexicon.tables.technical_skills.len(),
        lexicon.patterns.experience_years.len()
    );

    // No linguistic backend ships with the service; keyword mining uses the regex path
    let tagger: Arc<dyn LinguisticTagger> = Arc::new(NullTagger);
    info!("Linguistic tagger: {}", tagger.name());

    // Build app state
    let state = AppState {
        config: config.clone(),
        engine: Arc::new(AnalysisEngine::new(lexicon, tagger)),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict allowed origins once a frontend origin is configured

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
