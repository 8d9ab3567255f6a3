use std::sync::Arc;

use crate::analysis::AnalysisEngine;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only analyzers over the compiled lexicon. The tagger behind it is
    /// chosen at startup.
    pub engine: Arc<AnalysisEngine>,
}
