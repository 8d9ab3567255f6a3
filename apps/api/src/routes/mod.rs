pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analysis", post(handlers::handle_analyze))
        .route(
            "/api/v1/analysis/improvement",
            post(handlers::handle_improvement),
        )
        .route("/api/v1/resume/facts", post(handlers::handle_resume_facts))
        .route(
            "/api/v1/job-description/requirements",
            post(handlers::handle_job_requirements),
        )
        .with_state(state)
}
