//! Axum route handlers for the Analysis API.

use anyhow::Context;
use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::{AnalysisEngine, AnalysisReport};
use crate::errors::AppError;
use crate::extraction::ResumeFacts;
use crate::improvement::ImprovementReport;
use crate::requirements::JobRequirements;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    pub resume_text: String,
    #[serde(default)]
    pub job_description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResumeRequest {
    pub resume_text: String,
}

#[derive(Debug, Deserialize)]
pub struct JobDescriptionRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub report: AnalysisReport,
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Rejects blank text (400) and text too short to analyze (422).
fn validate_resume(text: &str, min_chars: usize) -> Result<(), AppError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }
    let len = trimmed.chars().count();
    if len < min_chars {
        return Err(AppError::UnprocessableEntity(format!(
            "resume_text has {len} characters, at least {min_chars} are needed for analysis"
        )));
    }
    Ok(())
}

/// Runs CPU-bound analysis off the async executor.
async fn run_blocking<T, F>(state: &AppState, job: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&AnalysisEngine) -> T + Send + 'static,
{
    let engine = state.engine.clone();
    let out = tokio::task::spawn_blocking(move || job(engine.as_ref()))
        .await
        .context("analysis task failed")?;
    Ok(out)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis
///
/// Scores the résumé against the job description (generic score when absent)
/// and attaches the job-independent improvement report.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    validate_resume(&request.resume_text, state.config.min_resume_chars)?;

    let resume_text = request.resume_text;
    let job_text = request.job_description.unwrap_or_default();
    let report = run_blocking(&state, move |engine| engine.analyze(&resume_text, &job_text)).await?;

    Ok(Json(AnalysisResponse {
        analysis_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        report,
    }))
}

/// POST /api/v1/analysis/improvement
pub async fn handle_improvement(
    State(state): State<AppState>,
    Json(request): Json<ResumeRequest>,
) -> Result<Json<ImprovementReport>, AppError> {
    validate_resume(&request.resume_text, state.config.min_resume_chars)?;

    let text = request.resume_text;
    let report = run_blocking(&state, move |engine| engine.improve(&text)).await?;
    Ok(Json(report))
}

/// POST /api/v1/resume/facts
pub async fn handle_resume_facts(
    State(state): State<AppState>,
    Json(request): Json<ResumeRequest>,
) -> Result<Json<ResumeFacts>, AppError> {
    validate_resume(&request.resume_text, state.config.min_resume_chars)?;

    let text = request.resume_text;
    let facts = run_blocking(&state, move |engine| engine.extract(&text)).await?;
    Ok(Json(facts))
}

/// POST /api/v1/job-description/requirements
pub async fn handle_job_requirements(
    State(state): State<AppState>,
    Json(request): Json<JobDescriptionRequest>,
) -> Result<Json<JobRequirements>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let text = request.job_description;
    let requirements = run_blocking(&state, move |engine| engine.mine(&text)).await?;
    Ok(Json(requirements))
}
