//! Axum route handlers for the generation API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::resume::ResumeContent;
use crate::render::pipeline::{generate_pdf, RenderOptions};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub pdf_url: String,
}

/// POST /api/v1/resumes/generate
///
/// Accepts the full structured resume payload and returns the published PDF
/// URL. Sparse payloads are valid — missing fields default silently and the
/// corresponding template markers stay in place. Failures come back as the
/// standard error envelope with no diagnostic detail.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(content): Json<ResumeContent>,
) -> Result<Json<GenerateResponse>, AppError> {
    let options = RenderOptions::from_config(&state.config);
    let pdf_url = generate_pdf(state.store.as_ref(), &options, &content).await?;
    Ok(Json(GenerateResponse { pdf_url }))
}
