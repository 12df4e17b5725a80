#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::path::PathBuf;
use thiserror::Error;

/// Failure taxonomy for the document-generation pipeline.
///
/// Every external call (storage, compiler invocation, filesystem) is wrapped
/// at its origin and converted into one of these — none of them propagate
/// past the pipeline boundary as an uncaught fault.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The compiler exited cleanly but the expected artifact is not on disk.
    /// A zero exit status alone is never treated as success.
    #[error("compiler exited cleanly but produced no artifact at {path}")]
    MissingArtifact { path: PathBuf },

    /// Non-zero exit, spawn failure, or timeout. Diagnostic streams are
    /// retained in full for inspection.
    #[error("compiler failed: {detail}")]
    Compiler {
        detail: String,
        stdout: String,
        stderr: String,
    },

    /// Credential, missing-key, or network failure at the store boundary.
    #[error("storage error: {0}")]
    Storage(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Render(e) => {
                tracing::error!("Render error: {e}");
                // Opaque beyond success/failure: diagnostics stay in the logs.
                let code = match e {
                    RenderError::Storage(_) => "STORAGE_ERROR",
                    _ => "RENDER_ERROR",
                };
                (
                    StatusCode::BAD_GATEWAY,
                    code,
                    "Resume generation failed".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
