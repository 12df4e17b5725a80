pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::render::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume generation API. CRUD for the underlying records lives in the
        // data service, not here — this service only renders.
        .route(
            "/api/v1/resumes/generate",
            post(handlers::handle_generate),
        )
        .with_state(state)
}
