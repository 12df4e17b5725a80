use std::sync::Arc;

use crate::config::Config;
use crate::storage::ArtifactStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Artifact store gateway. Constructed once at startup around the shared
    /// S3 client; swap for `MemoryStore` in tests.
    pub store: Arc<dyn ArtifactStore>,
    pub config: Config,
}
