use std::sync::Arc;

use crate::llm_client::Analyzer;

/// Shared application state injected into all route handlers via Axum
/// extractors. Read-only after startup: one analyzer backend, nothing else.
#[derive(Clone)]
pub struct AppState {
    /// The model-call seam. Production: `GeminiClient`. Tests: a stub.
    pub analyzer: Arc<dyn Analyzer>,
}
