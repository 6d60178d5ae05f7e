use std::sync::Arc;

use crate::generation::gateway::Gateway;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The only path to an AI provider. Immutable after startup.
    pub gateway: Arc<Gateway>,
}
