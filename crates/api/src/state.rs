use std::sync::Arc;

use ucn_core::config::ValidationConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Debug, Clone)]
pub struct AppState {
    /// Validation settings consulted by [`crate::extract::ValidatedJson`].
    pub config: Arc<ValidationConfig>,
}

impl AppState {
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
