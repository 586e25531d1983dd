//! Application state for Axum handlers.

use async_trait::async_trait;
use menuboard_service::MenuService;
use std::sync::Arc;

/// Backend readiness signal for the `/ready` endpoint.
///
/// The server wires this to the database pool; tests substitute a stub.
#[async_trait]
pub trait ReadinessProbe: Send + Sync {
    async fn is_ready(&self) -> bool;
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub menu_service: Arc<dyn MenuService>,
    pub readiness: Arc<dyn ReadinessProbe>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(menu_service: Arc<dyn MenuService>, readiness: Arc<dyn ReadinessProbe>) -> Self {
        Self {
            menu_service,
            readiness,
        }
    }
}
