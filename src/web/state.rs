use std::sync::Arc;

use crate::registry::ActivityRegistry;

/// Shared application state handed to every request handler.
///
/// The registry is the single source of truth; handlers get a reference to
/// it through this state rather than any ambient global.
#[derive(Debug, Clone)]
pub struct AppState {
    registry: Arc<ActivityRegistry>,
}

impl AppState {
    pub fn new(registry: ActivityRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &ActivityRegistry {
        &self.registry
    }
}
