use std::sync::Arc;

use bv_core::{AppStore, EventBus, MapRegistry};

/// Shared context handed to views during rendering
#[derive(Clone)]
pub struct ViewerContext {
    /// Process-wide mode and camera store
    pub store: Arc<AppStore>,
    /// Registered sources and layer bindings
    pub registry: Arc<MapRegistry>,
}

impl ViewerContext {
    /// Create a context with a fresh store and registry sharing one bus
    pub fn new() -> Self {
        let event_bus = Arc::new(EventBus::new());
        Self {
            store: Arc::new(AppStore::new(event_bus.clone())),
            registry: Arc::new(MapRegistry::new(event_bus)),
        }
    }

    /// Create a context around existing state
    pub fn with_state(store: Arc<AppStore>, registry: Arc<MapRegistry>) -> Self {
        Self { store, registry }
    }
}

impl Default for ViewerContext {
    fn default() -> Self {
        Self::new()
    }
}
