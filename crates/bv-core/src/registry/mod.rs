use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::descriptor::{LayerBinding, SourceDescriptor};
use crate::events::{events, EventBus};

/// Errors raised by registry mutations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    SourceNotRegistered { layer: String, source: String },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::SourceNotRegistered { layer, source } => write!(
                f,
                "layer '{layer}' references unregistered source '{source}'"
            ),
        }
    }
}

impl std::error::Error for RegistryError {}

#[derive(Default)]
struct RegistryState {
    sources: IndexMap<String, SourceDescriptor>,
    layers: IndexMap<String, LayerBinding>,
}

/// Shared registry of sources and layer bindings.
///
/// This is the state the rendering collaborator observes. Invariant: a layer
/// binding is never registered while its source is absent. `add_layer`
/// rejects a dangling binding and `remove_source` removes dependent layers
/// first, so the invariant holds under any call order. Removals of absent
/// ids are no-ops.
pub struct MapRegistry {
    state: RwLock<RegistryState>,
    event_bus: Arc<EventBus>,
}

impl MapRegistry {
    /// Create an empty registry
    pub fn new(event_bus: Arc<EventBus>) -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
            event_bus,
        }
    }

    /// Register a source descriptor. Re-adding an id replaces its descriptor.
    pub fn add_source(&self, source: SourceDescriptor) {
        let id = source.id.clone();
        let replaced = {
            let mut state = self.state.write();
            state.sources.insert(id.clone(), source).is_some()
        };

        if replaced {
            debug!(source = %id, "source descriptor replaced");
        }
        self.event_bus.publish(events::SourceAdded { id });
    }

    /// Remove a source and any layers still bound to it.
    ///
    /// Returns whether a source was actually removed.
    pub fn remove_source(&self, id: &str) -> bool {
        let (removed, dependents) = {
            let mut state = self.state.write();

            let dependents: Vec<String> = state
                .layers
                .values()
                .filter(|binding| binding.source == id)
                .map(|binding| binding.id.clone())
                .collect();
            for layer_id in &dependents {
                state.layers.shift_remove(layer_id);
            }

            (state.sources.shift_remove(id).is_some(), dependents)
        };

        for layer_id in dependents {
            warn!(layer = %layer_id, source = %id, "removed layer still bound to removed source");
            self.event_bus.publish(events::LayerRemoved { id: layer_id });
        }

        if removed {
            self.event_bus.publish(events::SourceRemoved { id: id.to_string() });
        } else {
            debug!(source = %id, "remove_source on unregistered id");
        }
        removed
    }

    /// Register a layer binding.
    ///
    /// The referenced source must already be registered; a dangling binding
    /// is rejected so the renderer can never observe a layer without its
    /// source.
    pub fn add_layer(&self, binding: LayerBinding) -> Result<(), RegistryError> {
        let event = {
            let mut state = self.state.write();

            if !state.sources.contains_key(&binding.source) {
                let err = RegistryError::SourceNotRegistered {
                    layer: binding.id.clone(),
                    source: binding.source.clone(),
                };
                warn!(%err, "rejected layer registration");
                return Err(err);
            }

            let event = events::LayerAdded {
                id: binding.id.clone(),
                source: binding.source.clone(),
            };
            state.layers.insert(binding.id.clone(), binding);
            event
        };

        self.event_bus.publish(event);
        Ok(())
    }

    /// Remove a layer binding. Returns whether a layer was actually removed.
    pub fn remove_layer(&self, id: &str) -> bool {
        let removed = {
            let mut state = self.state.write();
            state.layers.shift_remove(id).is_some()
        };

        if removed {
            self.event_bus.publish(events::LayerRemoved { id: id.to_string() });
        } else {
            debug!(layer = %id, "remove_layer on unregistered id");
        }
        removed
    }

    /// Look up a registered source by id
    pub fn resolve_source(&self, id: &str) -> Option<SourceDescriptor> {
        self.state.read().sources.get(id).cloned()
    }

    /// Snapshot of registered sources, in registration order
    pub fn sources(&self) -> Vec<SourceDescriptor> {
        self.state.read().sources.values().cloned().collect()
    }

    /// Snapshot of registered layer bindings, in registration order
    pub fn layers(&self) -> Vec<LayerBinding> {
        self.state.read().layers.values().cloned().collect()
    }

    /// Whether a layer with this id is registered
    pub fn contains_layer(&self, id: &str) -> bool {
        self.state.read().layers.contains_key(id)
    }

    /// True when no sources and no layers are registered
    pub fn is_empty(&self) -> bool {
        let state = self.state.read();
        state.sources.is_empty() && state.layers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> MapRegistry {
        MapRegistry::new(Arc::new(EventBus::new()))
    }

    fn tileset(id: &str) -> SourceDescriptor {
        SourceDescriptor::tileset(id, "bqconn", "project.dataset.tileset")
    }

    #[test]
    fn layer_requires_its_source() {
        let registry = registry();

        let err = registry
            .add_layer(LayerBinding::new("buildingsLayer", "buildingsSource"))
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::SourceNotRegistered {
                layer: "buildingsLayer".to_string(),
                source: "buildingsSource".to_string(),
            }
        );
        assert!(registry.layers().is_empty());

        registry.add_source(tileset("buildingsSource"));
        registry
            .add_layer(LayerBinding::new("buildingsLayer", "buildingsSource"))
            .unwrap();
        assert!(registry.contains_layer("buildingsLayer"));
    }

    #[test]
    fn removals_of_absent_ids_are_noops() {
        let registry = registry();
        assert!(!registry.remove_layer("buildingsLayer"));
        assert!(!registry.remove_source("buildingsSource"));
        assert!(registry.is_empty());
    }

    #[test]
    fn removing_a_source_removes_dependent_layers() {
        let registry = registry();
        registry.add_source(tileset("buildingsSource"));
        registry
            .add_layer(LayerBinding::new("buildingsLayer", "buildingsSource"))
            .unwrap();

        assert!(registry.remove_source("buildingsSource"));
        assert!(registry.is_empty());
    }

    #[test]
    fn snapshots_preserve_registration_order() {
        let registry = registry();
        registry.add_source(tileset("a"));
        registry.add_source(tileset("b"));
        registry.add_layer(LayerBinding::new("layer-b", "b")).unwrap();
        registry.add_layer(LayerBinding::new("layer-a", "a")).unwrap();

        let ids: Vec<String> = registry.layers().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["layer-b".to_string(), "layer-a".to_string()]);
    }

    #[test]
    fn resolve_source_returns_the_registered_descriptor() {
        let registry = registry();
        registry.add_source(tileset("buildingsSource"));

        let source = registry.resolve_source("buildingsSource").unwrap();
        assert_eq!(source.connection, "bqconn");
        assert!(registry.resolve_source("missing").is_none());
    }
}
