//! Scoped activation of a (source, layer) pair

use std::sync::Arc;

use bv_core::{LayerBinding, MapRegistry, SourceDescriptor};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LifecycleState {
    Inactive,
    Active,
}

/// Registers a source and its layer on activation and guarantees the
/// symmetric removal, including when the owning view is torn down abruptly.
///
/// Two states per view instance: inactive and active. Activation registers
/// the source before the layer (the layer references the source by id);
/// deactivation removes them in reverse order. Double activation and
/// deactivation while inactive are no-ops; teardown ordering from the host
/// UI is not fully controllable. Dropping an active handle deactivates it.
pub struct LayerLifecycle {
    registry: Arc<MapRegistry>,
    source: SourceDescriptor,
    layer: LayerBinding,
    state: LifecycleState,
}

impl LayerLifecycle {
    /// Prepare a lifecycle for one source/layer pair. Nothing is registered
    /// until [`activate`](Self::activate) runs.
    pub fn new(
        registry: Arc<MapRegistry>,
        source: SourceDescriptor,
        layer_id: impl Into<String>,
    ) -> Self {
        let layer = LayerBinding::new(layer_id, source.id.clone());
        Self {
            registry,
            source,
            layer,
            state: LifecycleState::Inactive,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == LifecycleState::Active
    }

    /// Id of the layer this lifecycle manages
    pub fn layer_id(&self) -> &str {
        &self.layer.id
    }

    /// Register the source, then the layer.
    ///
    /// If the layer registration fails the source is rolled back, so the
    /// renderer observes both or neither.
    pub fn activate(&mut self) {
        if self.state == LifecycleState::Active {
            warn!(layer = %self.layer.id, "activate called on an active layer");
            return;
        }

        self.registry.add_source(self.source.clone());
        if let Err(err) = self.registry.add_layer(self.layer.clone()) {
            warn!(%err, "layer activation failed, rolling back source");
            self.registry.remove_source(&self.source.id);
            return;
        }

        debug!(layer = %self.layer.id, source = %self.source.id, "layer activated");
        self.state = LifecycleState::Active;
    }

    /// Remove the layer, then the source.
    ///
    /// Runs at most once per activation; calling it while inactive is a
    /// no-op. Re-activation afterwards is a fresh `activate`.
    pub fn deactivate(&mut self) {
        if self.state == LifecycleState::Inactive {
            debug!(layer = %self.layer.id, "deactivate called on an inactive layer");
            return;
        }

        self.registry.remove_layer(&self.layer.id);
        self.registry.remove_source(&self.source.id);
        debug!(layer = %self.layer.id, source = %self.source.id, "layer deactivated");
        self.state = LifecycleState::Inactive;
    }
}

impl Drop for LayerLifecycle {
    fn drop(&mut self) {
        self.deactivate();
    }
}
