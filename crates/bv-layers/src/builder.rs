//! Builds layer descriptors from registry state

use std::sync::Arc;

use bv_core::{LayerBinding, MapRegistry, ThematicMode};
use bv_data::format::html_for_feature;
use serde_json::json;
use tracing::debug;

use crate::classify::classify;
use crate::descriptor::{HoverPayload, LayerDescriptor, PickInfo, UpdateTriggers};
use crate::elevation::elevation;

/// Build the descriptor for one layer binding under the given mode.
///
/// Returns `None` when the binding's source is not registered: no source,
/// no layer. The fill-color callback closes over `mode`, and the mode token
/// goes into the update triggers so renderer-side color caches are keyed on
/// it.
pub fn build_layer(
    registry: &MapRegistry,
    binding: &LayerBinding,
    mode: ThematicMode,
) -> Option<LayerDescriptor> {
    let source = match registry.resolve_source(&binding.source) {
        Some(source) => source,
        None => {
            debug!(layer = %binding.id, source = %binding.source, "source not registered, no layer built");
            return None;
        }
    };

    Some(LayerDescriptor {
        id: binding.id.clone(),
        source: source.id,
        extruded: true,
        pickable: true,
        get_fill_color: Arc::new(move |feature| classify(feature, mode)),
        get_elevation: Arc::new(elevation),
        on_hover: Arc::new(|info: &PickInfo| {
            info.feature.as_ref().map(|feature| HoverPayload {
                html: html_for_feature(feature),
                style: json!({}),
            })
        }),
        update_triggers: UpdateTriggers {
            fill_color: vec![mode.as_str().to_string()],
        },
    })
}

/// Build descriptors for every registered binding whose source resolves,
/// in registration order.
pub fn build_layers(registry: &MapRegistry, mode: ThematicMode) -> Vec<LayerDescriptor> {
    registry
        .layers()
        .iter()
        .filter_map(|binding| build_layer(registry, binding, mode))
        .collect()
}
