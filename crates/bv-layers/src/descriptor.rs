//! Declarative layer descriptors consumed by the rendering collaborator

use std::fmt;
use std::sync::Arc;

use bv_data::feature::Feature;
use serde_json::Value;

use crate::color::ColorRgb;

/// Per-feature fill color callback
pub type FillColorFn = Arc<dyn Fn(&Feature) -> ColorRgb + Send + Sync>;

/// Per-feature extrusion callback
pub type ElevationFn = Arc<dyn Fn(&Feature) -> f64 + Send + Sync>;

/// Hover callback: turns pick info into a presentation payload
pub type HoverFn = Arc<dyn Fn(&PickInfo) -> Option<HoverPayload> + Send + Sync>;

/// Interaction info handed back by the renderer when it picks a feature
#[derive(Debug, Clone, Default)]
pub struct PickInfo {
    /// The picked feature, if the cursor hit one
    pub feature: Option<Feature>,
    /// Cursor position in screen coordinates
    pub x: f32,
    pub y: f32,
}

/// Presentation-ready hover payload.
///
/// Replaces the raw feature in the tooltip path; the feature itself is
/// never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverPayload {
    pub html: String,
    pub style: Value,
}

/// Cache keys the renderer must fold into any memoized style callback.
///
/// A token change means previously computed results for that callback are
/// invalid even though the features themselves did not change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTriggers {
    /// Tokens invalidating cached fill colors (the active mode token)
    pub fill_color: Vec<String>,
}

/// A renderable layer: source binding, style callbacks and interactivity
/// flags.
///
/// Built per render pass and owned by the caller for the duration of the
/// frame; the renderer invokes the callbacks during its own render/pick
/// cycle.
#[derive(Clone)]
pub struct LayerDescriptor {
    pub id: String,
    /// Id of the registered source this layer reads from
    pub source: String,
    pub extruded: bool,
    pub pickable: bool,
    pub get_fill_color: FillColorFn,
    pub get_elevation: ElevationFn,
    pub on_hover: HoverFn,
    pub update_triggers: UpdateTriggers,
}

impl fmt::Debug for LayerDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerDescriptor")
            .field("id", &self.id)
            .field("source", &self.source)
            .field("extruded", &self.extruded)
            .field("pickable", &self.pickable)
            .field("update_triggers", &self.update_triggers)
            .finish_non_exhaustive()
    }
}
