//! View layer for the buildings dashboard
//!
//! The buildings view owns the layer lifecycle for its tileset and presents
//! the thematic-mode selector; the renderer trait is the seam to the
//! external map backend.

mod buildings;
mod context;
mod legend;
mod renderer;

pub use buildings::{BuildingsView, BUILDINGS_LAYER_ID};
pub use context::ViewerContext;
pub use legend::{legend_for_mode, LegendEntry};
pub use renderer::{MapRenderer, RecordingRenderer};
