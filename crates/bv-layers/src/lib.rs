//! Thematic styling and layer lifecycle for the buildings dashboard
//!
//! The classification and elevation rules are pure functions; the builder
//! packages them into a declarative descriptor the rendering collaborator
//! consumes, and the lifecycle guard keeps the registry symmetric across
//! view mount and unmount.

pub mod builder;
pub mod classify;
pub mod color;
pub mod descriptor;
pub mod elevation;
pub mod lifecycle;

// Re-exports
pub use builder::{build_layer, build_layers};
pub use classify::classify;
pub use color::ColorRgb;
pub use descriptor::{HoverPayload, LayerDescriptor, PickInfo, UpdateTriggers};
pub use elevation::{elevation, FLOOR_HEIGHT};
pub use lifecycle::LayerLifecycle;
