//! Core state management for the buildings dashboard
//!
//! This crate provides the shared application state: the thematic-mode
//! store, the source/layer registry the rendering collaborator observes,
//! and the event bus that carries mode changes to anyone caching on them.

pub mod descriptor;
pub mod events;
pub mod mode;
pub mod registry;
pub mod state;

// Re-export commonly used types
pub use descriptor::{LayerBinding, SourceDescriptor, SourceKind};
pub use events::EventBus;
pub use mode::{ParseThematicModeError, ThematicMode};
pub use registry::{MapRegistry, RegistryError};
pub use state::{AppStore, MapViewState};
