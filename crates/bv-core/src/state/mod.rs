use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::events::{events, EventBus};
use crate::mode::{ParseThematicModeError, ThematicMode};

/// Camera state shared with the rendering collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
    pub drag_rotate: bool,
}

impl Default for MapViewState {
    fn default() -> Self {
        // Initial camera over the buildings tileset coverage
        Self {
            latitude: 37.88,
            longitude: -4.785,
            zoom: 12.0,
            pitch: 0.0,
            bearing: 0.0,
            drag_rotate: false,
        }
    }
}

/// Process-wide store for the selected thematic mode and the camera.
///
/// Lifetime equals the application's. Writes go through the actions below;
/// reads observe the latest committed value. Single-threaded callers need no
/// further coordination, and threaded renderers still get consistent
/// snapshots because each field sits behind its own lock.
pub struct AppStore {
    current_mode: RwLock<ThematicMode>,
    view_state: RwLock<MapViewState>,
    event_bus: Arc<EventBus>,
}

impl AppStore {
    /// Create a store with the default mode and camera
    pub fn new(event_bus: Arc<EventBus>) -> Self {
        Self::with_view_state(event_bus, MapViewState::default())
    }

    /// Create a store with a configured initial camera
    pub fn with_view_state(event_bus: Arc<EventBus>, view_state: MapViewState) -> Self {
        Self {
            current_mode: RwLock::new(ThematicMode::default()),
            view_state: RwLock::new(view_state),
            event_bus,
        }
    }

    /// Currently selected thematic mode
    pub fn mode(&self) -> ThematicMode {
        *self.current_mode.read()
    }

    /// Select a thematic mode.
    ///
    /// Publishes `ModeChanged` so cached per-feature colors get invalidated.
    /// Selecting the already-active mode is a no-op and publishes nothing.
    pub fn set_mode(&self, mode: ThematicMode) {
        let previous = {
            let mut current = self.current_mode.write();
            if *current == mode {
                return;
            }
            std::mem::replace(&mut *current, mode)
        };

        debug!(from = %previous, to = %mode, "thematic mode changed");
        self.event_bus.publish(events::ModeChanged {
            previous,
            current: mode,
        });
    }

    /// Select a thematic mode from its wire token.
    ///
    /// Values outside the mode set are rejected and the prior mode is kept.
    pub fn set_mode_str(&self, value: &str) -> Result<(), ParseThematicModeError> {
        match value.parse::<ThematicMode>() {
            Ok(mode) => {
                self.set_mode(mode);
                Ok(())
            }
            Err(err) => {
                warn!(value, "rejected thematic mode selection");
                Err(err)
            }
        }
    }

    /// Latest committed camera state
    pub fn view_state(&self) -> MapViewState {
        self.view_state.read().clone()
    }

    /// Commit a camera update reported by the renderer
    pub fn set_view_state(&self, view_state: MapViewState) {
        {
            let mut current = self.view_state.write();
            if *current == view_state {
                return;
            }
            *current = view_state.clone();
        }

        self.event_bus.publish(events::ViewStateChanged { view_state });
    }

    /// The bus this store publishes on
    pub fn event_bus(&self) -> &Arc<EventBus> {
        &self.event_bus
    }
}
