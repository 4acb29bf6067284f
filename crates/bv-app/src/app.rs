//! Application shell wiring the store, registry, view and renderer

use std::path::Path;
use std::sync::Arc;

use eframe::egui::{self, Context};
use tracing::info;

use bv_core::{AppStore, EventBus, MapRegistry, SourceDescriptor};
use bv_data::config::DashboardConfig;
use bv_layers::builder::build_layers;
use bv_views::{BuildingsView, MapRenderer, RecordingRenderer, ViewerContext};

/// Path checked for deployment configuration
const CONFIG_PATH: &str = "dashboard.json";

/// Descriptor for the hosted buildings tileset
fn buildings_source() -> SourceDescriptor {
    SourceDescriptor::tileset(
        "buildingsSource",
        "bqconn",
        "cartodb-on-gcp-pm-team.inspire_buildings.buildings_tileset",
    )
}

/// Main application state
pub struct BuildingsDashboardApp {
    /// Context shared with views
    viewer: ViewerContext,

    /// The buildings view (selector + layer lifecycle)
    buildings_view: BuildingsView,

    /// The rendering collaborator. The recording placeholder stands in
    /// until a map backend is attached.
    renderer: Box<dyn MapRenderer>,
}

impl BuildingsDashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = match DashboardConfig::load(Path::new(CONFIG_PATH)) {
            Ok(config) => config,
            Err(err) => {
                info!(%err, "no dashboard configuration, using defaults");
                DashboardConfig::default()
            }
        };

        let event_bus = Arc::new(EventBus::new());
        let store = Arc::new(AppStore::with_view_state(
            event_bus.clone(),
            config.view_state.clone(),
        ));
        let registry = Arc::new(MapRegistry::new(event_bus));
        let viewer = ViewerContext::with_state(store, registry);

        let source = config.buildings_source.unwrap_or_else(buildings_source);
        let buildings_view = BuildingsView::mount(&viewer, source);

        Self {
            viewer,
            buildings_view,
            renderer: Box::new(RecordingRenderer::new()),
        }
    }
}

impl eframe::App for BuildingsDashboardApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Camera updates flow back from the renderer
        if let Some(view_state) = self.renderer.take_view_state_change() {
            self.viewer.store.set_view_state(view_state);
        }

        // Rebuild the frame's layer descriptors and hand them off
        let layers = build_layers(&self.viewer.registry, self.viewer.store.mode());
        self.renderer.set_layers(layers);

        egui::SidePanel::left("buildings_panel")
            .default_width(220.0)
            .show(ctx, |ui| {
                self.buildings_view.ui(&self.viewer, ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let view_state = self.viewer.store.view_state();
            ui.heading("Buildings Dashboard");
            ui.label(format!(
                "Camera: {:.3}, {:.3} @ zoom {:.1}",
                view_state.latitude, view_state.longitude, view_state.zoom
            ));
            ui.separator();

            ui.label("Registered layers:");
            for binding in self.viewer.registry.layers() {
                ui.monospace(format!("{} <- {}", binding.id, binding.source));
            }
            if self.viewer.registry.layers().is_empty() {
                ui.weak("none");
            }
        });
    }
}
