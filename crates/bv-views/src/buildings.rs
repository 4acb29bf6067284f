//! Buildings view: thematic mode selector and layer lifecycle

use bv_core::{SourceDescriptor, ThematicMode};
use bv_layers::lifecycle::LayerLifecycle;
use egui::Ui;
use uuid::Uuid;

use crate::legend::legend_for_mode;
use crate::ViewerContext;

/// Identifier of the buildings visual layer
pub const BUILDINGS_LAYER_ID: &str = "buildingsLayer";

/// The buildings view.
///
/// Owns the layer lifecycle for its tileset: mounting registers the source
/// and layer against the shared registry, and dropping the view (or calling
/// [`unmount`](Self::unmount)) removes them again. The selector dispatches
/// mode changes to the store.
pub struct BuildingsView {
    id: Uuid,
    title: String,
    lifecycle: LayerLifecycle,
}

impl BuildingsView {
    /// Create the view and activate its layer against the shared registry
    pub fn mount(ctx: &ViewerContext, source: SourceDescriptor) -> Self {
        let mut lifecycle = LayerLifecycle::new(ctx.registry.clone(), source, BUILDINGS_LAYER_ID);
        lifecycle.activate();

        Self {
            id: Uuid::new_v4(),
            title: "Buildings".to_string(),
            lifecycle,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether this view's layer is currently registered
    pub fn is_active(&self) -> bool {
        self.lifecycle.is_active()
    }

    /// Draw the thematic-map selector and the legend for the active mode
    pub fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        ui.label("Thematic Map");

        let mut selected = ctx.store.mode();
        let previous = selected;
        for mode in ThematicMode::ALL {
            ui.radio_value(&mut selected, mode, mode.label());
        }
        if selected != previous {
            ctx.store.set_mode(selected);
        }

        ui.separator();
        for entry in legend_for_mode(ctx.store.mode()) {
            let [r, g, b] = entry.color.channels();
            ui.horizontal(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                ui.painter()
                    .rect_filled(rect, 2.0, egui::Color32::from_rgb(r, g, b));
                ui.label(entry.label);
            });
        }
    }

    /// Release the layer explicitly. Dropping the view has the same effect.
    pub fn unmount(mut self) {
        self.lifecycle.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use bv_layers::builder::build_layers;
    use bv_layers::color::ColorRgb;
    use bv_data::feature::{attrs, Feature};

    use super::*;

    fn buildings_source() -> SourceDescriptor {
        SourceDescriptor::tileset(
            "buildingsSource",
            "bqconn",
            "project.dataset.buildings_tileset",
        )
    }

    #[test]
    fn mounting_registers_the_source_and_layer() {
        let ctx = ViewerContext::new();
        let view = BuildingsView::mount(&ctx, buildings_source());

        assert!(view.is_active());
        assert!(ctx.registry.resolve_source("buildingsSource").is_some());
        assert!(ctx.registry.contains_layer(BUILDINGS_LAYER_ID));
    }

    #[test]
    fn unmounting_restores_the_registry() {
        let ctx = ViewerContext::new();
        let view = BuildingsView::mount(&ctx, buildings_source());

        view.unmount();
        assert!(ctx.registry.is_empty());
    }

    #[test]
    fn dropping_the_view_restores_the_registry() {
        let ctx = ViewerContext::new();
        {
            let _view = BuildingsView::mount(&ctx, buildings_source());
            assert!(!ctx.registry.is_empty());
        }
        assert!(ctx.registry.is_empty());
    }

    #[test]
    fn mode_switch_recolors_without_touching_geometry() {
        let ctx = ViewerContext::new();
        let _view = BuildingsView::mount(&ctx, buildings_source());
        let feature = Feature::new()
            .with_attribute(attrs::CONSTRUCTION_DATE, "1930-06-01")
            .with_attribute(attrs::CURRENT_USE, "3_industrial")
            .with_attribute(attrs::FLOORS_ABOVE_GROUND, 2.0);

        let before = build_layers(&ctx.registry, ctx.store.mode());
        ctx.store.set_mode(ThematicMode::CurrentUse);
        let after = build_layers(&ctx.registry, ctx.store.mode());

        assert_eq!((before[0].get_fill_color)(&feature), ColorRgb::rgb(244, 109, 67));
        assert_eq!((after[0].get_fill_color)(&feature), ColorRgb::rgb(127, 60, 141));
        // Elevation is mode-independent; only colors recompute
        assert_eq!(
            (before[0].get_elevation)(&feature),
            (after[0].get_elevation)(&feature)
        );
        assert_ne!(before[0].update_triggers, after[0].update_triggers);
    }
}
