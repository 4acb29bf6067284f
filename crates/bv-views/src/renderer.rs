//! Rendering collaborator contract

use bv_core::state::MapViewState;
use bv_layers::descriptor::LayerDescriptor;

/// External rendering collaborator.
///
/// Consumes the frame's layer descriptors and invokes their style and hover
/// callbacks during its own render/pick cycle. Camera movements flow back
/// through [`take_view_state_change`](Self::take_view_state_change). A
/// descriptor handed over in a previous frame is dead once a frame omits
/// it; halting its use is the renderer's responsibility.
pub trait MapRenderer: Send {
    /// Hand the renderer the full set of layers for this frame
    fn set_layers(&mut self, layers: Vec<LayerDescriptor>);

    /// Camera change reported by the renderer since the last call, if any
    fn take_view_state_change(&mut self) -> Option<MapViewState> {
        None
    }
}

/// Placeholder renderer that records what it is handed.
///
/// Stands in for the map backend in the app shell and in tests; it draws
/// nothing.
#[derive(Default)]
pub struct RecordingRenderer {
    layers: Vec<LayerDescriptor>,
    frames: usize,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layers from the most recent frame
    pub fn layers(&self) -> &[LayerDescriptor] {
        &self.layers
    }

    /// Number of frames handed over so far
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl MapRenderer for RecordingRenderer {
    fn set_layers(&mut self, layers: Vec<LayerDescriptor>) {
        self.layers = layers;
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_the_latest_frame() {
        let mut renderer = RecordingRenderer::new();
        assert_eq!(renderer.frames(), 0);

        renderer.set_layers(Vec::new());
        renderer.set_layers(Vec::new());

        assert_eq!(renderer.frames(), 2);
        assert!(renderer.layers().is_empty());
        assert!(renderer.take_view_state_change().is_none());
    }
}
