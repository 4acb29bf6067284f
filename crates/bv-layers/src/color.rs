//! Color primitives for thematic styling

/// An RGB color triple in [0, 255]. No alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorRgb(pub [u8; 3]);

impl ColorRgb {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub const fn channels(self) -> [u8; 3] {
        self.0
    }
}

impl From<[u8; 3]> for ColorRgb {
    fn from(channels: [u8; 3]) -> Self {
        Self(channels)
    }
}

impl From<ColorRgb> for [u8; 3] {
    fn from(color: ColorRgb) -> Self {
        color.0
    }
}
