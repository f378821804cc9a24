use super::{
    gradient::Gradient,
    grid::{GlyphGrid, Grid},
};

pub struct GlyphMapper {
    gradient: Gradient,
}

impl GlyphMapper {
    pub fn new(gradient: Gradient) -> Self {
        Self { gradient }
    }

    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    pub fn glyph(&self, brightness: u8) -> char {
        self.gradient.char_at(self.gradient.index_for(brightness))
    }

    pub fn map_brightness(&self, brightness: &Grid<u8>) -> GlyphGrid {
        brightness.map(|&value| self.glyph(value))
    }
}

impl Default for GlyphMapper {
    fn default() -> Self {
        Self::new(Gradient::default())
    }
}
