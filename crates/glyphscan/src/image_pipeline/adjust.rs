//! Per-pixel brightness extraction.
//!
//! Every formula is defined over channels normalized to `[0.0, 1.0]` and
//! scaled back to `[0, 255]`, truncating toward zero. Channels arrive as 8-bit
//! values, so each formula is evaluated in integer arithmetic on the raw
//! channels, which yields the same truncated result without float drift.

use image::Rgba;

use crate::ascii::grid::Grid;

use super::loader::PixelSource;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BrightnessFormula {
    /// `255 * (r + g + b) / 3`
    #[default]
    Average,
    /// `255 * (max(r, g, b) + min(r, g, b)) / 2`
    MinMax,
    /// `255 * (0.21 r + 0.72 g + 0.07 b)`
    Luminosity,
}

impl BrightnessFormula {
    pub fn apply(self, [r, g, b]: [u8; 3]) -> u8 {
        let (r, g, b) = (u32::from(r), u32::from(g), u32::from(b));
        let value = match self {
            BrightnessFormula::Average => (r + g + b) / 3,
            BrightnessFormula::MinMax => (r.max(g).max(b) + r.min(g).min(b)) / 2,
            BrightnessFormula::Luminosity => (21 * r + 72 * g + 7 * b) / 100,
        };
        value.min(255) as u8
    }
}

/// Reflect a brightness around the middle of the range.
pub fn invert(brightness: u8) -> u8 {
    let reflected = 128 + (128 - i32::from(brightness)) - 1;
    reflected.clamp(0, 255) as u8
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrightnessMapper {
    pub formula: BrightnessFormula,
    pub invert: bool,
}

impl BrightnessMapper {
    pub fn new(formula: BrightnessFormula, invert: bool) -> Self {
        Self { formula, invert }
    }

    pub fn brightness(&self, pixel: Rgba<u8>) -> u8 {
        let [r, g, b, _] = pixel.0;
        let value = self.formula.apply([r, g, b]);
        if self.invert {
            invert(value)
        } else {
            value
        }
    }
}

/// Brightness of every pixel, indexed `(row, col)`.
pub fn extract_brightness<S>(source: &S, mapper: BrightnessMapper) -> Grid<u8>
where
    S: PixelSource + ?Sized,
{
    let (width, height) = source.dimensions();
    Grid::from_fn(width as usize, height as usize, |row, col| {
        mapper.brightness(source.pixel(row as u32, col as u32))
    })
}
