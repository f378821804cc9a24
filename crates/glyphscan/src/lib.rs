mod ascii;
mod image_pipeline;

use std::io::{self, Write};
use std::path::Path;

use image::DynamicImage;
use log::trace;

pub use ascii::{
    gradient::{Gradient, DEFAULT_GRADIENT},
    grid::{GlyphGrid, Grid},
    mapping::GlyphMapper,
};
pub use image_pipeline::{
    adjust::{extract_brightness, invert, BrightnessFormula, BrightnessMapper},
    loader::{ImageSource, PixelSource},
    resize::{ScalePolicy, TargetGeometry, DEFAULT_SCALE_PERCENT},
};

/// Glyph repetitions per pixel when none is configured.
pub const DEFAULT_REPEAT: usize = 3;

#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    #[error("failed to load image: {0}")]
    Image(#[from] image::ImageError),
    #[error("scale must be within 1..=100 percent, got {0}")]
    InvalidScale(u32),
    #[error("image has no pixels")]
    EmptyImage,
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

#[derive(Clone, Debug)]
pub struct AsciiOptions {
    pub gradient: Gradient,
    pub formula: BrightnessFormula,
    pub invert: bool,
    /// Times each glyph is written to offset cells being taller than wide.
    pub repeat: usize,
    pub scale: ScalePolicy,
}

impl Default for AsciiOptions {
    fn default() -> Self {
        Self {
            gradient: Gradient::default(),
            formula: BrightnessFormula::default(),
            invert: false,
            repeat: DEFAULT_REPEAT,
            scale: ScalePolicy::default(),
        }
    }
}

impl AsciiOptions {
    fn brightness_mapper(&self) -> BrightnessMapper {
        BrightnessMapper::new(self.formula, self.invert)
    }
}

/// Result of one conversion. All grids share the source dimensions.
#[derive(Clone, Debug)]
pub struct RenderOutput {
    pub pixels: Grid<image::Rgba<u8>>,
    pub brightness: Grid<u8>,
    pub glyphs: GlyphGrid,
    pub repeat: usize,
}

impl RenderOutput {
    pub fn width(&self) -> usize {
        self.glyphs.width
    }

    pub fn height(&self) -> usize {
        self.glyphs.height
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.glyphs.lines(self.repeat)
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), AsciiError> {
        self.glyphs.write_to(out, self.repeat)?;
        Ok(())
    }
}

#[derive(Default)]
pub struct AsciiRenderer;

impl AsciiRenderer {
    pub fn render_path<P: AsRef<Path>>(
        &self,
        path: P,
        options: &AsciiOptions,
    ) -> Result<RenderOutput, AsciiError> {
        let source = ImageSource::open(path)?;
        self.render_source(source, options)
    }

    pub fn render_image(
        &self,
        image: DynamicImage,
        options: &AsciiOptions,
    ) -> Result<RenderOutput, AsciiError> {
        self.render_source(ImageSource::new(image), options)
    }

    fn render_source(
        &self,
        mut source: ImageSource,
        options: &AsciiOptions,
    ) -> Result<RenderOutput, AsciiError> {
        source.scale(options.scale)?;
        Ok(self.render_pixels(&source, options))
    }

    /// Convert any pixel source as-is, without rescaling.
    pub fn render_pixels<S>(&self, source: &S, options: &AsciiOptions) -> RenderOutput
    where
        S: PixelSource + ?Sized,
    {
        let (width, height) = source.dimensions();
        let pixels = Grid::from_fn(width as usize, height as usize, |row, col| {
            source.pixel(row as u32, col as u32)
        });
        let brightness = extract_brightness(source, options.brightness_mapper());
        let glyphs = GlyphMapper::new(options.gradient.clone()).map_brightness(&brightness);
        trace!("rendered {}x{} glyph grid", glyphs.width, glyphs.height);

        RenderOutput { pixels, brightness, glyphs, repeat: options.repeat.max(1) }
    }
}
