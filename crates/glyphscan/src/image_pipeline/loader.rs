use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, Rgba};
use log::debug;

use super::resize::ScalePolicy;
use crate::AsciiError;

/// Read-only grid of RGBA pixels.
///
/// Coordinates are `(row, col)`: `row` counts down from the top edge and `col`
/// counts right from the left edge.
pub trait PixelSource {
    /// `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);
    fn pixel(&self, row: u32, col: u32) -> Rgba<u8>;
}

impl PixelSource for DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        GenericImageView::dimensions(self)
    }

    fn pixel(&self, row: u32, col: u32) -> Rgba<u8> {
        self.get_pixel(col, row)
    }
}

impl PixelSource for image::RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        image::ImageBuffer::dimensions(self)
    }

    fn pixel(&self, row: u32, col: u32) -> Rgba<u8> {
        *self.get_pixel(col, row)
    }
}

/// Decoded image owned for the duration of a render.
pub struct ImageSource {
    image: DynamicImage,
}

impl ImageSource {
    pub fn new(image: DynamicImage) -> Self {
        Self { image }
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, AsciiError> {
        let path = path.as_ref();
        let image = image::open(path)?;
        debug!("loaded {} ({}x{})", path.display(), image.width(), image.height());
        Ok(Self::new(image))
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Rescale in place according to `policy`.
    pub fn scale(&mut self, policy: ScalePolicy) -> Result<(), AsciiError> {
        let geometry = policy.derive(self.width(), self.height())?;
        if geometry.columns == self.width() && geometry.rows == self.height() {
            return Ok(());
        }

        debug!(
            "scaling {}x{} to {}x{}",
            self.width(),
            self.height(),
            geometry.columns,
            geometry.rows
        );
        self.image = self.image.resize_exact(geometry.columns, geometry.rows, FilterType::Triangle);
        Ok(())
    }
}

impl PixelSource for ImageSource {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn pixel(&self, row: u32, col: u32) -> Rgba<u8> {
        PixelSource::pixel(&self.image, row, col)
    }
}
