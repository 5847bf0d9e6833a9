//! Source image handling
//!
//! Holds the decoded diagram bitmap and cuts planned slices out of it. The
//! bitmap is never modified.

use crate::layout::SourceRect;
use crate::types::*;
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::io::Cursor;

/// A decoded raster diagram
#[derive(Debug, Clone)]
pub struct SourceImage {
    image: DynamicImage,
}

impl SourceImage {
    /// Wrap an already decoded image.
    pub fn new(image: DynamicImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(PaginateError::InvalidInput(format!(
                "Image has no area ({}x{} pixels)",
                width, height
            )));
        }
        Ok(Self { image })
    }

    /// Decode an encoded image (PNG from the renderer).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes)?;
        Self::new(image)
    }

    pub fn pixel_width(&self) -> u32 {
        self.image.width()
    }

    pub fn pixel_height(&self) -> u32 {
        self.image.height()
    }

    /// Crop a planned slice at full pixel resolution.
    ///
    /// The float span is widened to whole pixels (`floor` start, `ceil` end)
    /// and clamped to the bitmap.
    pub fn crop(&self, rect: &SourceRect) -> Result<DynamicImage> {
        let (x, width) = pixel_span(rect.x0, rect.x1, self.pixel_width());
        let (y, height) = pixel_span(rect.y0, rect.y1, self.pixel_height());
        if width == 0 || height == 0 {
            return Err(PaginateError::InvalidInput(format!(
                "Slice {:?} is empty in a {}x{} image",
                rect,
                self.pixel_width(),
                self.pixel_height()
            )));
        }
        Ok(self.image.crop_imm(x, y, width, height))
    }

    /// Crop a slice and encode it as PNG
    pub fn crop_png(&self, rect: &SourceRect) -> Result<Vec<u8>> {
        let slice = self.crop(rect)?;
        encode_png(&slice)
    }
}

fn pixel_span(start: f64, end: f64, limit: u32) -> (u32, u32) {
    let first = (start.floor().max(0.0) as u32).min(limit);
    let last = (end.ceil().max(0.0) as u32).min(limit);
    (first, last.saturating_sub(first))
}

fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
