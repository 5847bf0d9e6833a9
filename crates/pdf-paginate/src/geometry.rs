//! Page geometry resolution
//!
//! Turns a named paper size, an orientation and a uniform margin into the
//! physical page size and the content area left inside the margins. All
//! values are in points.

use crate::constants::mm_to_pt;
use crate::types::*;

/// Physical page size and the usable content area inside its margins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub physical_width: f32,
    pub physical_height: f32,
    /// Uniform margin applied on all four sides
    pub margin: f32,
    pub content_width: f32,
    pub content_height: f32,
}

impl PageGeometry {
    /// Resolve geometry for a known paper size.
    ///
    /// Fails when the margin is negative or leaves no content area.
    pub fn new(paper: PaperSize, orientation: Orientation, margin: f32) -> Result<Self> {
        let (width_mm, height_mm) = paper.dimensions_with_orientation(orientation);
        Self::from_dimensions(mm_to_pt(width_mm), mm_to_pt(height_mm), margin)
    }

    /// Resolve geometry for an explicit page size in points.
    pub fn from_dimensions(physical_width: f32, physical_height: f32, margin: f32) -> Result<Self> {
        if !(physical_width > 0.0 && physical_height > 0.0) {
            return Err(PaginateError::Config(format!(
                "Page size must be positive, got {}x{}",
                physical_width, physical_height
            )));
        }
        if !margin.is_finite() || margin < 0.0 {
            return Err(PaginateError::Config(format!(
                "Margin must be a non-negative number, got {}",
                margin
            )));
        }

        let content_width = physical_width - 2.0 * margin;
        let content_height = physical_height - 2.0 * margin;
        if content_width <= 0.0 || content_height <= 0.0 {
            return Err(PaginateError::Config(format!(
                "Margin of {:.1}pt leaves no content area on a {:.1}x{:.1}pt page",
                margin, physical_width, physical_height
            )));
        }

        Ok(Self {
            physical_width,
            physical_height,
            margin,
            content_width,
            content_height,
        })
    }

    /// Content height remaining after reserving a band at the top of the
    /// content area (used for the title heading).
    pub fn reserve_top(&self, band: f32) -> Result<f32> {
        let remaining = self.content_height - band;
        if remaining <= 0.0 {
            return Err(PaginateError::Config(format!(
                "Heading band of {:.1}pt does not fit in a content height of {:.1}pt",
                band, self.content_height
            )));
        }
        Ok(remaining)
    }

    /// Y coordinate (PDF space, origin bottom-left) of the top of the content area
    pub fn content_top(&self) -> f32 {
        self.physical_height - self.margin
    }
}

/// Resolve page geometry from a format name such as `"A4"` or `"letter"`.
///
/// `margin` is in points, the same unit as the resolved page size.
pub fn resolve(format_name: &str, orientation: Orientation, margin: f32) -> Result<PageGeometry> {
    let paper: PaperSize = format_name.parse()?;
    PageGeometry::new(paper, orientation, margin)
}
