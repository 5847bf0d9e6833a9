//! Layout data types for pagination
//!
//! These types represent the plan handed from the planner to the document
//! assembler.

/// A rectangle in source pixel space.
///
/// The vertical span is half-open: `[y0, y1)`. Stored as `f64` so spans
/// stay exact for every `u32` pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SourceRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl SourceRect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Rectangle covering a whole image
    pub fn full(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }
}

/// One instruction for the document assembler
#[derive(Debug, Clone, PartialEq)]
pub enum PageElement {
    /// Place a (possibly cropped) region of the source image at the top of
    /// the current page, sized in points
    ImagePlacement {
        source_rect: SourceRect,
        rendered_width: f32,
        rendered_height: f32,
    },
    /// Finish the current page and start a new one
    PageBreak,
}

/// Ordered page instructions for one document
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationPlan {
    /// Uniform scale applied to every placement
    pub scale: f64,
    pub elements: Vec<PageElement>,
}

impl PaginationPlan {
    /// Number of pages the plan produces
    pub fn page_count(&self) -> usize {
        let breaks = self
            .elements
            .iter()
            .filter(|element| matches!(element, PageElement::PageBreak))
            .count();
        breaks + 1
    }

    /// Number of image placements
    pub fn slice_count(&self) -> usize {
        self.placements().count()
    }

    /// Iterate over `(source_rect, rendered_width, rendered_height)` of every placement
    pub fn placements(&self) -> impl Iterator<Item = (&SourceRect, f32, f32)> {
        self.elements.iter().filter_map(|element| match element {
            PageElement::ImagePlacement {
                source_rect,
                rendered_width,
                rendered_height,
            } => Some((source_rect, *rendered_width, *rendered_height)),
            PageElement::PageBreak => None,
        })
    }
}
