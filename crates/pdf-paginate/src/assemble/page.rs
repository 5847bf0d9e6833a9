//! Content stream operations for a single output page

use crate::constants::{
    HELVETICA_CHAR_WIDTH_RATIO, OVERFLOW_TOLERANCE_PT, TITLE_FONT_SIZE, XOBJECT_DPI, pt_to_mm,
};
use crate::geometry::PageGeometry;
use printpdf::*;

/// Where an image slice lands on the page, in points (origin bottom-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SlicePlacement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl SlicePlacement {
    /// Left-align a slice against the top of the content area, below `band`.
    pub fn at_top(geometry: &PageGeometry, band: f32, width: f32, height: f32) -> Self {
        Self {
            x: geometry.margin,
            y: geometry.content_top() - band - height,
            width,
            height,
        }
    }
}

/// Whether a slice drawn at `width` x `height` spills out of the content
/// area left below `band`; the page clips anything past the margin.
pub(crate) fn overflows_content(geometry: &PageGeometry, band: f32, width: f32, height: f32) -> bool {
    width > geometry.content_width + OVERFLOW_TOLERANCE_PT
        || height > geometry.content_height - band + OVERFLOW_TOLERANCE_PT
}

/// Draw an image XObject stretched to the placement rectangle.
///
/// `pixel_width`/`pixel_height` are the dimensions of the cropped bitmap;
/// at 72 DPI one pixel is one point before scaling.
pub(crate) fn image_ops(
    id: XObjectId,
    placement: SlicePlacement,
    pixel_width: u32,
    pixel_height: u32,
) -> Vec<Op> {
    vec![Op::UseXobject {
        id,
        transform: XObjectTransform {
            translate_x: Some(Pt(placement.x)),
            translate_y: Some(Pt(placement.y)),
            scale_x: Some(placement.width / pixel_width as f32),
            scale_y: Some(placement.height / pixel_height as f32),
            dpi: Some(XOBJECT_DPI),
            ..Default::default()
        },
    }]
}

/// Centered title heading at the top of the content area
pub(crate) fn title_ops(title: &str, geometry: &PageGeometry) -> Vec<Op> {
    let approx_width =
        title.chars().count() as f32 * TITLE_FONT_SIZE * HELVETICA_CHAR_WIDTH_RATIO;
    let x = geometry.margin + ((geometry.content_width - approx_width) / 2.0).max(0.0);
    let y = geometry.content_top() - TITLE_FONT_SIZE;

    vec![
        Op::StartTextSection,
        Op::SetTextCursor {
            pos: Point { x: Pt(x), y: Pt(y) },
        },
        Op::SetFontSizeBuiltinFont {
            font: BuiltinFont::HelveticaBold,
            size: Pt(TITLE_FONT_SIZE),
        },
        Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(title.to_string())],
            font: BuiltinFont::HelveticaBold,
        },
        Op::EndTextSection,
    ]
}

/// Create a page with the document's geometry
pub(crate) fn new_page(geometry: &PageGeometry, ops: Vec<Op>) -> PdfPage {
    PdfPage::new(
        Mm(pt_to_mm(geometry.physical_width)),
        Mm(pt_to_mm(geometry.physical_height)),
        ops,
    )
}
