//! Pagination planning
//!
//! Given the content area of a page and the pixel size of the rendered
//! diagram, decide how many pages are needed, which vertical strip of the
//! image goes on each page and how large it is drawn.

use crate::constants::{MAX_PAGES, OVERLAP_FRACTION};
use crate::types::{PaginateError, Result, ScalingPolicy};

use super::{PageElement, PaginationPlan, SourceRect};

/// Relative distance from a whole page count treated as landing on it
const PAGE_BOUNDARY_EPSILON: f64 = 1e-12;

/// Build the pagination plan for one image.
///
/// Geometry arrives in `f32` points; scale and pixel spans are computed in
/// `f64` so page counts and slice bounds stay exact for tall bitmaps.
///
/// # Arguments
/// * `content_width` - Usable page width in points
/// * `content_height` - Usable page height in points
/// * `image_width` - Source image width in pixels
/// * `image_height` - Source image height in pixels
/// * `policy` - How the image is scaled onto pages
pub fn plan(
    content_width: f32,
    content_height: f32,
    image_width: u32,
    image_height: u32,
    policy: ScalingPolicy,
) -> Result<PaginationPlan> {
    if !(content_width > 0.0 && content_height > 0.0)
        || !content_width.is_finite()
        || !content_height.is_finite()
    {
        return Err(PaginateError::Config(format!(
            "Content area must be positive, got {}x{}",
            content_width, content_height
        )));
    }
    if image_width == 0 || image_height == 0 {
        return Err(PaginateError::InvalidInput(format!(
            "Image has no area ({}x{} pixels)",
            image_width, image_height
        )));
    }

    let content_width = f64::from(content_width);
    let content_height = f64::from(content_height);
    let image_width = f64::from(image_width);
    let image_height = f64::from(image_height);

    let plan = match policy {
        ScalingPolicy::FitToPage => {
            // Uncapped: small images are enlarged to fill the page
            let scale = calculate_fit_scale(image_width, image_height, content_width, content_height);
            single_placement(image_width, image_height, scale)
        }
        ScalingPolicy::OriginalSize => single_placement(image_width, image_height, 1.0),
        ScalingPolicy::ScaleToMultiplePages => {
            let scale = (content_width / image_width).min(1.0);
            let scaled_height = image_height * scale;

            if scaled_height <= content_height {
                single_placement(image_width, image_height, scale)
            } else {
                let pages = pages_needed(scaled_height, content_height)?;
                split_vertically(image_width, image_height, scale, pages)
            }
        }
    };

    Ok(plan)
}

/// Number of pages needed for an image of `scaled_height` points.
///
/// Each page budgets only `1 - OVERLAP_FRACTION` of its content height so
/// the overlap added to slices has room. A height landing exactly on a page
/// boundary does not open another page. More than [`MAX_PAGES`] is a
/// configuration error.
pub fn pages_needed(scaled_height: f64, content_height: f64) -> Result<usize> {
    let effective_page_height = content_height * (1.0 - OVERLAP_FRACTION);
    let ratio = scaled_height / effective_page_height;
    if !ratio.is_finite() {
        return Err(PaginateError::Config(format!(
            "Cannot paginate {}pt onto pages {}pt tall",
            scaled_height, content_height
        )));
    }

    let whole = ratio.round();
    let pages = if (ratio - whole).abs() <= whole.max(1.0) * PAGE_BOUNDARY_EPSILON {
        whole
    } else {
        ratio.ceil()
    };

    if pages > MAX_PAGES as f64 {
        return Err(PaginateError::Config(format!(
            "Diagram needs {} pages, at most {} are supported",
            pages, MAX_PAGES
        )));
    }
    Ok((pages as usize).max(1))
}

/// Uniform scale that fits the whole image inside the target area
fn calculate_fit_scale(src_width: f64, src_height: f64, target_width: f64, target_height: f64) -> f64 {
    let scale_w = target_width / src_width;
    let scale_h = target_height / src_height;
    scale_w.min(scale_h)
}

fn single_placement(image_width: f64, image_height: f64, scale: f64) -> PaginationPlan {
    PaginationPlan {
        scale,
        elements: vec![PageElement::ImagePlacement {
            source_rect: SourceRect::full(image_width, image_height),
            rendered_width: (image_width * scale) as f32,
            rendered_height: (image_height * scale) as f32,
        }],
    }
}

/// Cut the image into `pages` horizontal strips of equal nominal height,
/// extending interior edges by the overlap.
fn split_vertically(image_width: f64, image_height: f64, scale: f64, pages: usize) -> PaginationPlan {
    let nominal = image_height / pages as f64;
    let overlap = nominal * OVERLAP_FRACTION;
    let last = pages - 1;

    let mut elements = Vec::with_capacity(pages * 2 - 1);
    for i in 0..pages {
        let mut start = i as f64 * nominal;
        if i > 0 {
            start -= overlap;
        }

        // The last slice ends on the integer bitmap height
        let mut end = if i == last {
            image_height
        } else {
            ((i + 1) as f64 * nominal).min(image_height) + overlap
        };

        start = start.clamp(0.0, image_height);
        end = end.clamp(0.0, image_height);

        elements.push(PageElement::ImagePlacement {
            source_rect: SourceRect::new(0.0, start, image_width, end),
            rendered_width: (image_width * scale) as f32,
            rendered_height: ((end - start) * scale) as f32,
        });

        if i < last {
            elements.push(PageElement::PageBreak);
        }
    }

    PaginationPlan { scale, elements }
}
