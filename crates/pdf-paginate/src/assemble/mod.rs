//! PDF assembly - materializing a pagination plan
//!
//! This module walks a plan in order:
//! 1. Crop each placement's slice out of the source image
//! 2. Register the slice as an image XObject
//! 3. Draw it at the top of the current page's content area
//! 4. Start a new page at every page break

mod page;

use crate::constants::TITLE_BAND_HEIGHT;
use crate::geometry::PageGeometry;
use crate::layout::{PageElement, PaginationPlan};
use crate::slice::SourceImage;
use crate::types::{PaginateError, Result};
use page::{SlicePlacement, image_ops, new_page, overflows_content, title_ops};
use printpdf::*;
use std::path::Path;

/// Assemble the document on a blocking thread and write it to `output_path`.
pub async fn generate_pdf(
    image: &SourceImage,
    plan: &PaginationPlan,
    geometry: &PageGeometry,
    title: Option<&str>,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    let image = image.clone();
    let plan = plan.clone();
    let geometry = *geometry;
    let title = title.map(str::to_owned);
    let output_path = output_path.as_ref().to_owned();

    // PDF generation is CPU-bound, spawn blocking
    let bytes = tokio::task::spawn_blocking(move || {
        assemble(&image, &plan, &geometry, title.as_deref())
    })
    .await??;

    tokio::fs::write(&output_path, bytes).await?;
    log::info!("Wrote {}", output_path.display());

    Ok(())
}

/// Build the PDF bytes for a plan.
///
/// When `title` is set it is drawn on the first page and a band of
/// [`TITLE_BAND_HEIGHT`] is kept free above the image on every page; the
/// plan must have been computed against the reduced content height.
pub fn assemble(
    image: &SourceImage,
    plan: &PaginationPlan,
    geometry: &PageGeometry,
    title: Option<&str>,
) -> Result<Vec<u8>> {
    let mut doc = PdfDocument::new(title.unwrap_or("Diagram"));
    let band = if title.is_some() { TITLE_BAND_HEIGHT } else { 0.0 };

    let mut ops = match title {
        Some(text) => title_ops(text, geometry),
        None => Vec::new(),
    };
    let mut pages = Vec::with_capacity(plan.page_count());

    for element in &plan.elements {
        match element {
            PageElement::ImagePlacement {
                source_rect,
                rendered_width,
                rendered_height,
            } => {
                let png = image.crop_png(source_rect)?;

                let mut warnings = Vec::new();
                let raw = RawImage::decode_from_bytes(&png, &mut warnings)
                    .map_err(|e| PaginateError::Pdf(format!("Failed to embed slice: {}", e)))?;
                let (pixel_width, pixel_height) = (raw.width as u32, raw.height as u32);
                let id = doc.add_image(&raw);

                if overflows_content(geometry, band, *rendered_width, *rendered_height) {
                    log::warn!(
                        "Slice rows {:.0}..{:.0} is {:.1}x{:.1}pt, content area is {:.1}x{:.1}pt",
                        source_rect.y0,
                        source_rect.y1,
                        rendered_width,
                        rendered_height,
                        geometry.content_width,
                        geometry.content_height - band
                    );
                }

                let placement =
                    SlicePlacement::at_top(geometry, band, *rendered_width, *rendered_height);
                ops.extend(image_ops(id, placement, pixel_width, pixel_height));
            }
            PageElement::PageBreak => {
                pages.push(new_page(geometry, std::mem::take(&mut ops)));
            }
        }
    }
    pages.push(new_page(geometry, ops));

    log::info!(
        "Assembled {} page(s) at scale {:.3}",
        pages.len(),
        plan.scale
    );

    doc.pages = pages;

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    if !warnings.is_empty() {
        log::warn!("PDF writer reported {} warning(s)", warnings.len());
    }

    Ok(bytes)
}
