//! End-to-end document request
//!
//! Carries the print options and the rendered image through geometry
//! resolution, planning and assembly.

use crate::assemble;
use crate::constants::TITLE_BAND_HEIGHT;
use crate::geometry::PageGeometry;
use crate::layout::{PaginationPlan, plan};
use crate::options::PrintOptions;
use crate::slice::SourceImage;
use crate::stats::calculate_statistics;
use crate::types::*;
use std::path::Path;

/// Geometry and plan computed for one image
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedLayout {
    pub geometry: PageGeometry,
    /// Content height the plan was computed against (title band removed)
    pub content_height: f32,
    pub plan: PaginationPlan,
}

impl PlannedLayout {
    pub fn statistics(&self) -> PlanStatistics {
        calculate_statistics(&self.plan, &self.geometry, self.content_height)
    }
}

/// Validate options, resolve the page and plan an image of the given size.
pub fn plan_layout(
    options: &PrintOptions,
    image_width: u32,
    image_height: u32,
) -> Result<PlannedLayout> {
    options.validate()?;

    let geometry = options.geometry()?;
    let content_height = match options.title {
        Some(_) => geometry.reserve_top(TITLE_BAND_HEIGHT)?,
        None => geometry.content_height,
    };

    let plan = plan(
        geometry.content_width,
        content_height,
        image_width,
        image_height,
        options.scaling,
    )?;

    log::debug!(
        "{} {:?} {}x{}px -> {} page(s) at scale {:.3}",
        options.paper_size,
        options.orientation,
        image_width,
        image_height,
        plan.page_count(),
        plan.scale
    );

    Ok(PlannedLayout {
        geometry,
        content_height,
        plan,
    })
}

/// A request to turn one rendered diagram into a paginated PDF
#[derive(Debug, Clone)]
pub struct PrintRequest {
    pub options: PrintOptions,
    pub image: SourceImage,
}

impl PrintRequest {
    pub fn new(options: PrintOptions, image: SourceImage) -> Self {
        Self { options, image }
    }

    pub fn layout(&self) -> Result<PlannedLayout> {
        plan_layout(
            &self.options,
            self.image.pixel_width(),
            self.image.pixel_height(),
        )
    }

    /// Plan and assemble the document in memory.
    pub fn build_pdf(&self) -> Result<Vec<u8>> {
        let layout = self.layout()?;
        assemble::assemble(
            &self.image,
            &layout.plan,
            &layout.geometry,
            self.options.title.as_deref(),
        )
    }

    /// Plan the document and write it to `output_path`.
    ///
    /// Planning errors are reported before anything is written.
    pub async fn generate_pdf(&self, output_path: impl AsRef<Path>) -> Result<PlannedLayout> {
        let layout = self.layout()?;
        assemble::generate_pdf(
            &self.image,
            &layout.plan,
            &layout.geometry,
            self.options.title.as_deref(),
            output_path,
        )
        .await?;
        Ok(layout)
    }
}
