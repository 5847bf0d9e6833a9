use crate::constants::OVERFLOW_TOLERANCE_PT;
use crate::geometry::PageGeometry;
use crate::layout::PaginationPlan;
use crate::types::*;

/// Calculate statistics for a pagination plan
///
/// `content_height` is the height the plan was computed against (the page's
/// content height minus any heading band).
pub fn calculate_statistics(
    plan: &PaginationPlan,
    geometry: &PageGeometry,
    content_height: f32,
) -> PlanStatistics {
    let mut rendered_width_pt: f32 = 0.0;
    let mut max_slice_height_pt: f32 = 0.0;
    for (_, width, height) in plan.placements() {
        rendered_width_pt = rendered_width_pt.max(width);
        max_slice_height_pt = max_slice_height_pt.max(height);
    }

    let overflows_page = rendered_width_pt > geometry.content_width + OVERFLOW_TOLERANCE_PT
        || max_slice_height_pt > content_height + OVERFLOW_TOLERANCE_PT;

    PlanStatistics {
        pages: plan.page_count(),
        scale: plan.scale,
        rendered_width_pt,
        max_slice_height_pt,
        overflows_page,
    }
}
