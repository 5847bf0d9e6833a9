//! Shared constants for diagram pagination
//!
//! This module centralizes magic numbers and constants used by the
//! geometry resolver, the planner and the document assembler.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Pagination
// =============================================================================

/// Fraction of a nominal slice height added to each interior slice edge
pub const OVERLAP_FRACTION: f64 = 0.10;

/// Upper bound on pages for one diagram
pub const MAX_PAGES: usize = 10_000;

/// Slack in points before a slice counts as overflowing the content area
pub const OVERFLOW_TOLERANCE_PT: f32 = 0.01;

// =============================================================================
// Margins
// =============================================================================

/// Smallest margin accepted from user configuration (millimeters)
pub const MIN_MARGIN_MM: f32 = 5.0;

/// Largest margin accepted from user configuration (millimeters)
pub const MAX_MARGIN_MM: f32 = 50.0;

/// Default page margin (millimeters)
pub const DEFAULT_MARGIN_MM: f32 = 20.0;

// =============================================================================
// Title Heading
// =============================================================================

/// Font size of the title heading (points)
pub const TITLE_FONT_SIZE: f32 = 18.0;

/// Vertical band reserved for the title heading on every page (points)
pub const TITLE_BAND_HEIGHT: f32 = TITLE_FONT_SIZE * 2.0;

/// Default document title
pub const DEFAULT_TITLE: &str = "Flowchart";

/// Approximate character width ratio for Helvetica
pub const HELVETICA_CHAR_WIDTH_RATIO: f32 = 0.5;

// =============================================================================
// Rasterization
// =============================================================================

/// Resolution at which image XObjects are registered so one pixel spans one point
pub const XOBJECT_DPI: f32 = 72.0;
