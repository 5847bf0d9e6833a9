//! Layout calculation modules for pagination
//!
//! This module handles the geometric decisions of pagination:
//! - Plan types (placements and page breaks)
//! - Planning (scale, page count, slice boundaries and overlap)

mod planner;
mod types;

pub use planner::*;
pub use types::*;
