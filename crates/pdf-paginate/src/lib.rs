pub mod assemble;
pub mod constants;
mod geometry;
pub mod layout;
mod options;
mod request;
mod slice;
mod stats;
mod types;

pub use assemble::{assemble, generate_pdf};
pub use geometry::{PageGeometry, resolve};
pub use layout::{PageElement, PaginationPlan, SourceRect, plan};
pub use options::*;
pub use request::{PlannedLayout, PrintRequest, plan_layout};
pub use slice::SourceImage;
pub use stats::calculate_statistics;
pub use types::*;
