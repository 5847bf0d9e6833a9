use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaginateError {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, PaginateError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for all paper sizes)
    #[default]
    Portrait,
    /// Landscape: width and height swapped
    Landscape,
}

impl FromStr for Orientation {
    type Err = PaginateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            other => Err(PaginateError::Config(format!(
                "Unknown orientation '{}'",
                other
            ))),
        }
    }
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A0,
    A1,
    A2,
    A3,
    #[default]
    A4,
    Letter,
    Legal,
    Tabloid,
}

impl PaperSize {
    pub const ALL: [PaperSize; 8] = [
        PaperSize::A4,
        PaperSize::A3,
        PaperSize::A2,
        PaperSize::A1,
        PaperSize::A0,
        PaperSize::Letter,
        PaperSize::Legal,
        PaperSize::Tabloid,
    ];

    /// Get base dimensions (always portrait: width < height)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A0 => (841.0, 1189.0),
            PaperSize::A1 => (594.0, 841.0),
            PaperSize::A2 => (420.0, 594.0),
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Tabloid => (279.4, 431.8),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaperSize::A0 => "A0",
            PaperSize::A1 => "A1",
            PaperSize::A2 => "A2",
            PaperSize::A3 => "A3",
            PaperSize::A4 => "A4",
            PaperSize::Letter => "Letter",
            PaperSize::Legal => "Legal",
            PaperSize::Tabloid => "Tabloid",
        }
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaperSize {
    type Err = PaginateError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        PaperSize::ALL
            .into_iter()
            .find(|size| size.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PaginateError::Config(format!("Unknown page format '{}'", wanted)))
    }
}

/// How the rendered diagram is scaled onto pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalingPolicy {
    /// Scale the whole image uniformly to fit a single page
    #[default]
    FitToPage,
    /// Shrink to page width and split vertically across pages with overlap
    ScaleToMultiplePages,
    /// Place the image one pixel per point without pagination
    OriginalSize,
}

impl ScalingPolicy {
    pub fn label(self) -> &'static str {
        match self {
            ScalingPolicy::FitToPage => "Fit to Page",
            ScalingPolicy::ScaleToMultiplePages => "Scale to Multiple Pages",
            ScalingPolicy::OriginalSize => "Original Size",
        }
    }
}

impl FromStr for ScalingPolicy {
    type Err = PaginateError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "fit" | "fittopage" => Ok(ScalingPolicy::FitToPage),
            "multipage" | "scaletomultiplepages" => Ok(ScalingPolicy::ScaleToMultiplePages),
            "original" | "originalsize" => Ok(ScalingPolicy::OriginalSize),
            _ => Err(PaginateError::Config(format!(
                "Unknown scaling policy '{}'",
                s.trim()
            ))),
        }
    }
}

/// Rendering resolution presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quality {
    /// 72 DPI
    Low,
    /// 150 DPI
    Medium,
    /// 300 DPI
    #[default]
    High,
    /// 600 DPI
    VeryHigh,
}

impl Quality {
    pub fn dpi(self) -> u32 {
        match self {
            Quality::Low => 72,
            Quality::Medium => 150,
            Quality::High => 300,
            Quality::VeryHigh => 600,
        }
    }
}

/// Summary of a pagination plan
#[derive(Debug, Clone, PartialEq)]
pub struct PlanStatistics {
    /// Number of output pages
    pub pages: usize,
    /// Uniform scale applied to every slice
    pub scale: f64,
    /// Rendered width of every slice in points
    pub rendered_width_pt: f32,
    /// Tallest rendered slice in points
    pub max_slice_height_pt: f32,
    /// Whether any slice is taller or wider than the content area
    pub overflows_page: bool,
}
