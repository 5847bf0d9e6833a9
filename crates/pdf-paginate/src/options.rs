use crate::constants::{DEFAULT_MARGIN_MM, DEFAULT_TITLE, MAX_MARGIN_MM, MIN_MARGIN_MM, mm_to_pt};
use crate::geometry::PageGeometry;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Print configuration for one generated document
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PrintOptions {
    // Page
    pub paper_size: PaperSize,
    pub orientation: Orientation,
    pub margin_mm: f32,

    // Image
    pub scaling: ScalingPolicy,
    pub quality: Quality,

    // Heading printed above the diagram on the first page
    pub title: Option<String>,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            margin_mm: DEFAULT_MARGIN_MM,
            scaling: ScalingPolicy::FitToPage,
            quality: Quality::High,
            title: Some(DEFAULT_TITLE.to_string()),
        }
    }
}

impl PrintOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| PaginateError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PaginateError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if !(MIN_MARGIN_MM..=MAX_MARGIN_MM).contains(&self.margin_mm) {
            return Err(PaginateError::Config(format!(
                "Margin must be between {} and {} mm, got {}",
                MIN_MARGIN_MM, MAX_MARGIN_MM, self.margin_mm
            )));
        }

        // Resolving also rejects margins that leave no content area
        let geometry = self.geometry()?;
        if self.title.is_some() {
            geometry.reserve_top(crate::constants::TITLE_BAND_HEIGHT)?;
        }

        Ok(())
    }

    /// Margin in points
    pub fn margin_pt(&self) -> f32 {
        mm_to_pt(self.margin_mm)
    }

    /// Resolve the page geometry described by these options
    pub fn geometry(&self) -> Result<PageGeometry> {
        PageGeometry::new(self.paper_size, self.orientation, self.margin_pt())
    }
}
