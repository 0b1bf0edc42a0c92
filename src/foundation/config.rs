use std::path::Path;

use anyhow::Context;
use image::imageops::FilterType;

use crate::foundation::{
    core::Canvas,
    error::{EaselError, EaselResult},
};

/// Interpolation used when a loaded image is fitted to the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeFilter {
    /// Nearest neighbour.
    Nearest,
    /// Linear interpolation over a 2x2 neighbourhood.
    #[default]
    Bilinear,
    /// Catmull-Rom cubic.
    Cubic,
    /// Gaussian kernel.
    Gaussian,
    /// Lanczos with window 3.
    Lanczos3,
}

impl ResizeFilter {
    /// Matching `image` filter.
    pub fn filter_type(self) -> FilterType {
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Bilinear => FilterType::Triangle,
            Self::Cubic => FilterType::CatmullRom,
            Self::Gaussian => FilterType::Gaussian,
            Self::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Tiling and clipping for contrast-limited adaptive equalization.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClaheParams {
    /// Tiles along `(x, y)`.
    pub grid: (u32, u32),
    /// Histogram clip limit relative to a uniform histogram; `<= 0` disables clipping.
    pub clip_limit: f64,
}

impl ClaheParams {
    /// Reject empty grids and non-finite clip limits.
    pub fn validate(&self) -> EaselResult<()> {
        if self.grid.0 == 0 || self.grid.1 == 0 {
            return Err(EaselError::validation(format!(
                "clahe grid must be non-empty, got {:?}",
                self.grid
            )));
        }
        if !self.clip_limit.is_finite() {
            return Err(EaselError::validation("clahe clip_limit must be finite"));
        }
        Ok(())
    }
}

impl Default for ClaheParams {
    fn default() -> Self {
        Self {
            grid: (8, 8),
            clip_limit: 2.0,
        }
    }
}

/// Session settings for an [`crate::ImageStack`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Canvas width every buffer is fitted to.
    pub width: u32,
    /// Canvas height every buffer is fitted to.
    pub height: u32,
    /// Interpolation used by `load_image`.
    pub resize_filter: ResizeFilter,
    /// Parameters for `equalize_clahe_default`.
    pub clahe: ClaheParams,
}

impl Default for EditorConfig {
    fn default() -> Self {
        let canvas = Canvas::default();
        Self {
            width: canvas.width,
            height: canvas.height,
            resize_filter: ResizeFilter::default(),
            clahe: ClaheParams::default(),
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json_str(s: &str) -> EaselResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| EaselError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> EaselResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read editor config {}", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Check sizes and CLAHE parameters.
    pub fn validate(&self) -> EaselResult<()> {
        Canvas::new(self.width, self.height)?;
        self.clahe.validate()
    }

    /// Canvas described by `width` x `height`.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
