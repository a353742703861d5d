//! Plot style shared by every figure.

use serde::{Deserialize, Serialize};

/// Errors in a chart style definition
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StyleError {
    #[error("Figure size must be positive, got {width}x{height}")]
    InvalidFigureSize { width: u32, height: u32 },

    #[error("Font size must be positive, got {0}")]
    InvalidFontSize(f64),

    #[error("Grid alpha must be within [0, 1], got {0}")]
    InvalidGridAlpha(f64),
}

/// Figure dimensions in pixels for a single-panel chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width: u32,
    pub height: u32,
}

impl Default for FigureSize {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
        }
    }
}

/// Rendering options passed to the emitter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub figure_size: FigureSize,
    /// Base font size for tick and axis labels; titles are drawn larger
    pub font_size: f64,
    pub grid: bool,
    pub grid_alpha: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            figure_size: FigureSize::default(),
            font_size: 12.0,
            grid: true,
            grid_alpha: 0.3,
        }
    }
}

impl ChartStyle {
    pub fn validate(&self) -> Result<(), StyleError> {
        let FigureSize { width, height } = self.figure_size;
        if width == 0 || height == 0 {
            return Err(StyleError::InvalidFigureSize { width, height });
        }
        if self.font_size.is_nan() || self.font_size <= 0.0 {
            return Err(StyleError::InvalidFontSize(self.font_size));
        }
        if !(0.0..=1.0).contains(&self.grid_alpha) {
            return Err(StyleError::InvalidGridAlpha(self.grid_alpha));
        }
        Ok(())
    }

    /// Canvas size for a figure with `panels` charts side by side
    pub fn canvas_size(&self, panels: usize) -> (u32, u32) {
        let FigureSize { width, height } = self.figure_size;
        if panels > 1 {
            (width.saturating_mul(7) / 5, height)
        } else {
            (width, height)
        }
    }

    pub fn title_font_size(&self) -> f64 {
        self.font_size * 1.4
    }
}
