//! Grouped bar charts for the Li-MSD evaluation.
//!
//! Figures are described as plain data ([`Figure`], [`GroupedBarChart`]),
//! rendered to SVG by [`render_svg`], and written by
//! [`crate::emitter::ReportEmitter`].

pub mod datasets;
pub mod model;
pub mod render;
pub mod style;

pub use model::{BarColor, BarSeries, ChartError, Figure, GroupedBarChart};
pub use render::render_svg;
pub use style::{ChartStyle, FigureSize, StyleError};
