//! Grouped bar chart data model.

use plotters::style::RGBColor;

/// Errors raised while validating or rendering a figure
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("Chart '{title}' has no categories")]
    NoCategories { title: String },

    #[error("Chart '{title}' has no series")]
    NoSeries { title: String },

    #[error("Series '{series}' in chart '{title}' has {actual} values, expected {expected}")]
    SeriesLengthMismatch {
        title: String,
        series: String,
        expected: usize,
        actual: usize,
    },

    #[error("Figure '{0}' has no panels")]
    NoPanels(String),

    #[error("Failed to render figure '{figure}': {message}")]
    Render { figure: String, message: String },
}

/// Named bar colors used by the figure catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarColor {
    Green,
    Red,
    Blue,
    Orange,
    SteelBlue,
    Coral,
}

impl BarColor {
    pub fn rgb(self) -> RGBColor {
        match self {
            BarColor::Green => RGBColor(0, 128, 0),
            BarColor::Red => RGBColor(255, 0, 0),
            BarColor::Blue => RGBColor(0, 0, 255),
            BarColor::Orange => RGBColor(255, 165, 0),
            BarColor::SteelBlue => RGBColor(70, 130, 180),
            BarColor::Coral => RGBColor(255, 127, 80),
        }
    }
}

/// One named series of bar heights, one value per category
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub color: BarColor,
    pub opacity: f64,
}

impl BarSeries {
    pub fn new(name: impl Into<String>, values: Vec<f64>, color: BarColor) -> Self {
        Self {
            name: name.into(),
            values,
            color,
            opacity: 0.7,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// A grouped bar chart: one group of bars per category
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedBarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub categories: Vec<String>,
    pub series: Vec<BarSeries>,
    /// Fixed upper bound of the y axis; derived from the data when unset
    pub y_max: Option<f64>,
    /// Print each bar's height above it
    pub value_labels: bool,
}

impl GroupedBarChart {
    pub fn new(title: impl Into<String>, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            categories: Vec::new(),
            series: Vec::new(),
            y_max: None,
            value_labels: false,
        }
    }

    pub fn categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn series(mut self, series: BarSeries) -> Self {
        self.series.push(series);
        self
    }

    pub fn y_max(mut self, y_max: f64) -> Self {
        self.y_max = Some(y_max);
        self
    }

    pub fn with_value_labels(mut self) -> Self {
        self.value_labels = true;
        self
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if self.categories.is_empty() {
            return Err(ChartError::NoCategories {
                title: self.title.clone(),
            });
        }
        if self.series.is_empty() {
            return Err(ChartError::NoSeries {
                title: self.title.clone(),
            });
        }
        for series in &self.series {
            if series.values.len() != self.categories.len() {
                return Err(ChartError::SeriesLengthMismatch {
                    title: self.title.clone(),
                    series: series.name.clone(),
                    expected: self.categories.len(),
                    actual: series.values.len(),
                });
            }
        }
        Ok(())
    }

    /// Width of a single bar in category units
    pub fn bar_width(&self) -> f64 {
        (0.75 / self.series.len().max(1) as f64).min(0.35)
    }

    /// Center of the bar for `series_index` within the group at `category_index`
    pub fn bar_center(&self, category_index: usize, series_index: usize) -> f64 {
        let n = self.series.len() as f64;
        category_index as f64 + (series_index as f64 - (n - 1.0) / 2.0) * self.bar_width()
    }

    /// Upper bound of the y axis
    pub fn y_upper(&self) -> f64 {
        if let Some(max) = self.y_max {
            return max;
        }
        let data_max = self
            .series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0_f64, f64::max);
        if data_max > 0.0 {
            data_max * 1.15
        } else {
            1.0
        }
    }
}

/// A saved figure: one or more charts laid out side by side
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Output file name without extension
    pub name: String,
    pub panels: Vec<GroupedBarChart>,
}

impl Figure {
    pub fn new(name: impl Into<String>, panels: Vec<GroupedBarChart>) -> Self {
        Self {
            name: name.into(),
            panels,
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.svg", self.name)
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if self.panels.is_empty() {
            return Err(ChartError::NoPanels(self.name.clone()));
        }
        self.panels.iter().try_for_each(GroupedBarChart::validate)
    }
}
