use crate::charts::ChartStyle;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::fs::File;
use std::path::Path;

/// Load and validate a chart style from a YAML file
pub fn load_style(style_path: &Path) -> Result<ChartStyle> {
    info!("Loading chart style from: {:?}", style_path);

    let file = File::open(style_path)
        .wrap_err_with(|| format!("Failed to open style file '{}'", style_path.display()))?;

    // Missing keys fall back to the defaults
    let style: ChartStyle = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse style file '{}'", style_path.display()))?;

    style.validate()?;

    Ok(style)
}

/// Style from an optional file, or the defaults
pub fn resolve_style(style_path: Option<&Path>) -> Result<ChartStyle> {
    match style_path {
        Some(path) => load_style(path),
        None => Ok(ChartStyle::default()),
    }
}
