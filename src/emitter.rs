//! Report emitter: writes the figure catalog and the summary table.
//!
//! All rendering happens in memory; this module only owns the output
//! directory and the file writes.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Context, Result};

use crate::charts::{datasets, render_svg, ChartStyle, Figure};
use crate::summary::{SummaryTable, SUMMARY_FILE_NAME};

/// Default output directory for generated figures
pub const DEFAULT_OUTPUT_DIR: &str = "results";

/// Renders figures and tables into an output directory
#[derive(Debug, Clone)]
pub struct ReportEmitter {
    style: ChartStyle,
    output_dir: PathBuf,
}

impl ReportEmitter {
    pub fn new(style: ChartStyle, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            style,
            output_dir: output_dir.into(),
        }
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Create the output directory if it does not exist yet
    pub fn ensure_output_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir).wrap_err_with(|| {
            format!("Failed to create output directory '{}'", self.output_dir.display())
        })
    }

    /// Render a figure and write it, replacing any previous file
    pub fn emit_figure(&self, figure: &Figure) -> Result<PathBuf> {
        let svg = render_svg(&self.style, figure)?;
        let path = self.output_dir.join(figure.file_name());
        write_output(&path, &svg)?;
        Ok(path)
    }

    /// Write a summary table under `file_name`
    pub fn emit_summary(&self, table: &SummaryTable, file_name: &str) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        write_output(&path, &table.to_string())?;
        Ok(path)
    }

    /// Generate every reference figure and the reference summary table,
    /// reporting progress on stdout.
    pub fn emit_all(&self) -> Result<Vec<PathBuf>> {
        self.emit_all_to(&mut io::stdout().lock())
    }

    /// Like [`emit_all`](Self::emit_all), with a `Saved: <path>` line per
    /// file and the summary table written to `out`.
    ///
    /// Returns the written paths in generation order. Stops at the first
    /// failure.
    pub fn emit_all_to<W: Write>(&self, out: &mut W) -> Result<Vec<PathBuf>> {
        self.ensure_output_dir()?;

        let mut written = Vec::new();
        for figure in datasets::reference_figures() {
            let path = self.emit_figure(&figure)?;
            writeln!(out, "Saved: {}", path.display())?;
            written.push(path);
        }

        let table = SummaryTable::reference();
        writeln!(out, "\n{}", table)?;
        let path = self.emit_summary(&table, SUMMARY_FILE_NAME)?;
        writeln!(out, "Saved: {}", path.display())?;
        written.push(path);

        log::info!(
            "Generated {} files in {}",
            written.len(),
            self.output_dir.display()
        );
        Ok(written)
    }

    /// Paths `emit_all` writes, without generating anything
    pub fn expected_outputs(&self) -> Vec<PathBuf> {
        datasets::FIGURE_NAMES
            .iter()
            .map(|name| self.output_dir.join(format!("{}.svg", name)))
            .chain(std::iter::once(self.output_dir.join(SUMMARY_FILE_NAME)))
            .collect()
    }
}

/// Print a table to the console, framed by blank lines
pub fn print_table(table: &SummaryTable) {
    println!("\n{}", table);
}

/// Write the closing list of generated files
pub fn write_file_list<W: Write>(out: &mut W, paths: &[PathBuf]) -> io::Result<()> {
    writeln!(out, "\nGenerated files:")?;
    for path in paths {
        writeln!(out, "  - {}", path.display())?;
    }
    writeln!(out)
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    log::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
