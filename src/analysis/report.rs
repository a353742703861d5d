//! JSON reports of analyzed logs.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use color_eyre::eyre::{Context, Result};
use serde::{Deserialize, Serialize};

use super::types::AnalyzedLog;

/// Snapshots of one or more logs with the time they were produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasuredReport {
    pub generated_at: DateTime<Utc>,
    pub logs: Vec<AnalyzedLog>,
}

impl MeasuredReport {
    pub fn new(logs: Vec<AnalyzedLog>) -> Self {
        Self {
            generated_at: Utc::now(),
            logs,
        }
    }
}

/// Write a report as pretty-printed JSON
pub fn generate_json_report(report: &MeasuredReport, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .context("Failed to serialize report to JSON")?;

    fs::write(output_path, json)
        .with_context(|| format!("Failed to write JSON report to {}", output_path.display()))?;

    log::info!("JSON report written to {}", output_path.display());
    Ok(())
}

/// Print every analyzed log to stdout
pub fn print_logs(logs: &[AnalyzedLog]) {
    for log in logs {
        println!("\n{}", log.path.display());
        println!("{}", log.metrics);
    }
    println!();
}
