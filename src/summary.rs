//! Results summary table.
//!
//! Builds the fixed-width comparison table printed to the console and saved
//! as `summary_table.txt`. Rendering returns lines; writing is left to the
//! caller.

use std::fmt;

use crate::analysis::MetricsSnapshot;

/// Total width of the separator lines
pub const TABLE_WIDTH: usize = 80;

/// File name of the reference summary table
pub const SUMMARY_FILE_NAME: &str = "summary_table.txt";

const COLUMN_WIDTHS: [usize; 5] = [15, 12, 15, 15, 12];
const HEADERS: [&str; 5] = ["Metric", "Baseline", "Under Attack", "With Li-MSD", "Improvement"];

/// How the improvement column is derived for a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Improvement {
    /// Difference in percentage points between defense and attack
    PercentagePoints,
    /// Change relative to the under-attack value
    Relative,
    NotApplicable,
}

impl Improvement {
    /// Improvement of `with_mitigation` over `under_attack`, as a percent
    pub fn value(self, under_attack: f64, with_mitigation: f64) -> Option<f64> {
        match self {
            Improvement::PercentagePoints => Some(with_mitigation - under_attack),
            Improvement::Relative if under_attack != 0.0 => {
                Some((with_mitigation - under_attack) / under_attack * 100.0)
            }
            Improvement::Relative | Improvement::NotApplicable => None,
        }
    }

    pub fn format(self, under_attack: f64, with_mitigation: f64) -> String {
        match self.value(under_attack, with_mitigation) {
            Some(v) => format!("{:+.0}%", v),
            None => "N/A".to_string(),
        }
    }
}

/// One metric compared across the three scenarios
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub metric: String,
    pub baseline: f64,
    pub under_attack: f64,
    pub with_mitigation: f64,
    pub improvement: Improvement,
}

impl SummaryRow {
    pub fn new(
        metric: impl Into<String>,
        baseline: f64,
        under_attack: f64,
        with_mitigation: f64,
        improvement: Improvement,
    ) -> Self {
        Self {
            metric: metric.into(),
            baseline,
            under_attack,
            with_mitigation,
            improvement,
        }
    }

    fn cells(&self) -> [String; 5] {
        [
            self.metric.clone(),
            format_value(self.baseline),
            format_value(self.under_attack),
            format_value(self.with_mitigation),
            self.improvement.format(self.under_attack, self.with_mitigation),
        ]
    }
}

/// Comparison table of baseline, attack and mitigation scenarios
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    pub title: String,
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    /// The illustrative Li-MSD results table
    pub fn reference() -> Self {
        Self {
            title: "RESULTS SUMMARY TABLE".to_string(),
            rows: vec![
                SummaryRow::new("PDR (%)", 98.5, 52.0, 96.0, Improvement::PercentagePoints),
                SummaryRow::new("PLR (%)", 1.5, 48.0, 4.0, Improvement::PercentagePoints),
                SummaryRow::new("AE2ED (s)", 0.26, 2.4, 0.38, Improvement::Relative),
                SummaryRow::new("APC (mW)", 46.0, 82.0, 48.0, Improvement::Relative),
                SummaryRow::new("DAOs Blocked", 0.0, 0.0, 1250.0, Improvement::NotApplicable),
                SummaryRow::new("FPR (%)", 0.0, 0.0, 1.6, Improvement::NotApplicable),
            ],
        }
    }

    /// Table built from three analyzed logs
    pub fn from_snapshots(
        baseline: &MetricsSnapshot,
        under_attack: &MetricsSnapshot,
        with_mitigation: &MetricsSnapshot,
    ) -> Self {
        let metrics: [(&str, fn(&MetricsSnapshot) -> f64, Improvement); 6] = [
            ("PDR (%)", |m| m.pdr, Improvement::PercentagePoints),
            ("PLR (%)", |m| m.plr, Improvement::PercentagePoints),
            ("DAOs Sent", |m| m.dao_sent as f64, Improvement::Relative),
            ("DAOs Blocked", |m| m.dao_blocked as f64, Improvement::NotApplicable),
            ("Blacklisted", |m| m.nodes_blacklisted as f64, Improvement::NotApplicable),
            ("Attack Events", |m| m.attack_count as f64, Improvement::NotApplicable),
        ];

        Self {
            title: "MEASURED RESULTS SUMMARY TABLE".to_string(),
            rows: metrics
                .iter()
                .map(|(metric, get, improvement)| {
                    SummaryRow::new(
                        *metric,
                        round2(get(baseline)),
                        round2(get(under_attack)),
                        round2(get(with_mitigation)),
                        *improvement,
                    )
                })
                .collect(),
        }
    }

    pub fn metric_names(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.metric.as_str()).collect()
    }

    /// Render the table as lines, without trailing newlines
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows.len() + 6);
        lines.push("=".repeat(TABLE_WIDTH));
        lines.push(self.title.clone());
        lines.push("=".repeat(TABLE_WIDTH));
        lines.push(format_row(&HEADERS.map(String::from)));
        lines.push("-".repeat(TABLE_WIDTH));
        for row in &self.rows {
            lines.push(format_row(&row.cells()));
        }
        lines.push("=".repeat(TABLE_WIDTH));
        lines
    }
}

impl fmt::Display for SummaryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

fn format_row(cells: &[String; 5]) -> String {
    cells
        .iter()
        .zip(COLUMN_WIDTHS)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shortest representation: whole numbers without a decimal point
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
