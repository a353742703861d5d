//! Baseline / under attack / with defense comparison.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::log_parser::{analyze_log_files, AnalysisError};
use super::types::{AnalyzedLog, MetricsSnapshot};
use crate::summary::SummaryTable;

pub const BASELINE_LOG: &str = "logs/baseline-no-attack.log";
pub const ATTACK_LOG: &str = "logs/under-attack-no-defense.log";
pub const DEFENSE_LOG: &str = "logs/with-defense.log";

/// The three logs of one experiment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioLogs {
    pub baseline: PathBuf,
    pub under_attack: PathBuf,
    pub with_defense: PathBuf,
}

impl Default for ScenarioLogs {
    fn default() -> Self {
        Self {
            baseline: PathBuf::from(BASELINE_LOG),
            under_attack: PathBuf::from(ATTACK_LOG),
            with_defense: PathBuf::from(DEFENSE_LOG),
        }
    }
}

impl ScenarioLogs {
    /// Analyze all three logs, each with fresh counters
    pub fn analyze(&self) -> Result<ScenarioComparison, AnalysisError> {
        let paths = vec![
            self.baseline.clone(),
            self.under_attack.clone(),
            self.with_defense.clone(),
        ];
        let mut logs = analyze_log_files(&paths)?.into_iter();

        // analyze_log_files returns one entry per input, in order
        match (logs.next(), logs.next(), logs.next()) {
            (Some(baseline), Some(under_attack), Some(with_defense)) => Ok(ScenarioComparison {
                baseline,
                under_attack,
                with_defense,
            }),
            _ => unreachable!("one result per scenario log"),
        }
    }
}

/// Metrics of the three runs of one experiment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub baseline: AnalyzedLog,
    pub under_attack: AnalyzedLog,
    pub with_defense: AnalyzedLog,
}

impl ScenarioComparison {
    pub fn summary_table(&self) -> SummaryTable {
        SummaryTable::from_snapshots(
            &self.baseline.metrics,
            &self.under_attack.metrics,
            &self.with_defense.metrics,
        )
    }

    pub fn snapshots(&self) -> [&MetricsSnapshot; 3] {
        [
            &self.baseline.metrics,
            &self.under_attack.metrics,
            &self.with_defense.metrics,
        ]
    }

    pub fn into_logs(self) -> Vec<AnalyzedLog> {
        vec![self.baseline, self.under_attack, self.with_defense]
    }
}
