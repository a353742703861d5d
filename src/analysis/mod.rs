//! Cooja log analysis for Li-MSD experiments.
//!
//! This module counts data, DAO, blacklist and attack events in simulator
//! logs and compares baseline, attack and defense runs.

pub mod types;
pub mod predicates;
pub mod log_parser;
pub mod scenarios;
pub mod report;

pub use types::*;
pub use log_parser::{analyze_log_file, analyze_log_files, analyze_reader, AnalysisError, LogCounter};
pub use predicates::{LinePredicate, PREDICATES};
pub use scenarios::{ScenarioLogs, ScenarioComparison};
pub use report::{generate_json_report, MeasuredReport};
