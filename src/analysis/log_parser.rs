//! Log counting for Cooja simulation logs.
//!
//! Streams a log file line by line and counts the lines matched by each entry
//! of the predicate table.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use super::predicates::PREDICATES;
use super::types::*;

/// Errors that can occur while analyzing a log file
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read log file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to decode line {line} of {path}: {source}")]
    Decode {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },
}

impl AnalysisError {
    pub fn path(&self) -> &Path {
        match self {
            AnalysisError::Open { path, .. }
            | AnalysisError::Read { path, .. }
            | AnalysisError::Decode { path, .. } => path,
        }
    }
}

/// Running counters for a single analysis pass
#[derive(Debug, Default, Clone)]
pub struct LogCounter {
    counts: [u64; 6],
    lines_seen: u64,
}

impl LogCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Test one line against every predicate
    pub fn observe_line(&mut self, line: &str) {
        self.lines_seen += 1;
        for predicate in PREDICATES.iter() {
            if predicate.matches(line) {
                self.counts[predicate.counter.index()] += 1;
            }
        }
    }

    pub fn count(&self, counter: Counter) -> u64 {
        self.counts[counter.index()]
    }

    pub fn lines_seen(&self) -> u64 {
        self.lines_seen
    }

    /// Compute derived ratios and freeze the counters
    pub fn finish(self) -> MetricsSnapshot {
        MetricsSnapshot::from_counts(self.counts)
    }
}

/// Analyze any buffered text source.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Returns the 1-based line
/// number with the I/O error when a line cannot be read; lines that are not
/// valid UTF-8 fail with `ErrorKind::InvalidData`.
pub fn analyze_reader<R: BufRead>(mut reader: R) -> Result<MetricsSnapshot, (usize, io::Error)> {
    let mut counter = LogCounter::new();
    let mut buf = Vec::with_capacity(256);

    loop {
        buf.clear();
        let next_line = counter.lines_seen() as usize + 1;
        if reader.read_until(b'\n', &mut buf).map_err(|e| (next_line, e))? == 0 {
            break;
        }

        let body = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let body = body.strip_suffix(b"\r").unwrap_or(body);
        for segment in body.split(|&b| b == b'\r') {
            let line = std::str::from_utf8(segment).map_err(|e| {
                (
                    counter.lines_seen() as usize + 1,
                    io::Error::new(io::ErrorKind::InvalidData, e),
                )
            })?;
            counter.observe_line(line);
        }
    }

    Ok(counter.finish())
}

/// Analyze a single log file
pub fn analyze_log_file(path: &Path) -> Result<MetricsSnapshot, AnalysisError> {
    log::info!("Analyzing: {}", path.display());

    let file = File::open(path).map_err(|source| AnalysisError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::with_capacity(64 * 1024, file);

    let metrics = analyze_reader(reader).map_err(|(line, source)| {
        let path = path.to_path_buf();
        if source.kind() == io::ErrorKind::InvalidData {
            AnalysisError::Decode { path, line, source }
        } else {
            // Directories open fine and only fail here
            AnalysisError::Read { path, source }
        }
    })?;

    log::debug!(
        "{}: {} sent, {} received, {} DAOs blocked",
        path.display(),
        metrics.data_sent,
        metrics.data_received,
        metrics.dao_blocked
    );

    Ok(metrics)
}

/// Analyze several log files in parallel.
///
/// Each file gets its own counters. Results keep the input order and the
/// first failure (in input order) is returned.
pub fn analyze_log_files(paths: &[PathBuf]) -> Result<Vec<AnalyzedLog>, AnalysisError> {
    log::info!("Analyzing {} log files in parallel...", paths.len());

    let results: Vec<Result<AnalyzedLog, AnalysisError>> = paths
        .par_iter()
        .map(|path| {
            analyze_log_file(path).map(|metrics| AnalyzedLog {
                path: path.clone(),
                metrics,
            })
        })
        .collect();

    results.into_iter().collect()
}
