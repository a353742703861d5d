//! Core data types for Cooja log analysis.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Percentage value in the range 0..=100
pub type Percent = f64;

/// The counters maintained while scanning a log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Counter {
    /// Application data packets transmitted by clients
    DataSent,
    /// Application data packets received by the root
    DataReceived,
    /// DAO control messages sent
    DaoSent,
    /// DAO messages dropped by the mitigation
    DaoBlocked,
    /// Nodes placed on the blacklist
    NodesBlacklisted,
    /// Attack events reported by the attacker
    AttackCount,
}

impl Counter {
    /// All counters, in scan order
    pub const ALL: [Counter; 6] = [
        Counter::DataSent,
        Counter::DataReceived,
        Counter::DaoSent,
        Counter::DaoBlocked,
        Counter::NodesBlacklisted,
        Counter::AttackCount,
    ];

    /// Position of this counter in [`Counter::ALL`]
    pub fn index(self) -> usize {
        match self {
            Counter::DataSent => 0,
            Counter::DataReceived => 1,
            Counter::DaoSent => 2,
            Counter::DaoBlocked => 3,
            Counter::NodesBlacklisted => 4,
            Counter::AttackCount => 5,
        }
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Counter::DataSent => "data_sent",
            Counter::DataReceived => "data_received",
            Counter::DaoSent => "dao_sent",
            Counter::DaoBlocked => "dao_blocked",
            Counter::NodesBlacklisted => "nodes_blacklisted",
            Counter::AttackCount => "attack_count",
        };
        write!(f, "{}", name)
    }
}

/// Metrics derived from one pass over one log file.
///
/// Built by [`crate::analysis::LogCounter::finish`]; the derived ratios are
/// computed once and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub data_sent: u64,
    pub data_received: u64,
    pub pdr: Percent,
    pub plr: Percent,
    pub dao_sent: u64,
    pub dao_blocked: u64,
    pub nodes_blacklisted: u64,
    pub attack_count: u64,
}

impl MetricsSnapshot {
    /// Build a snapshot from raw counter values, indexed as [`Counter::ALL`]
    pub fn from_counts(counts: [u64; 6]) -> Self {
        let data_sent = counts[Counter::DataSent.index()];
        let data_received = counts[Counter::DataReceived.index()];
        let pdr = delivery_ratio(data_sent, data_received);

        Self {
            data_sent,
            data_received,
            pdr,
            plr: 100.0 - pdr,
            dao_sent: counts[Counter::DaoSent.index()],
            dao_blocked: counts[Counter::DaoBlocked.index()],
            nodes_blacklisted: counts[Counter::NodesBlacklisted.index()],
            attack_count: counts[Counter::AttackCount.index()],
        }
    }

    /// Value of a single counter
    pub fn count(&self, counter: Counter) -> u64 {
        match counter {
            Counter::DataSent => self.data_sent,
            Counter::DataReceived => self.data_received,
            Counter::DaoSent => self.dao_sent,
            Counter::DaoBlocked => self.dao_blocked,
            Counter::NodesBlacklisted => self.nodes_blacklisted,
            Counter::AttackCount => self.attack_count,
        }
    }
}

impl fmt::Display for MetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Data sent:         {}", self.data_sent)?;
        writeln!(f, "  Data received:     {}", self.data_received)?;
        writeln!(f, "  PDR:               {:.2}%", self.pdr)?;
        writeln!(f, "  PLR:               {:.2}%", self.plr)?;
        writeln!(f, "  DAOs sent:         {}", self.dao_sent)?;
        writeln!(f, "  DAOs blocked:      {}", self.dao_blocked)?;
        writeln!(f, "  Nodes blacklisted: {}", self.nodes_blacklisted)?;
        write!(f, "  Attack events:     {}", self.attack_count)
    }
}

/// Packet delivery ratio in percent. Zero when nothing was sent.
pub fn delivery_ratio(sent: u64, received: u64) -> Percent {
    if sent > 0 {
        received as f64 / sent as f64 * 100.0
    } else {
        0.0
    }
}

/// A snapshot together with the log it was computed from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedLog {
    pub path: PathBuf,
    pub metrics: MetricsSnapshot,
}
