//! Line predicates for Cooja log lines.
//!
//! Each predicate is a plain substring test on a single line. The table is
//! ordered and every entry is evaluated for every line, so one line may bump
//! several counters.

use super::types::Counter;

/// A keyword test paired with the counter it increments
#[derive(Debug, Clone, Copy)]
pub struct LinePredicate {
    pub counter: Counter,
    /// Short human-readable description of what the predicate looks for
    pub description: &'static str,
    matcher: fn(&str) -> bool,
}

impl LinePredicate {
    pub const fn new(counter: Counter, description: &'static str, matcher: fn(&str) -> bool) -> Self {
        Self {
            counter,
            description,
            matcher,
        }
    }

    pub fn matches(&self, line: &str) -> bool {
        (self.matcher)(line)
    }
}

/// Client transmit lines: "DATA_TX: Sending packet #N to root"
pub fn is_data_sent(line: &str) -> bool {
    line.contains("DATA_TX:") || line.contains("Sending packet")
}

/// Root receive lines: "DATA: Received at time" / "RX [N]: received"
pub fn is_data_received(line: &str) -> bool {
    line.contains("DATA: Received") || line.contains("RX [")
}

/// RPL transmit lines that mention a DAO. "DAO" is matched in upper case only.
pub fn is_dao_sent(line: &str) -> bool {
    line.contains("packet sent to") && line.contains("DAO")
}

/// Mitigation drops, exact "Blocked DAO" or "blocked" in any case
pub fn is_dao_blocked(line: &str) -> bool {
    line.contains("Blocked DAO") || line.to_lowercase().contains("blocked")
}

pub fn is_blacklisted(line: &str) -> bool {
    line.contains("BLACKLISTED")
}

pub fn is_attack_report(line: &str) -> bool {
    line.contains("Attack count")
}

/// The predicate table, in evaluation order
pub static PREDICATES: [LinePredicate; 6] = [
    LinePredicate::new(Counter::DataSent, "DATA_TX: | Sending packet", is_data_sent),
    LinePredicate::new(Counter::DataReceived, "DATA: Received | RX [", is_data_received),
    LinePredicate::new(Counter::DaoSent, "packet sent to + DAO", is_dao_sent),
    LinePredicate::new(Counter::DaoBlocked, "Blocked DAO | blocked (any case)", is_dao_blocked),
    LinePredicate::new(Counter::NodesBlacklisted, "BLACKLISTED", is_blacklisted),
    LinePredicate::new(Counter::AttackCount, "Attack count", is_attack_report),
];

/// Counters whose predicate matches the given line, in table order
pub fn matching_counters(line: &str) -> Vec<Counter> {
    PREDICATES
        .iter()
        .filter(|p| p.matches(line))
        .map(|p| p.counter)
        .collect()
}
