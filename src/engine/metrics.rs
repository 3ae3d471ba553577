//! Engine run metrics.
//!
//! Counters and per-line traces collected while a document is translated.
//! Per-line traces are opt-in (`Translator::run` only records them when
//! asked to) since they copy every source and output line.

use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for [`Translator::run`](super::Translator::run).
    pub total: Duration,
    /// Number of input lines.
    pub lines: usize,
    /// Lines that only the catch-all rule matched.
    pub manual: usize,
    /// Per-rule match counts, indexed by `RuleId`.
    pub rule_hits: Vec<usize>,
    /// Patterns actually run against a line.
    pub rules_tried: usize,
    /// Rules skipped by trigger gating without running their pattern.
    pub rules_skipped: usize,
}

/// What happened to one input line.
#[derive(Debug, Clone)]
pub struct LineTrace {
    /// 1-based line number.
    pub number: usize,
    /// The line as classified (trailing whitespace removed).
    pub source: String,
    pub converted: String,
    pub rule: &'static str,
}

/// Translator output bundled with metrics.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// One entry per input line, in input order.
    pub lines: Vec<String>,
    /// Per-line traces (empty unless requested).
    pub traces: Vec<LineTrace>,
    pub metrics: RunMetrics,
}
