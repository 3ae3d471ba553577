//! Line dispatch.
//!
//! This module is the operational core of the engine:
//!
//! - Split a document into `SourceLine`s.
//! - For each line, walk the compiled rule table in priority order, skipping
//!   rules the line's triggers rule out (see `compiled_rules.rs` and
//!   `trigger.rs`), and let the first matching rule render the output.
//! - Fold the outputs into one ordered `Vec<String>` and tally metrics.
//!
//! ## Pass structure
//!
//! ```text
//! document ── lines() ──▶ SourceLine (strip trailing whitespace)
//!                              │
//!                              ▼
//!                   LineTrigger::scan (traits + head)
//!                              │
//!                              ▼
//!        rule 0 .. rule N: admits? ──▶ pattern.captures? ──▶ production
//!                              │                (first hit wins)
//!                              ▼
//!                     one output entry per line
//! ```
//!
//! Every line produces exactly one entry, even when it is empty (`end`) or
//! holds two physical lines (constant conversion), so the output always has
//! as many entries as the input has lines.
//!
//! ## Logging
//!
//! Rule skips and attempts are logged at `trace`, per-line results and the
//! run summary at `debug`.

use super::compiled_rules::{CompiledRules, RuleId};
use super::metrics::{LineTrace, RunMetrics, RunResult};
use super::trigger::LineTrigger;
use crate::rules::helpers::manual_translation;
use crate::{Rule, SourceLine};
use std::time::Instant;
use tracing::{debug, trace};

/// The translation of a single line and the rule that produced it.
#[derive(Debug, Clone)]
pub struct LineOutcome {
    /// `None` only when the table has no catch-all and nothing matched.
    pub rule: Option<RuleId>,
    pub output: String,
    pub rules_tried: usize,
    pub rules_skipped: usize,
}

/// Translator applies an ordered rule table to lines of text.
///
/// Usage: create with `Translator::new(&rules)` then call `run(text, ..)` for
/// a document or `translate_line(line)` for a single line. A translator holds
/// no per-run state, so one instance can serve any number of documents.
#[derive(Debug)]
pub struct Translator<'a> {
    compiled: CompiledRules<'a>,
}

impl<'a> Translator<'a> {
    pub fn new_compiled(compiled: CompiledRules<'a>) -> Self {
        if compiled.fallback().is_none() {
            debug!(rules = compiled.len(), "rule table has no catch-all; unmatched lines use the manual marker");
        }
        Translator { compiled }
    }

    pub fn new(rules: &'a [Rule]) -> Self {
        Self::new_compiled(CompiledRules::new(rules))
    }

    /// Rule names in priority order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.compiled.rules.iter().map(|r| r.name).collect()
    }

    pub fn rule_name(&self, id: RuleId) -> &'static str {
        self.compiled.rules[id].name
    }

    /// Translate one line. Trailing whitespace is removed first.
    pub fn translate_line(&self, line: &str) -> LineOutcome {
        self.dispatch(&SourceLine::new(1, line))
    }

    /// Find the first rule that admits and matches the line.
    ///
    /// ```text
    /// "MAX = 5"  traits={EQUALS} head="MAX = 5"
    ///   require   skip (no quote)
    ///   ...
    ///   constant  admits -> match -> "# Constant converted ...\nmax = 5"
    ///   assignment (never reached)
    /// ```
    fn dispatch(&self, line: &SourceLine<'_>) -> LineOutcome {
        let trigger = LineTrigger::scan(line.text);
        let mut rules_tried = 0;
        let mut rules_skipped = 0;

        for (id, (rule, meta)) in self.compiled.rules.iter().zip(&self.compiled.metas).enumerate() {
            if !meta.admits(&trigger) {
                rules_skipped += 1;
                trace!(line = line.number, rule = rule.name, "rule skipped by trigger");
                continue;
            }

            rules_tried += 1;
            trace!(line = line.number, rule = rule.name, "trying rule");
            if let Some(output) = rule.apply(line.text) {
                return LineOutcome { rule: Some(id), output, rules_tried, rules_skipped };
            }
        }

        LineOutcome { rule: None, output: manual_translation(line.text), rules_tried, rules_skipped }
    }

    /// Translate a whole document, one output entry per input line.
    ///
    /// With `trace_lines` set, a `LineTrace` is kept for every line. The
    /// returned lines are the same either way.
    pub fn run(&self, text: &str, trace_lines: bool) -> RunResult {
        let start = Instant::now();
        let fallback = self.compiled.fallback();
        let mut metrics = RunMetrics { rule_hits: vec![0; self.compiled.len()], ..RunMetrics::default() };
        let mut lines = Vec::new();
        let mut traces = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = SourceLine::new(idx + 1, raw);
            let outcome = self.dispatch(&line);

            metrics.rules_tried += outcome.rules_tried;
            metrics.rules_skipped += outcome.rules_skipped;
            match outcome.rule {
                Some(id) => {
                    metrics.rule_hits[id] += 1;
                    if Some(id) == fallback {
                        metrics.manual += 1;
                    }
                }
                None => metrics.manual += 1,
            }

            let rule = outcome.rule.map(|id| self.rule_name(id)).unwrap_or("<none>");
            debug!(
                line = line.number,
                rule,
                raw = line.raw,
                converted = outcome.output.as_str(),
                "translated line"
            );

            if trace_lines {
                traces.push(LineTrace {
                    number: line.number,
                    source: line.text.to_string(),
                    converted: outcome.output.clone(),
                    rule,
                });
            }
            lines.push(outcome.output);
        }

        metrics.lines = lines.len();
        metrics.total = start.elapsed();
        debug!(lines = metrics.lines, manual = metrics.manual, elapsed = ?metrics.total, "translation finished");

        RunResult { lines, traces, metrics }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Dispatch without trigger gating: every pattern in table order.
    fn dispatch_ungated(rules: &[Rule], line: &str) -> String {
        let text = crate::strip_trailing(line);
        rules.iter().find_map(|rule| rule.apply(text)).unwrap_or_else(|| manual_translation(text))
    }

    const CORPUS: &[&str] = &[
        "require 'json/parser'",
        "require \"net/http\"",
        "require json",
        "require_relative 'helper'",
        "# comment",
        "   # indented comment",
        "x = 1 # trailing comment",
        "def save!",
        "def name=(value)",
        "def self.build",
        "end",
        "  end  ",
        "endless = true",
        "if a && !b",
        "if",
        "unless done?",
        "elsif x || y",
        "else",
        "else if",
        "begin",
        "rescue",
        "rescue IOError => e",
        "rescue => e",
        "rescuer = 1",
        "ensure",
        "FileUtils.mkdir_p(dir)",
        "File.read(path)",
        "File.exist?(path) && puts 'ok'",
        "Filer.x",
        "MAX_SIZE = 10",
        "MAX == 5",
        "Max = 5",
        "MAX2 = 5",
        "name = \"Hi #{who}\"",
        "count += 1",
        "puts \"Value: #{x}\"",
        "print 'x'",
        "puts",
        "warn \"oops #{e}\"",
        "exit",
        "exit(2)",
        "exit 1",
        "exiting",
        "foo.bar()",
        "",
        "   ",
        "\u{3000}end",
        "\u{a0}puts x",
        "if\u{3000}x",
        "\u{0b}\u{0c}else",
        "[1, 2].each do |i|",
    ];

    #[test]
    fn gating_never_changes_the_result() {
        let rules = crate::rules::get();
        let translator = Translator::new(&rules);

        for line in CORPUS {
            assert_eq!(
                translator.translate_line(line).output,
                dispatch_ungated(&rules, line),
                "gated and ungated dispatch disagree on {line:?}"
            );
        }
    }

    #[test]
    fn gating_skips_rules() {
        let rules = crate::rules::get();
        let translator = Translator::new(&rules);

        let outcome = translator.translate_line("foo.bar()");
        assert_eq!(outcome.rule, Some(rules.len() - 1));
        assert!(outcome.rules_skipped > 0);
        assert_eq!(outcome.rules_tried + outcome.rules_skipped, rules.len());
    }

    #[test]
    fn run_keeps_one_entry_per_line() {
        let rules = crate::rules::get();
        let translator = Translator::new(&rules);

        let run = translator.run("MAX = 1\nend\n\nfoo.bar()\n", false);
        assert_eq!(
            run.lines,
            vec![
                "# Constant converted to variable:\nmax = 1",
                "",
                "# TODO: Manual translation needed: ",
                "# TODO: Manual translation needed: foo.bar()",
            ]
        );
        assert_eq!(run.metrics.lines, 4);
        assert_eq!(run.metrics.manual, 2);
        assert!(run.traces.is_empty());
    }

    #[test]
    fn run_traces_lines_when_asked() {
        let rules = crate::rules::get();
        let translator = Translator::new(&rules);

        let run = translator.run("else  \nputs x", true);
        assert_eq!(run.traces.len(), 2);
        assert_eq!(run.traces[0].number, 1);
        assert_eq!(run.traces[0].source, "else");
        assert_eq!(run.traces[0].rule, "else");
        assert_eq!(run.traces[1].converted, "print(x)");
        assert_eq!(run.metrics.rule_hits.iter().sum::<usize>(), 2);
    }

    #[test]
    fn table_without_catch_all_still_marks_lines() {
        let rules = vec![crate::rules::get().remove(0)];
        let translator = Translator::new(&rules);

        let outcome = translator.translate_line("puts x");
        assert_eq!(outcome.rule, None);
        assert_eq!(outcome.output, "# TODO: Manual translation needed: puts x");
    }
}
