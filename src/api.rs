use crate::Rule;
use crate::engine::{LineTrace, RunMetrics, Translator};
use once_cell::sync::Lazy;
use std::time::Duration;
use tracing::info;

static DEFAULT_RULES: Lazy<Vec<Rule>> = Lazy::new(crate::rules::get);
static DEFAULT_TRANSLATOR: Lazy<Translator<'static>> = Lazy::new(|| Translator::new(&DEFAULT_RULES));

/// Conversion options.
///
/// The flags only control diagnostics; they never change the translated text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Report each line as a readable `source ➔ converted` pair.
    pub verbose: bool,
    /// Report each line with escaped, quoted source and output. Takes
    /// precedence over `verbose`.
    pub debug: bool,
}

impl Options {
    /// The diagnostic mode these options select, if any.
    pub fn mode(&self) -> Option<DiagnosticMode> {
        if self.debug {
            Some(DiagnosticMode::Debug)
        } else if self.verbose {
            Some(DiagnosticMode::Verbose)
        } else {
            None
        }
    }
}

/// How per-line diagnostic records are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticMode {
    Verbose,
    Debug,
}

/// One line's diagnostic record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    /// 1-based line number.
    pub number: usize,
    /// The source line with trailing whitespace removed.
    pub source: String,
    pub converted: String,
    /// Name of the rule that produced `converted`.
    pub rule: String,
}

impl LineRecord {
    /// Render the record as a single diagnostic line.
    ///
    /// Debug mode quotes both sides with Rust string escaping: quotes and
    /// control characters are escaped, `#{` is left as is.
    ///
    /// ```
    /// use rb2py::{DiagnosticMode, LineRecord};
    ///
    /// let record = LineRecord {
    ///     number: 3,
    ///     source: "  else".into(),
    ///     converted: "else:".into(),
    ///     rule: "else".into(),
    /// };
    /// assert_eq!(record.render(DiagnosticMode::Debug), r#"[DEBUG] Line 3: "  else" -> "else:""#);
    /// assert_eq!(record.render(DiagnosticMode::Verbose), "[VERBOSE] Converted: else ➔ else:");
    /// ```
    pub fn render(&self, mode: DiagnosticMode) -> String {
        match mode {
            DiagnosticMode::Debug => format!("[DEBUG] Line {}: {:?} -> {:?}", self.number, self.source, self.converted),
            DiagnosticMode::Verbose => {
                format!("[VERBOSE] Converted: {} ➔ {}", self.source.trim(), self.converted.trim())
            }
        }
    }
}

/// Result from [`translate_with`].
#[derive(Debug, Clone)]
pub struct TranslationResult {
    /// One entry per input line. An entry may be empty or contain a newline.
    pub lines: Vec<String>,
    pub elapsed: Duration,
}

impl TranslationResult {
    /// The translated document: entries joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// How often one rule fired during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
    pub rule: String,
    pub count: usize,
}

/// Additional details returned by [`translate_verbose_with`].
#[derive(Debug, Clone)]
pub struct TranslationDetails {
    /// Total elapsed time.
    pub total: Duration,
    /// The diagnostic mode that was active.
    pub mode: Option<DiagnosticMode>,
    /// Per-line records; empty when no diagnostic mode is enabled.
    pub records: Vec<LineRecord>,
    /// Every rule in priority order with its match count.
    pub rule_hits: Vec<RuleHit>,
    /// Lines left for manual translation.
    pub manual: usize,
    /// Patterns run / rules skipped by trigger gating, summed over all lines.
    pub rules_tried: usize,
    pub rules_skipped: usize,
}

/// Result from [`translate_verbose_with`].
#[derive(Debug, Clone)]
pub struct TranslationResultVerbose {
    pub lines: Vec<String>,
    pub elapsed: Duration,
    pub details: TranslationDetails,
}

impl TranslationResultVerbose {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Translate a Ruby document with the default rule table.
///
/// Always succeeds. Lines no rule recognises come back as
/// `# TODO: Manual translation needed: <line>`.
///
/// # Example
/// ```
/// let out = rb2py::translate("MAX = 5\nputs \"Value: #{x}\"");
/// assert_eq!(out, "# Constant converted to variable:\nmax = 5\nprint(f\"Value: {x}\")");
/// ```
pub fn translate(text: &str) -> String {
    DEFAULT_TRANSLATOR.run(text, false).lines.join("\n")
}

/// Translate `text` with `options`.
///
/// With a diagnostic mode enabled, one rendered record per line is emitted
/// as an `info` event on the `rb2py::diagnostics` target. The translation is
/// the same with or without it.
pub fn translate_with(text: &str, options: &Options) -> TranslationResult {
    let mode = options.mode();
    let run = DEFAULT_TRANSLATOR.run(text, mode.is_some());

    if let Some(mode) = mode {
        for trace in &run.traces {
            info!(target: "rb2py::diagnostics", "{}", trace_to_record(trace).render(mode));
        }
    }

    TranslationResult { lines: run.lines, elapsed: run.metrics.total }
}

/// Translate `text` and return per-line records and rule statistics.
///
/// Records are only collected when `options` selects a diagnostic mode; the
/// statistics are always filled in.
pub fn translate_verbose_with(text: &str, options: &Options) -> TranslationResultVerbose {
    let mode = options.mode();
    let run = DEFAULT_TRANSLATOR.run(text, mode.is_some());

    let details = TranslationDetails {
        total: run.metrics.total,
        mode,
        records: run.traces.iter().map(trace_to_record).collect(),
        rule_hits: rule_hits(&DEFAULT_TRANSLATOR, &run.metrics),
        manual: run.metrics.manual,
        rules_tried: run.metrics.rules_tried,
        rules_skipped: run.metrics.rules_skipped,
    };

    TranslationResultVerbose { lines: run.lines, elapsed: run.metrics.total, details }
}

/// Translate a single line. Trailing whitespace is ignored.
///
/// ```
/// assert_eq!(rb2py::translate_line("unless done"), "if not done:");
/// ```
pub fn translate_line(line: &str) -> String {
    DEFAULT_TRANSLATOR.translate_line(line).output
}

fn trace_to_record(trace: &LineTrace) -> LineRecord {
    LineRecord {
        number: trace.number,
        source: trace.source.clone(),
        converted: trace.converted.clone(),
        rule: trace.rule.to_string(),
    }
}

fn rule_hits(translator: &Translator<'_>, metrics: &RunMetrics) -> Vec<RuleHit> {
    translator
        .rule_names()
        .into_iter()
        .zip(&metrics.rule_hits)
        .map(|(rule, &count)| RuleHit { rule: rule.to_string(), count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
require 'fileutils'
# Copies a file
def copy!(src, dst)
  if File.exist?(src) && !force
    FileUtils.cp(src, dst)
  end
rescue IOError => e
  warn \"copy failed: #{e}\"
  exit(1)
end
";

    #[test]
    fn line_count_is_preserved() {
        let inputs = ["", "x", "x\n", "a\nb", "a\n\nb\n", "end\nend\nend", "MAX = 1\nMIN = 2"];
        for input in inputs {
            let result = translate_with(input, &Options::default());
            assert_eq!(result.lines.len(), input.lines().count(), "input {input:?}");
        }
    }

    #[test]
    fn translation_is_deterministic() {
        assert_eq!(translate(SAMPLE), translate(SAMPLE));
    }

    #[test]
    fn empty_document_is_empty() {
        assert_eq!(translate(""), "");
        assert!(translate_with("", &Options::default()).lines.is_empty());
    }

    #[test]
    fn translates_sample_document() {
        let expected = "\
import fileutils
# Copies a file
def copy():
if File.exist?(src) and not force:
# TODO: Translate FileUtils.cp(src, dst)

except IOError:
print(f\"copy failed: {e}\", file=sys.stderr)
sys.exit(1)
";
        assert_eq!(translate(SAMPLE), expected);
    }

    #[test]
    fn crlf_lines_are_stripped() {
        assert_eq!(translate("if a\r\nelse\r\nend\r\n"), "if a:\nelse:\n");
    }

    #[test]
    fn options_do_not_change_output() {
        let plain = translate(SAMPLE);
        for options in [
            Options { verbose: true, debug: false },
            Options { verbose: false, debug: true },
            Options { verbose: true, debug: true },
        ] {
            assert_eq!(translate_with(SAMPLE, &options).text(), plain);
            assert_eq!(translate_verbose_with(SAMPLE, &options).text(), plain);
        }
    }

    #[test]
    fn debug_wins_over_verbose() {
        assert_eq!(Options::default().mode(), None);
        assert_eq!(Options { verbose: true, debug: false }.mode(), Some(DiagnosticMode::Verbose));
        assert_eq!(Options { verbose: true, debug: true }.mode(), Some(DiagnosticMode::Debug));
    }

    #[test]
    fn verbose_details_include_records_and_hits() {
        let res = translate_verbose_with("MAX = 5\nfoo.bar()\nend", &Options { verbose: true, debug: false });

        assert_eq!(res.details.mode, Some(DiagnosticMode::Verbose));
        assert_eq!(res.details.records.len(), 3);
        assert_eq!(res.details.records[0].rule, "constant assignment");
        assert_eq!(res.details.records[1].converted, "# TODO: Manual translation needed: foo.bar()");
        assert_eq!(res.details.records[2].number, 3);
        assert_eq!(res.details.manual, 1);
        assert_eq!(res.elapsed, res.details.total);

        let hits: usize = res.details.rule_hits.iter().map(|h| h.count).sum();
        assert_eq!(hits, 3);
        assert_eq!(res.details.rule_hits.first().map(|h| h.rule.as_str()), Some("require"));
        assert_eq!(res.details.rule_hits.last().map(|h| h.rule.as_str()), Some("manual translation"));
    }

    #[test]
    fn records_are_skipped_without_a_mode() {
        let res = translate_verbose_with("end", &Options::default());
        assert!(res.details.records.is_empty());
        assert_eq!(res.details.rule_hits.iter().map(|h| h.count).sum::<usize>(), 1);
    }

    #[test]
    fn render_shows_escaped_output_in_debug_mode() {
        let record = LineRecord {
            number: 1,
            source: "MAX = 5".into(),
            converted: "# Constant converted to variable:\nmax = 5".into(),
            rule: "constant assignment".into(),
        };
        assert_eq!(
            record.render(DiagnosticMode::Debug),
            r##"[DEBUG] Line 1: "MAX = 5" -> "# Constant converted to variable:\nmax = 5""##
        );
    }

    #[test]
    fn debug_render_keeps_interpolation_markers_unescaped() {
        let res = translate_verbose_with("x = 1\nputs \"Hi #{name}\"", &Options { verbose: false, debug: true });
        assert_eq!(
            res.details.records[1].render(DiagnosticMode::Debug),
            r##"[DEBUG] Line 2: "puts \"Hi #{name}\"" -> "print(f\"Hi {name}\")""##
        );
    }
}
