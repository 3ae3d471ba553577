use rb2py::{DiagnosticMode, LineRecord, TranslationDetails};
use std::io::{self, Write};

pub mod ansi {
    const RESET: &str = "\x1b[0m";

    /// What a painted span stands for in the report.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Style {
        DebugTag,
        VerboseTag,
        Section,
        Label,
        LineCount,
        Manual,
        AllTranslated,
        Gating,
        RuleName,
        HitCount,
        Elapsed,
    }

    impl Style {
        fn code(self) -> &'static str {
            match self {
                Style::DebugTag | Style::Manual | Style::HitCount => "\x1b[33m",
                Style::VerboseTag | Style::RuleName => "\x1b[34m",
                Style::AllTranslated | Style::Elapsed => "\x1b[32m",
                Style::Gating => "\x1b[36m",
                Style::Section => "\x1b[90m",
                Style::Label => "\x1b[2m",
                Style::LineCount => "\x1b[1m",
            }
        }
    }

    #[derive(Debug, Clone, Copy)]
    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, text: impl AsRef<str>, style: Style) -> String {
            let text = text.as_ref();
            if self.enabled { format!("{}{text}{RESET}", style.code()) } else { text.to_string() }
        }
    }
}

use ansi::{Palette, Style};

/// Print every line record followed by a run summary.
pub fn print_run(
    out: &mut impl Write,
    details: &TranslationDetails,
    mode: DiagnosticMode,
    palette: &Palette,
) -> io::Result<()> {
    for record in &details.records {
        writeln!(out, "{}", fmt_record(record, mode, palette))?;
    }

    writeln!(out, "\n{}", palette.paint("━━━ Summary ━━━", Style::Section))?;
    print_summary(out, details, palette)?;

    writeln!(out, "\n{}", palette.paint("━━━ Rules ━━━", Style::Section))?;
    print_rule_hits(out, details, palette)?;

    writeln!(out, "\n{}", palette.paint("━━━ Timing ━━━", Style::Section))?;
    writeln!(out, "  Total: {}", palette.paint(format!("{:?}", details.total), Style::Elapsed))?;
    writeln!(out)
}

fn fmt_record(record: &LineRecord, mode: DiagnosticMode, palette: &Palette) -> String {
    let line = record.render(mode);
    let tag_style = match mode {
        DiagnosticMode::Debug => Style::DebugTag,
        DiagnosticMode::Verbose => Style::VerboseTag,
    };

    match line.split_once(' ') {
        Some((tag, rest)) => format!("{} {}", palette.paint(tag, tag_style), rest),
        None => line,
    }
}

fn print_summary(out: &mut impl Write, details: &TranslationDetails, palette: &Palette) -> io::Result<()> {
    let lines: usize = details.rule_hits.iter().map(|h| h.count).sum();
    let manual = if details.manual > 0 {
        palette.paint(format!("{} need manual translation", details.manual), Style::Manual)
    } else {
        palette.paint("0 need manual translation", Style::AllTranslated)
    };

    writeln!(out, "  {} {}  │  {}", palette.paint(lines.to_string(), Style::LineCount), palette.paint("lines", Style::Label), manual)?;
    writeln!(
        out,
        "  {} {}  {} {}",
        palette.paint("patterns tried:", Style::Label),
        palette.paint(details.rules_tried.to_string(), Style::Gating),
        palette.paint("skipped by trigger:", Style::Label),
        palette.paint(details.rules_skipped.to_string(), Style::Gating)
    )
}

fn print_rule_hits(out: &mut impl Write, details: &TranslationDetails, palette: &Palette) -> io::Result<()> {
    let fired: Vec<_> = details.rule_hits.iter().filter(|h| h.count > 0).collect();
    if fired.is_empty() {
        return writeln!(out, "  {}", palette.paint("No lines translated", Style::Label));
    }

    let width = fired.iter().map(|h| h.rule.len()).max().unwrap_or(0);
    for hit in fired {
        writeln!(
            out,
            "  {}  {}",
            palette.paint(format!("{:<width$}", hit.rule), Style::RuleName),
            palette.paint(hit.count.to_string(), Style::HitCount)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rb2py::{Options, translate_verbose_with};

    fn report(source: &str, options: Options, color: bool) -> String {
        let res = translate_verbose_with(source, &options);
        let mode = res.details.mode.unwrap_or(DiagnosticMode::Verbose);
        let mut out = Vec::new();
        print_run(&mut out, &res.details, mode, &Palette::new(color)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_report_lists_records_and_summary() {
        let text = report("if ok\nfoo.bar()\nend", Options { verbose: true, debug: false }, false);

        assert!(text.starts_with("[VERBOSE] Converted: if ok ➔ if ok:\n"), "{text}");
        assert!(text.contains("3 lines  │  1 need manual translation"), "{text}");
        assert!(text.contains("manual translation  1"), "{text}");
        assert!(!text.contains('\x1b'), "{text}");
    }

    #[test]
    fn clean_run_reports_nothing_manual() {
        let text = report("end", Options { verbose: false, debug: true }, false);
        assert!(text.starts_with(r#"[DEBUG] Line 1: "end" -> """#), "{text}");
        assert!(text.contains("0 need manual translation"), "{text}");
    }

    #[test]
    fn colored_report_paints_the_tag_only() {
        let text = report("end", Options { verbose: false, debug: true }, true);
        assert!(text.starts_with("\x1b[33m[DEBUG]\x1b[0m Line 1:"), "{text}");
    }

    #[test]
    fn disabled_palette_is_identity() {
        let palette = Palette::new(false);
        assert_eq!(palette.paint("x", Style::Section), "x");
        assert_eq!(Palette::new(true).paint("x", Style::Section), "\x1b[90mx\x1b[0m");
    }
}
