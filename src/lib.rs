//! Line-by-line Ruby to Python transliteration.
//!
//! Every input line is classified against an ordered table of regex rules
//! and rewritten by the first rule that matches. Lines nothing recognises
//! fall through to a catch-all that emits a `# TODO: Manual translation
//! needed` marker, so translation never fails.
//!
//! ```
//! let out = rb2py::translate("require 'json/parser'\nif a && !b\nend");
//! assert_eq!(out, "import json.parser\nif a and not b:\n");
//! ```

use regex::{Captures, Regex};

#[macro_use]
mod macros;
mod api;
mod engine;
mod rules;

pub use api::{
    DiagnosticMode, LineRecord, Options, RuleHit, TranslationDetails, TranslationResult, TranslationResultVerbose,
    translate, translate_line, translate_verbose_with, translate_with,
};
pub use rules::condition::translate_condition;
pub use rules::expression::translate_expression;

// --- Internal types ---------------------------------------------------------

/// One line of input, numbered from 1.
///
/// `raw` is the line exactly as split from the document; `text` is the same
/// line with trailing whitespace removed and is what rules are matched
/// against.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SourceLine<'a> {
    pub number: usize,
    pub raw: &'a str,
    pub text: &'a str,
}

impl<'a> SourceLine<'a> {
    pub fn new(number: usize, raw: &'a str) -> Self {
        SourceLine { number, raw, text: strip_trailing(raw) }
    }
}

/// Trailing characters dropped before a line is classified.
const TRAILING: &[char] = &[' ', '\t', '\n', '\u{0b}', '\u{0c}', '\r', '\0'];

pub(crate) fn strip_trailing(line: &str) -> &str {
    line.trim_end_matches(TRAILING)
}

/// A successful rule match: the classified line plus its named captures.
///
/// Rules read captures by group name, so a pattern can gain or reorder groups
/// without shifting what a production sees.
#[derive(Debug)]
pub(crate) struct RuleMatch<'h> {
    pub line: &'h str,
    captures: Captures<'h>,
}

impl<'h> RuleMatch<'h> {
    pub fn new(line: &'h str, captures: Captures<'h>) -> Self {
        RuleMatch { line, captures }
    }

    /// The named group, if it participated in the match.
    pub fn get(&self, name: &str) -> Option<&'h str> {
        self.captures.name(name).map(|m| m.as_str())
    }

    /// The named group, or `""` when it did not participate.
    pub fn text(&self, name: &str) -> &'h str {
        self.get(name).unwrap_or("")
    }
}

pub(crate) type Production = fn(&RuleMatch<'_>) -> String;

/// A translation rule: a name, a line pattern, activation metadata and a
/// production that renders the Python line from the match.
///
/// Rules live in one ordered table (see `rules::get`); position in that table
/// is the rule's priority and the first matching rule wins.
pub(crate) struct Rule {
    pub name: &'static str,
    pub pattern: &'static Regex,
    /// Keywords the trimmed line must start with (any one of them). Empty
    /// means no keyword requirement.
    pub leading: &'static [&'static str],
    /// `LineTraits` bits the line must carry for the pattern to be able to
    /// match at all.
    pub traits: u32,
    pub production: Production,
}

impl Rule {
    /// Try the pattern against `line` and render the output on a match.
    pub fn apply(&self, line: &str) -> Option<String> {
        let captures = self.pattern.captures(line)?;
        Some((self.production)(&RuleMatch::new(line, captures)))
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .field("production", &"<function>")
            .field("leading", &self.leading)
            .field("traits", &self.traits)
            .finish()
    }
}
