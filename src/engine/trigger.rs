//! Trigger scanning (line pre-classification).
//!
//! Before any pattern runs, a line is scanned once for coarse signals:
//!
//! - **Traits** (`LineTraits`): which structural characters occur anywhere in
//!   the line (quotes, `#`, `=`, `.`).
//! - **Head**: the line with leading whitespace removed, used to check the
//!   keyword a rule must start with.
//!
//! Both are over-approximations. A rule that passes the scan still has to
//! match its full pattern.
//!
//! Leading whitespace is the ASCII class the rule patterns spell as
//! `(?-u:\s)`, so a `^(?-u:\s)*kw` pattern can only match when the head
//! starts with `kw`. Other Unicode spaces stay part of the head.

use super::compiled_rules::LineTraits;

/// Characters matched by `(?-u:\s)`.
const ASCII_SPACE: &[char] = &[' ', '\t', '\n', '\u{0b}', '\u{0c}', '\r'];

#[derive(Debug, Clone, Copy)]
pub struct LineTrigger<'a> {
    pub traits: LineTraits,
    pub head: &'a str,
}

impl<'a> LineTrigger<'a> {
    pub fn scan(line: &'a str) -> Self {
        let mut traits = LineTraits::empty();

        for c in line.chars() {
            match c {
                '\'' | '"' => traits |= LineTraits::HAS_QUOTE,
                '#' => traits |= LineTraits::HAS_HASH,
                '=' => traits |= LineTraits::HAS_EQUALS,
                '.' => traits |= LineTraits::HAS_DOT,
                _ => {}
            }
        }

        LineTrigger { traits, head: line.trim_start_matches(ASCII_SPACE) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_every_trait() {
        let trigger = LineTrigger::scan(r##"x = "#{a.b}""##);
        assert!(trigger.traits.contains(LineTraits::all()));
    }

    #[test]
    fn plain_line_has_no_traits() {
        let trigger = LineTrigger::scan("    else");
        assert!(trigger.traits.is_empty());
        assert_eq!(trigger.head, "else");
    }

    #[test]
    fn head_trims_ascii_whitespace_only() {
        assert_eq!(LineTrigger::scan(" \t\u{0b}\u{0c}end").head, "end");
        assert_eq!(LineTrigger::scan("\t\u{3000}end").head, "\u{3000}end");
        assert_eq!(LineTrigger::scan("\u{a0}puts x").head, "\u{a0}puts x");
    }
}
