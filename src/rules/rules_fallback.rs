use crate::Rule;
use crate::rules::helpers::manual_translation;

/// Catch-all. Matches any line, so it has to be the last rule in the table.
pub fn rule_manual() -> Rule {
    rule! {
        name: "manual translation",
        pattern: r"(?s)^.*$",
        prod: |m| {
            manual_translation(m.line)
        }
    }
}
