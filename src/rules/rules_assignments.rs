//! Assignments.
//!
//! ```text
//! MAX_SIZE = 10         -> # Constant converted to variable:
//!                          max_size = 10
//! greeting = "Hi #{n}"  -> greeting = f"Hi {n}"
//! ```

use crate::Rule;
use crate::engine::LineTraits;
use crate::rules::expression::translate_expression;

/// All-caps names are Ruby constants. Python has no constants, so the name
/// is lowercased and a note is left above it. The value is copied verbatim.
///
/// Must come before [`rule_assignment`], which matches the same lines.
pub fn rule_constant() -> Rule {
    rule! {
        name: "constant assignment",
        pattern: r"^(?-u:\s)*(?P<name>[A-Z_]+)(?-u:\s)*=(?-u:\s)*(?P<value>.+)",
        traits: LineTraits::HAS_EQUALS.bits(),
        prod: |m| {
            format!("# Constant converted to variable:\n{} = {}", m.text("name").to_lowercase(), m.text("value"))
        }
    }
}

pub fn rule_assignment() -> Rule {
    rule! {
        name: "assignment",
        pattern: r"^(?-u:\s)*(?P<name>[a-zA-Z_][a-zA-Z_0-9]*)(?-u:\s)*=(?-u:\s)*(?P<value>.+)",
        traits: LineTraits::HAS_EQUALS.bits(),
        prod: |m| {
            format!("{} = {}", m.text("name"), translate_expression(m.text("value")))
        }
    }
}
