//! Boolean operator rewriting for conditions.

/// Rewrite Ruby's symbolic boolean operators as Python keywords.
///
/// The replacements are plain substring substitutions applied in order
/// (`&&`, then `||`, then `!`). They know nothing about string literals or
/// other operators, so `a != b` becomes `a not = b` and a literal `"&&"` is
/// rewritten too.
///
/// ```
/// assert_eq!(rb2py::translate_condition("a && !b"), "a and not b");
/// ```
pub fn translate_condition(text: &str) -> String {
    text.replace("&&", "and").replace("||", "or").replace('!', "not ")
}
