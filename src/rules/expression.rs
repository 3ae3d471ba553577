//! String interpolation to f-string conversion.

use regex::Captures;

/// Turn an interpolated Ruby string into a Python f-string.
///
/// When `text` contains at least one `#{...}` marker, every marker becomes
/// `{...}`, every double quote is removed and the result is wrapped in
/// `f"..."`. Anything else is returned untouched.
///
/// Quote removal is unconditional: quotes that belong to the expression
/// (not just the outer delimiters) are dropped as well.
///
/// ```
/// assert_eq!(rb2py::translate_expression(r#""Value: #{x}""#), r#"f"Value: {x}""#);
/// assert_eq!(rb2py::translate_expression("a + b"), "a + b");
/// ```
pub fn translate_expression(text: &str) -> String {
    let marker = regex!(r"#\{(?P<inner>.+?)\}");
    if !marker.is_match(text) {
        return text.to_string();
    }

    let placeholders = marker.replace_all(text, |caps: &Captures<'_>| format!("{{{}}}", &caps["inner"]));
    format!("f\"{}\"", placeholders.replace('"', ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_single_marker() {
        assert_eq!(translate_expression(r#""Hello #{name}""#), r#"f"Hello {name}""#);
    }

    #[test]
    fn converts_every_marker() {
        assert_eq!(translate_expression(r##""#{a} and #{b.size}""##), r#"f"{a} and {b.size}""#);
    }

    #[test]
    fn passes_through_without_marker() {
        assert_eq!(translate_expression(r#""plain""#), r#""plain""#);
        assert_eq!(translate_expression("count + 1"), "count + 1");
        assert_eq!(translate_expression("#{}"), "#{}");
    }

    #[test]
    fn strips_inner_quotes_too() {
        assert_eq!(translate_expression(r#""Hi #{h["k"]}""#), r#"f"Hi {h[k]}""#);
    }

    #[test]
    fn single_quoted_strings_are_treated_alike() {
        assert_eq!(translate_expression("'x #{y}'"), "f\"'x {y}'\"");
    }

    #[test]
    fn marker_ends_at_first_closing_brace() {
        assert_eq!(translate_expression(r##""#{h.map { |x| x }}""##), r#"f"{h.map { |x| x }}""#);
    }
}
