/// Prefix of the catch-all output; also used to count untranslated lines.
pub const MANUAL_MARKER: &str = "# TODO: Manual translation needed: ";

/// Marker comment for a line no rule knows how to translate.
pub fn manual_translation(line: &str) -> String {
    format!("{MANUAL_MARKER}{line}")
}

/// Marker comment for a call whose Python equivalent must be written by hand.
pub fn untranslated_call(namespace: &str, call: &str) -> String {
    format!("# TODO: Translate {namespace}.{call}")
}

/// Drop the characters Ruby allows at the end of method names but Python
/// does not (`!`, `?`, `=`).
pub fn python_method_name(name: &str) -> String {
    name.chars().filter(|c| !matches!(c, '!' | '?' | '=')).collect()
}

/// `json/parser` -> `json.parser`
pub fn module_path(path: &str) -> String {
    path.replace('/', ".")
}
