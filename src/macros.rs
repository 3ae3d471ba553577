/// Compile a literal pattern once and hand out a `&'static Regex`.
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a [`Rule`](crate::Rule).
///
/// The production is written closure-style but expands to a plain `fn`, so
/// every rule in the table is a `fn` pointer and the table stays `Sync`.
///
/// ```text
/// rule! {
///     name: "else",
///     pattern: r"^\s*else\s*$",
///     leading: ["else"],
///     prod: |_m| { "else:".to_string() },
/// }
/// ```
macro_rules! rule {
    (
        name: $name:expr,
        pattern: $pat:literal
        $(, leading: [ $($lead:expr),* $(,)? ])?
        $(, traits: $traits:expr)?
        , prod: |$m:ident| $body:block
        $(,)?
    ) => {{
        #[allow(unused_variables)]
        fn production($m: &$crate::RuleMatch<'_>) -> String $body

        $crate::Rule {
            name: $name,
            pattern: regex!($pat),
            leading: &[ $($($lead),*)? ],
            traits: { 0 $(| $traits)? },
            production,
        }
    }};
}
