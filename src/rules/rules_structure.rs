//! File-level structure: imports, comments, method headers and `end`.

use crate::Rule;
use crate::engine::LineTraits;
use crate::rules::helpers::{module_path, python_method_name};

/// `require 'json/parser'` -> `import json.parser`
pub fn rule_require() -> Rule {
    rule! {
        name: "require",
        pattern: r#"^(?-u:\s)*require(?-u:\s)+['"](?P<path>.+?)['"]"#,
        leading: ["require"],
        traits: LineTraits::HAS_QUOTE.bits(),
        prod: |m| {
            format!("import {}", module_path(m.text("path")))
        }
    }
}

/// Comment lines are already valid Python.
pub fn rule_comment() -> Rule {
    rule! {
        name: "comment",
        pattern: r"^(?-u:\s)*#",
        leading: ["#"],
        traits: LineTraits::HAS_HASH.bits(),
        prod: |m| {
            m.line.to_string()
        }
    }
}

/// `def save!(force)` -> `def save():`
///
/// Parameters are not carried over.
pub fn rule_def() -> Rule {
    rule! {
        name: "def",
        pattern: r"^(?-u:\s)*def(?-u:\s)+(?P<name>[a-zA-Z_0-9!?=]+)",
        leading: ["def"],
        prod: |m| {
            format!("def {}():", python_method_name(m.text("name")))
        }
    }
}

/// Block terminators vanish; Python closes blocks by dedenting.
pub fn rule_end() -> Rule {
    rule! {
        name: "end",
        pattern: r"^(?-u:\s)*end(?-u:\s)*$",
        leading: ["end"],
        prod: |_m| {
            String::new()
        }
    }
}
