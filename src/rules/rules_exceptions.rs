//! `begin` / `rescue` / `ensure`.
//!
//! Only the clause headers are rewritten. `ensure` has no line-local Python
//! equivalent that would keep the block valid, so it becomes a note for the
//! reader instead of a `finally:`.

use crate::Rule;

pub fn rule_begin() -> Rule {
    rule! {
        name: "begin",
        pattern: r"^(?-u:\s)*begin(?-u:\s)*$",
        leading: ["begin"],
        prod: |_m| {
            "try:".to_string()
        }
    }
}

/// `rescue IOError => e` -> `except IOError:`; a bare `rescue` catches
/// `Exception`.
///
/// The class name is whatever word directly follows the keyword, spaces
/// optional, so `rescuer = 1` also lands here as `except r:`.
pub fn rule_rescue() -> Rule {
    rule! {
        name: "rescue",
        pattern: r"^(?-u:\s)*rescue(?-u:\s)*(?P<class>[A-Za-z0-9_]+)?",
        leading: ["rescue"],
        prod: |m| {
            format!("except {}:", m.get("class").unwrap_or("Exception"))
        }
    }
}

pub fn rule_ensure() -> Rule {
    rule! {
        name: "ensure",
        pattern: r"^(?-u:\s)*ensure(?-u:\s)*$",
        leading: ["ensure"],
        prod: |_m| {
            "# NOTE: Python 'finally:' equivalent".to_string()
        }
    }
}
