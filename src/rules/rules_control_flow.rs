//! Conditionals.

use crate::Rule;
use crate::rules::condition::translate_condition;

pub fn rule_if() -> Rule {
    rule! {
        name: "if",
        pattern: r"^(?-u:\s)*if(?-u:\s)+(?P<cond>.+)",
        leading: ["if"],
        prod: |m| {
            format!("if {}:", translate_condition(m.text("cond")))
        }
    }
}

/// `unless x` -> `if not x:`
pub fn rule_unless() -> Rule {
    rule! {
        name: "unless",
        pattern: r"^(?-u:\s)*unless(?-u:\s)+(?P<cond>.+)",
        leading: ["unless"],
        prod: |m| {
            format!("if not {}:", translate_condition(m.text("cond")))
        }
    }
}

pub fn rule_elsif() -> Rule {
    rule! {
        name: "elsif",
        pattern: r"^(?-u:\s)*elsif(?-u:\s)+(?P<cond>.+)",
        leading: ["elsif"],
        prod: |m| {
            format!("elif {}:", translate_condition(m.text("cond")))
        }
    }
}

pub fn rule_else() -> Rule {
    rule! {
        name: "else",
        pattern: r"^(?-u:\s)*else(?-u:\s)*$",
        leading: ["else"],
        prod: |_m| {
            "else:".to_string()
        }
    }
}
