//! Printing and process exit.

use crate::Rule;
use crate::rules::expression::translate_expression;

/// `puts x` / `print x` -> `print(x)`
pub fn rule_print() -> Rule {
    rule! {
        name: "print",
        pattern: r"^(?-u:\s)*(?:puts|print)(?-u:\s)+(?P<expr>.+)",
        leading: ["puts", "print"],
        prod: |m| {
            format!("print({})", translate_expression(m.text("expr")))
        }
    }
}

pub fn rule_warn() -> Rule {
    rule! {
        name: "warn",
        pattern: r"^(?-u:\s)*warn(?-u:\s)+(?P<expr>.+)",
        leading: ["warn"],
        prod: |m| {
            format!("print({}, file=sys.stderr)", translate_expression(m.text("expr")))
        }
    }
}

/// `exit`, `exit3` and `exit(2)`. The code has to follow the keyword directly
/// or in parentheses; anything else (including `exit 1`) reads as 0.
pub fn rule_exit() -> Rule {
    rule! {
        name: "exit",
        pattern: r"^(?-u:\s)*exit\(?(?P<code>[0-9]*)\)?",
        leading: ["exit"],
        prod: |m| {
            let code = match m.text("code") {
                "" => "0",
                code => code,
            };
            format!("sys.exit({code})")
        }
    }
}
