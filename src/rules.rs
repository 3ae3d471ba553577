//! The translation rule table.
//!
//! Rules are grouped by the kind of statement they rewrite, one file per
//! group (`rules_*.rs`), and stitched together by [`get`] in priority order.
//! The order is part of the contract: several patterns overlap (an all-caps
//! assignment is also a plain assignment, `require 'x'` is also a call) and
//! the earlier rule must win.
//!
//! The two helpers every group leans on live beside the rules:
//!
//! - `condition.rs`: boolean operator rewriting for `if`/`unless`/`elsif`.
//! - `expression.rs`: `#{...}` interpolation to f-string conversion.

pub mod condition;
pub mod expression;
pub(crate) mod helpers;
mod rules_assignments;
mod rules_control_flow;
mod rules_exceptions;
mod rules_fallback;
mod rules_file_ops;
mod rules_output;
mod rules_structure;


use crate::Rule;

/// The full rule table, highest priority first. The last entry matches every
/// line.
pub(crate) fn get() -> Vec<Rule> {
    vec![
        rules_structure::rule_require(),
        rules_structure::rule_comment(),
        rules_structure::rule_def(),
        rules_structure::rule_end(),
        rules_control_flow::rule_if(),
        rules_control_flow::rule_unless(),
        rules_control_flow::rule_elsif(),
        rules_control_flow::rule_else(),
        rules_exceptions::rule_begin(),
        rules_exceptions::rule_rescue(),
        rules_exceptions::rule_ensure(),
        rules_file_ops::rule_file_utils(),
        rules_file_ops::rule_file(),
        rules_assignments::rule_constant(),
        rules_assignments::rule_assignment(),
        rules_output::rule_print(),
        rules_output::rule_warn(),
        rules_output::rule_exit(),
        rules_fallback::rule_manual(),
    ]
}
