//! Rule compilation and activation metadata.
//!
//! This module holds the *static* side of the engine: the structures derived
//! once from the rule table so that dispatching a line stays cheap.
//!
//! Translating a line is split into two phases:
//!
//! 1. **Compile rules** (this module): borrow the ordered rule table and
//!    lift each rule's activation requirements into a `RuleMeta`.
//! 2. **Dispatch** (see `translator.rs`): scan the line for coarse traits
//!    (`trigger.rs`), skip rules whose requirements the line cannot meet, and
//!    run the remaining patterns in table order until one matches.
//!
//! ## Invariants
//!
//! - `RuleId` is an index into `CompiledRules::rules` and
//!   `CompiledRules::metas`, and doubles as the rule's priority (lower wins).
//!   Those vectors must stay aligned and in table order.
//! - Activation requirements are *necessary* conditions of a rule's pattern.
//!   A requirement that a matching line could fail would silently hand the
//!   line to a lower-priority rule.

use super::trigger::LineTrigger;
use crate::Rule;

/// Rule identifier (index into the rules vector).
pub(crate) type RuleId = usize;

bitflags::bitflags! {
    /// Coarse character classes present in a line.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LineTraits: u32 {
        const HAS_QUOTE  = 1 << 0;
        const HAS_HASH   = 1 << 1;
        const HAS_EQUALS = 1 << 2;
        const HAS_DOT    = 1 << 3;
    }
}

/// Activation requirements attached to a rule.
#[derive(Clone, Copy, Debug)]
pub struct RuleMeta {
    pub leading: &'static [&'static str],
    pub traits: LineTraits,
}

impl RuleMeta {
    /// Whether a line with these triggers could possibly match the rule.
    pub fn admits(&self, trigger: &LineTrigger<'_>) -> bool {
        if !trigger.traits.contains(self.traits) {
            return false;
        }
        self.leading.is_empty() || self.leading.iter().any(|keyword| trigger.head.starts_with(keyword))
    }

    /// True for rules that are always tried.
    pub fn unconditional(&self) -> bool {
        self.leading.is_empty() && self.traits.is_empty()
    }
}

/// Pre-compiled rule set with metadata.
#[derive(Debug)]
pub struct CompiledRules<'a> {
    pub rules: Vec<&'a Rule>,
    pub metas: Vec<RuleMeta>,
}

impl<'a> CompiledRules<'a> {
    /// Create a compiled rule set from the ordered rule table.
    pub fn new(rules: &'a [Rule]) -> Self {
        let rule_refs: Vec<&Rule> = rules.iter().collect();

        let metas: Vec<RuleMeta> = rule_refs
            .iter()
            .map(|r| RuleMeta { leading: r.leading, traits: LineTraits::from_bits_truncate(r.traits) })
            .collect();

        CompiledRules { rules: rule_refs, metas }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// The catch-all rule, if the table ends with one.
    pub fn fallback(&self) -> Option<RuleId> {
        let last = self.metas.len().checked_sub(1)?;
        self.metas[last].unconditional().then_some(last)
    }
}
