//! Line translation engine.
//!
//! This module is the entry point for the rule-driven translator. It is split
//! into focused submodules under `src/engine/`.
//!
//! ## How the parts work together
//!
//! ```text
//! rules (ordered table) ──┐
//!                         │  CompiledRules::new        (compiled_rules.rs)
//!                         └──────────┬───────────
//!                                    │
//! line ── LineTrigger::scan ─────────┼─ skip rules the line cannot match
//!         (trigger.rs)               │
//!                                    v
//!                      Translator::dispatch (translator.rs)
//!                        - try patterns in priority order
//!                        - first match renders the line
//!                                    │
//!                                    v
//!                      RunResult { lines, traces, metrics }
//!                                    (metrics.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `compiled_rules.rs`: derives `CompiledRules` from the rule table and
//!   holds each rule's activation requirements.
//! - `trigger.rs`: scans a line for coarse traits and its keyword head.
//! - `translator.rs`: per-line dispatch and the document fold.
//! - `metrics.rs`: counters, timings and optional per-line traces.
//!
//! ## Adding new rules
//!
//! - Add the rule under `src/rules/rules_*.rs` and slot it into
//!   `rules::get()` at the right priority.
//! - Only declare `leading`/`traits` requirements the pattern cannot match
//!   without. The gating-equivalence test in `translator.rs` guards this.
//! - If a rule needs a new coarse trait, add a `LineTraits` bit and teach
//!   `LineTrigger::scan` to detect it.

#[path = "engine/compiled_rules.rs"]
mod compiled_rules;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/translator.rs"]
mod translator;
#[path = "engine/trigger.rs"]
mod trigger;

pub use compiled_rules::LineTraits;
pub(crate) use metrics::{LineTrace, RunMetrics};
pub use translator::Translator;
