//! `File` and `FileUtils` calls.
//!
//! These map onto `os`, `shutil` and `pathlib` in ways that depend on the
//! arguments, so they are flagged rather than guessed at.

use crate::Rule;
use crate::engine::LineTraits;
use crate::rules::helpers::untranslated_call;

pub fn rule_file_utils() -> Rule {
    rule! {
        name: "FileUtils call",
        pattern: r"^(?-u:\s)*FileUtils\.(?P<call>.+)",
        leading: ["FileUtils."],
        traits: LineTraits::HAS_DOT.bits(),
        prod: |m| {
            untranslated_call("FileUtils", m.text("call"))
        }
    }
}

pub fn rule_file() -> Rule {
    rule! {
        name: "File call",
        pattern: r"^(?-u:\s)*File\.(?P<call>.+)",
        leading: ["File."],
        traits: LineTraits::HAS_DOT.bits(),
        prod: |m| {
            untranslated_call("File", m.text("call"))
        }
    }
}
