//! Free-text cleanup.

use std::sync::LazyLock;

use regex::Regex;

/// Anything other than an ASCII word character or whitespace.
static SPECIAL_CHARACTERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-z0-9_\s]").expect("hardcoded regex should be valid")
});

/// Strips every character that is not a letter, digit, underscore or space.
#[must_use]
pub fn remove_special_characters(value: &str) -> String {
    SPECIAL_CHARACTERS.replace_all(value, "").into_owned()
}
