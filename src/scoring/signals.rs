// Manipulation signals: cheap surface features of the text.
//
// Each signal is a single pattern check. Patterns compile once per process
// and are shared by every request.

use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// Sensational vocabulary that marks emotionally loaded content.
/// Matched case-insensitively as fragments, so "Breakingnews" and
/// "secrets" both count.
pub const EMOTIONAL_LEXICON: [&str; 7] = [
    "breaking",
    "shocking",
    "secret",
    "exclusive",
    "banned",
    "hidden",
    "urgent",
];

static EMOTIONAL_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i){}", EMOTIONAL_LEXICON.join("|")))
        .expect("emotional lexicon pattern is valid")
});

static ALL_CAPS_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[A-Z]{4,}").expect("all-caps pattern is valid"));

/// Signals detected in one piece of content. Recomputed for every request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSet {
    /// Any word from `EMOTIONAL_LEXICON`, any case
    pub has_emotional_words: bool,
    /// A run of 4+ uppercase ASCII letters
    pub has_all_caps: bool,
    /// At least one `!`
    pub has_exclamation: bool,
    /// Character count of the content as given
    pub content_length: usize,
}

/// Inspect `content` for manipulation signals. Never fails, including on
/// empty input.
pub fn detect_signals(content: &str) -> SignalSet {
    SignalSet {
        has_emotional_words: EMOTIONAL_WORDS.is_match(content),
        has_all_caps: ALL_CAPS_RUN.is_match(content),
        has_exclamation: content.contains('!'),
        content_length: content.chars().count(),
    }
}
