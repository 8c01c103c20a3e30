// Additive risk score formula.
//
// A base score is nudged up by each manipulation signal and down for very
// short content, then capped. There is deliberately no lower clamp: with
// custom weights the score can go below zero and still classifies as LOW.

use serde::{Deserialize, Serialize};

use super::signals::{detect_signals, SignalSet};

/// Configurable weights for the risk score formula.
///
/// `score = min(base + emotional + all_caps + exclamation - short_penalty, max_score)`
/// where each term only applies when its signal fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreWeights {
    /// Starting score for every piece of content (default 30)
    pub base: i32,
    /// Added when emotional vocabulary is present (default 25)
    pub emotional_bonus: i32,
    /// Added when a 4+ letter all-caps run is present (default 20)
    pub all_caps_bonus: i32,
    /// Added when the content contains `!` (default 10)
    pub exclamation_bonus: i32,
    /// Subtracted when the content is shorter than `short_content_chars` (default 10)
    pub short_content_penalty: i32,
    /// Content strictly shorter than this many characters is penalized (default 100)
    pub short_content_chars: usize,
    /// Upper cap on the final score (default 95)
    pub max_score: i32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            base: 30,
            emotional_bonus: 25,
            all_caps_bonus: 20,
            exclamation_bonus: 10,
            short_content_penalty: 10,
            short_content_chars: 100,
            max_score: 95,
        }
    }
}

/// A capped risk score. Higher means more manipulative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskScore(i32);

impl RiskScore {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(self) -> i32 {
        self.0
    }

    pub fn level(self) -> RiskLevel {
        RiskLevel::from_score(self.0)
    }

    pub fn credibility(self) -> Credibility {
        Credibility::from_score(self.0)
    }
}

impl std::fmt::Display for RiskScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Categorical risk band reported in the analysis summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// HIGH above 70, MEDIUM above 50, LOW otherwise.
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s > 70 => RiskLevel::High,
            s if s > 50 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Credibility {
    Reliable,
    Questionable,
}

impl Credibility {
    /// QUESTIONABLE above 50.
    pub fn from_score(score: i32) -> Self {
        if score > 50 {
            Credibility::Questionable
        } else {
            Credibility::Reliable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Credibility::Reliable => "RELIABLE",
            Credibility::Questionable => "QUESTIONABLE",
        }
    }
}

impl std::fmt::Display for Credibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compute the capped risk score for a set of signals.
pub fn compute_risk_score(signals: &SignalSet, weights: &ScoreWeights) -> RiskScore {
    let mut score = weights.base;
    if signals.has_emotional_words {
        score += weights.emotional_bonus;
    }
    if signals.has_all_caps {
        score += weights.all_caps_bonus;
    }
    if signals.has_exclamation {
        score += weights.exclamation_bonus;
    }
    if signals.content_length < weights.short_content_chars {
        score -= weights.short_content_penalty;
    }

    RiskScore(score.min(weights.max_score))
}

/// Detect signals in `content` and score them in one step.
pub fn score_content(content: &str, weights: &ScoreWeights) -> (RiskScore, SignalSet) {
    let signals = detect_signals(content);
    (compute_risk_score(&signals, weights), signals)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(emotional: bool, caps: bool, bang: bool, len: usize) -> SignalSet {
        SignalSet {
            has_emotional_words: emotional,
            has_all_caps: caps,
            has_exclamation: bang,
            content_length: len,
        }
    }

    #[test]
    fn test_neutral_short_content() {
        let score = compute_risk_score(&signals(false, false, false, 20), &ScoreWeights::default());
        // 30 - 10
        assert_eq!(score.value(), 20);
        assert_eq!(score.level(), RiskLevel::Low);
        assert_eq!(score.credibility(), Credibility::Reliable);
    }

    #[test]
    fn test_every_signal_long_content() {
        let score = compute_risk_score(&signals(true, true, true, 250), &ScoreWeights::default());
        // 30 + 25 + 20 + 10
        assert_eq!(score.value(), 85);
        assert_eq!(score.level(), RiskLevel::High);
        assert_eq!(score.credibility(), Credibility::Questionable);
    }

    #[test]
    fn test_cap_applies() {
        let weights = ScoreWeights {
            base: 80,
            ..ScoreWeights::default()
        };
        let score = compute_risk_score(&signals(true, true, true, 500), &weights);
        assert_eq!(score.value(), 95);
    }

    #[test]
    fn test_no_lower_clamp() {
        let weights = ScoreWeights {
            base: 5,
            ..ScoreWeights::default()
        };
        let score = compute_risk_score(&signals(false, false, false, 3), &weights);
        assert_eq!(score.value(), -5);
        assert_eq!(score.level(), RiskLevel::Low);
    }

    #[test]
    fn test_length_penalty_boundary() {
        let weights = ScoreWeights::default();
        assert_eq!(compute_risk_score(&signals(false, false, false, 99), &weights).value(), 20);
        assert_eq!(compute_risk_score(&signals(false, false, false, 100), &weights).value(), 30);
    }

    #[test]
    fn test_score_content_plain_statement() {
        let (score, signals) = score_content("This is a plain statement.", &ScoreWeights::default());
        assert_eq!(score.value(), 20);
        assert!(!signals.has_emotional_words);
        assert!(!signals.has_all_caps);
        assert!(!signals.has_exclamation);
    }
}
