// Report synthesis: map an Assessment onto the fixed report sections.
//
// Pure apart from the injected timestamp. Note the two independent
// thresholds: the summary bands come from RiskLevel (>70 is HIGH), while
// the share decision flips at 70 inclusive.

use chrono::{DateTime, SecondsFormat, Utc};

use super::templates::*;
use super::{
    AnalysisReport, AnalysisSummary, CognitiveBias, ConfidenceMetrics, DetectedTactic,
    EducationalInsights, FactCheckFlag, ManipulationType, Recommendations, ReportMetadata,
    ShareDecision,
};
use crate::analyzer::traits::Assessment;
use crate::output::truncate_chars;
use crate::scoring::risk::RiskScore;

/// Scores at or above this are not worth passing on.
pub const AVOID_SHARING_THRESHOLD: i32 = 70;

/// Scores above this get the "verify first" recommendation.
pub const VERIFY_ACTION_THRESHOLD: i32 = 50;

/// Build the full report for `content`.
///
/// `content` should be the same normalized text the assessment was made
/// from; it is quoted back in the emotional tactic and measured for the
/// metadata section.
pub fn synthesize(
    content: &str,
    assessment: &Assessment,
    model_used: &str,
    now: DateTime<Utc>,
) -> AnalysisReport {
    let emotional = assessment.signals.has_emotional_words;
    let score = assessment.score;

    AnalysisReport {
        analysis_summary: AnalysisSummary {
            risk_level: score.level(),
            risk_score: score,
            primary_concern: pick(emotional, CONCERN_EMOTIONAL, CONCERN_NEUTRAL),
            credibility_rating: score.credibility(),
        },
        detected_tactics: vec![detected_tactic(content, emotional)],
        cognitive_biases: vec![fomo_bias()],
        fact_check_flags: fact_check_flags(emotional),
        educational_insights: EducationalInsights {
            why_convincing: pick(emotional, WHY_CONVINCING_EMOTIONAL, WHY_CONVINCING_NEUTRAL),
            target_audience: TARGET_AUDIENCE.to_string(),
            psychological_appeal: pick(emotional, APPEAL_EMOTIONAL, APPEAL_NEUTRAL),
            critical_questions: to_strings(&CRITICAL_QUESTIONS),
            verification_steps: to_strings(&VERIFICATION_STEPS),
        },
        recommendations: recommendations(score),
        confidence_metrics: ConfidenceMetrics {
            analysis_confidence: ANALYSIS_CONFIDENCE,
            data_completeness: DATA_COMPLETENESS,
            context_availability: CONTEXT_AVAILABILITY.to_string(),
        },
        metadata: ReportMetadata {
            analysis_timestamp: now.to_rfc3339_opts(SecondsFormat::Micros, true),
            model_used: model_used.to_string(),
            content_length: content.chars().count(),
            source_type: SOURCE_TYPE.to_string(),
        },
    }
}

/// Share decision for a score, independent of the summary's risk band.
pub fn share_decision(score: RiskScore) -> ShareDecision {
    if score.value() >= AVOID_SHARING_THRESHOLD {
        ShareDecision::AvoidSharing
    } else {
        ShareDecision::ShareWithContext
    }
}

fn detected_tactic(content: &str, emotional: bool) -> DetectedTactic {
    if emotional {
        DetectedTactic {
            tactic_name: EMOTIONAL_TACTIC_NAME.to_string(),
            description: EMOTIONAL_TACTIC_DESCRIPTION.to_string(),
            example_from_content: truncate_chars(content, EXAMPLE_EXCERPT_CHARS),
            manipulation_type: ManipulationType::Emotional,
        }
    } else {
        DetectedTactic {
            tactic_name: DEMO_TACTIC_NAME.to_string(),
            description: DEMO_TACTIC_DESCRIPTION.to_string(),
            example_from_content: DEMO_TACTIC_EXAMPLE.to_string(),
            manipulation_type: ManipulationType::Logical,
        }
    }
}

fn fomo_bias() -> CognitiveBias {
    CognitiveBias {
        bias_name: FOMO_BIAS.bias_name.to_string(),
        explanation: FOMO_BIAS.explanation.to_string(),
        how_its_exploited: FOMO_BIAS.how_its_exploited.to_string(),
        resistance_tip: FOMO_BIAS.resistance_tip.to_string(),
    }
}

fn fact_check_flags(emotional: bool) -> Vec<FactCheckFlag> {
    if !emotional {
        return Vec::new();
    }
    vec![FactCheckFlag {
        claim: VAGUE_CLAIM_FLAG_CLAIM.to_string(),
        flag_reason: VAGUE_CLAIM_FLAG_REASON.to_string(),
        verification_suggestion: VAGUE_CLAIM_FLAG_SUGGESTION.to_string(),
    }]
}

fn recommendations(score: RiskScore) -> Recommendations {
    Recommendations {
        immediate_action: pick(
            score.value() > VERIFY_ACTION_THRESHOLD,
            ACTION_VERIFY,
            ACTION_NORMAL,
        ),
        further_research: to_strings(&FURTHER_RESEARCH),
        share_decision: share_decision(score),
        learning_opportunity: LEARNING_OPPORTUNITY.to_string(),
    }
}

fn pick(condition: bool, yes: &str, no: &str) -> String {
    let chosen = if condition { yes } else { no };
    chosen.to_string()
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
