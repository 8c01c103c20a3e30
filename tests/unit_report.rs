// Composition tests: input gate -> heuristic analyzer -> report synthesis.
//
// These exercise the full data flow with a fixed timestamp, without the
// HTTP layer. Field-level checks mirror what /analyze callers rely on.

use chrono::{DateTime, Utc};

use lielens::analyzer::heuristic::{HeuristicAnalyzer, HEURISTIC_MODEL_ID};
use lielens::input::normalize_content;
use lielens::report::synthesize::synthesize;
use lielens::report::templates::{CRITICAL_QUESTIONS, DEMO_CONTENT, VERIFICATION_STEPS};
use lielens::report::{AnalysisReport, ManipulationType, ShareDecision};
use lielens::scoring::risk::{Credibility, RiskLevel};

fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-03-14T09:26:53Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn report_for(raw: &str) -> AnalysisReport {
    let content = normalize_content(raw).unwrap();
    let analyzer = HeuristicAnalyzer::default();
    let assessment = analyzer.assess_now(&content);
    synthesize(&content, &assessment, HEURISTIC_MODEL_ID, fixed_now())
}

// ============================================================
// Demo sample: every signal fires
// ============================================================

#[test]
fn demo_report_summary() {
    let report = report_for(DEMO_CONTENT);
    let summary = &report.analysis_summary;
    assert_eq!(summary.risk_score.value(), 85);
    assert_eq!(summary.risk_level, RiskLevel::High);
    assert_eq!(summary.credibility_rating, Credibility::Questionable);
    assert_eq!(
        summary.primary_concern,
        "Content uses emotional manipulation tactics"
    );
}

#[test]
fn demo_report_quotes_truncated_excerpt() {
    let report = report_for(DEMO_CONTENT);
    assert_eq!(report.detected_tactics.len(), 1);
    let tactic = &report.detected_tactics[0];
    assert_eq!(tactic.tactic_name, "Emotional Manipulation");
    assert_eq!(tactic.manipulation_type, ManipulationType::Emotional);
    assert!(tactic.example_from_content.starts_with("BREAKING: Scientists SHOCKED"));
    assert!(tactic.example_from_content.ends_with("..."));
    assert_eq!(tactic.example_from_content.chars().count(), 103);
}

#[test]
fn demo_report_flags_and_recommendations() {
    let report = report_for(DEMO_CONTENT);
    assert_eq!(report.fact_check_flags.len(), 1);
    assert_eq!(
        report.fact_check_flags[0].flag_reason,
        "Vague or unsupported claims detected"
    );
    assert_eq!(
        report.recommendations.immediate_action,
        "Verify claims through multiple credible sources"
    );
    assert_eq!(report.recommendations.share_decision, ShareDecision::AvoidSharing);
    assert_eq!(
        report.educational_insights.psychological_appeal,
        "Combines fear, hope, and exclusivity"
    );
}

// ============================================================
// Neutral content: placeholder tactic, no flags
// ============================================================

#[test]
fn neutral_report() {
    let report = report_for("This is a plain statement.");
    assert_eq!(report.analysis_summary.risk_score.value(), 20);
    assert_eq!(report.analysis_summary.risk_level, RiskLevel::Low);
    assert_eq!(
        report.analysis_summary.primary_concern,
        "Content appears relatively neutral"
    );

    let tactic = &report.detected_tactics[0];
    assert_eq!(tactic.tactic_name, "Demo Mode Active");
    assert_eq!(tactic.example_from_content, "Sample analysis");
    assert_eq!(tactic.manipulation_type, ManipulationType::Logical);

    assert!(report.fact_check_flags.is_empty());
    assert_eq!(
        report.recommendations.immediate_action,
        "Proceed with normal fact-checking"
    );
    assert_eq!(
        report.recommendations.share_decision,
        ShareDecision::ShareWithContext
    );
    assert_eq!(report.educational_insights.why_convincing, "Content appears straightforward");
}

#[test]
fn short_emotional_content_is_quoted_whole() {
    let report = report_for("This secret cure works");
    assert_eq!(
        report.detected_tactics[0].example_from_content,
        "This secret cure works"
    );
    // 30 + 25 - 10
    assert_eq!(report.analysis_summary.risk_score.value(), 45);
    assert_eq!(report.analysis_summary.risk_level, RiskLevel::Low);
    assert_eq!(report.fact_check_flags.len(), 1);
}

// ============================================================
// Static sections never depend on input
// ============================================================

#[test]
fn static_sections_are_identical_across_inputs() {
    let a = report_for(DEMO_CONTENT);
    let b = report_for("This is a plain statement.");

    assert_eq!(a.cognitive_biases, b.cognitive_biases);
    assert_eq!(a.cognitive_biases.len(), 1);
    assert_eq!(a.cognitive_biases[0].bias_name, "Fear of Missing Out (FOMO)");

    assert_eq!(a.confidence_metrics, b.confidence_metrics);
    assert_eq!(a.confidence_metrics.analysis_confidence, 75);
    assert_eq!(a.confidence_metrics.data_completeness, 60);
    assert_eq!(a.confidence_metrics.context_availability, "PARTIAL");

    assert_eq!(a.educational_insights.critical_questions, CRITICAL_QUESTIONS);
    assert_eq!(a.educational_insights.verification_steps, VERIFICATION_STEPS);
    assert_eq!(
        a.educational_insights.target_audience,
        b.educational_insights.target_audience
    );
    assert_eq!(a.recommendations.further_research.len(), 3);
}

#[test]
fn metadata_reflects_trimmed_content() {
    let report = report_for("    This is a plain statement.    ");
    assert_eq!(report.metadata.content_length, 26);
    assert_eq!(report.metadata.model_used, "demo-mode-heuristic");
    assert_eq!(report.metadata.source_type, "text");
    assert_eq!(report.metadata.analysis_timestamp, "2025-03-14T09:26:53.000000Z");
}

#[test]
fn identical_input_gives_identical_report() {
    assert_eq!(report_for(DEMO_CONTENT), report_for(DEMO_CONTENT));
}

// ============================================================
// JSON wire shape
// ============================================================

#[test]
fn report_json_field_names() {
    let value = serde_json::to_value(report_for(DEMO_CONTENT)).unwrap();

    assert_eq!(value["analysis_summary"]["risk_level"], "HIGH");
    assert_eq!(value["analysis_summary"]["risk_score"], 85);
    assert_eq!(value["analysis_summary"]["credibility_rating"], "QUESTIONABLE");
    assert_eq!(value["detected_tactics"][0]["manipulation_type"], "EMOTIONAL");
    assert!(value["cognitive_biases"][0]["how_its_exploited"].is_string());
    assert!(value["fact_check_flags"][0]["verification_suggestion"].is_string());
    assert_eq!(value["recommendations"]["share_decision"], "AVOID_SHARING");
    assert_eq!(value["confidence_metrics"]["analysis_confidence"], 75);
    assert_eq!(value["metadata"]["source_type"], "text");
}

#[test]
fn neutral_json_has_empty_flag_list() {
    let value = serde_json::to_value(report_for("This is a plain statement.")).unwrap();
    assert_eq!(value["fact_check_flags"], serde_json::json!([]));
    assert_eq!(value["recommendations"]["share_decision"], "SHARE_WITH_CONTEXT");
    assert_eq!(value["detected_tactics"][0]["manipulation_type"], "LOGICAL");
}

// ============================================================
// Async entry point
// ============================================================

#[tokio::test]
async fn analyze_matches_manual_pipeline() {
    let content = normalize_content(DEMO_CONTENT).unwrap();
    let analyzer = HeuristicAnalyzer::default();
    let report = AnalysisReport::analyze(&analyzer, &content, fixed_now())
        .await
        .unwrap();
    assert_eq!(report, report_for(DEMO_CONTENT));
}
