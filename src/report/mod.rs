// Analysis report: the fixed-shape JSON document returned to callers.
//
// Every section is built by `synthesize::synthesize` from an Assessment.
// Field names here are the wire contract of /analyze and /demo.

pub mod synthesize;
pub mod templates;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analyzer::traits::ContentAnalyzer;
use crate::scoring::risk::{Credibility, RiskLevel, RiskScore};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis_summary: AnalysisSummary,
    pub detected_tactics: Vec<DetectedTactic>,
    pub cognitive_biases: Vec<CognitiveBias>,
    pub fact_check_flags: Vec<FactCheckFlag>,
    pub educational_insights: EducationalInsights,
    pub recommendations: Recommendations,
    pub confidence_metrics: ConfidenceMetrics,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub risk_level: RiskLevel,
    pub risk_score: RiskScore,
    pub primary_concern: String,
    pub credibility_rating: Credibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ManipulationType {
    Emotional,
    Logical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedTactic {
    pub tactic_name: String,
    pub description: String,
    pub example_from_content: String,
    pub manipulation_type: ManipulationType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CognitiveBias {
    pub bias_name: String,
    pub explanation: String,
    pub how_its_exploited: String,
    pub resistance_tip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactCheckFlag {
    pub claim: String,
    pub flag_reason: String,
    pub verification_suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationalInsights {
    pub why_convincing: String,
    pub target_audience: String,
    pub psychological_appeal: String,
    pub critical_questions: Vec<String>,
    pub verification_steps: Vec<String>,
}

/// Whether the reader should pass the content on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShareDecision {
    ShareWithContext,
    AvoidSharing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub immediate_action: String,
    pub further_research: Vec<String>,
    pub share_decision: ShareDecision,
    pub learning_opportunity: String,
}

/// How much of the picture the analyzer had. Constant for the heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceMetrics {
    pub analysis_confidence: u8,
    pub data_completeness: u8,
    pub context_availability: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// RFC 3339 UTC timestamp of synthesis
    pub analysis_timestamp: String,
    pub model_used: String,
    /// Character count of the analyzed (trimmed) content
    pub content_length: usize,
    pub source_type: String,
}

impl AnalysisReport {
    /// Assess `content` with `analyzer` and synthesize the full report.
    /// Either the whole report comes back or the analyzer's error does.
    pub async fn analyze(
        analyzer: &dyn ContentAnalyzer,
        content: &str,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let assessment = analyzer.assess(content).await?;
        Ok(synthesize::synthesize(
            content,
            &assessment,
            analyzer.model_id(),
            now,
        ))
    }
}
