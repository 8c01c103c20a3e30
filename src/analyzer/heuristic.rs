// Heuristic analyzer: the demo-mode fallback used when no inference
// backend is configured. Pure and deterministic.

use anyhow::Result;
use async_trait::async_trait;

use super::traits::{Assessment, ContentAnalyzer};
use crate::scoring::risk::{score_content, ScoreWeights};

/// Model identifier reported for heuristic assessments.
pub const HEURISTIC_MODEL_ID: &str = "demo-mode-heuristic";

#[derive(Debug, Clone, Default)]
pub struct HeuristicAnalyzer {
    pub weights: ScoreWeights,
}

impl HeuristicAnalyzer {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Synchronous form of `assess`; the heuristic never does I/O.
    pub fn assess_now(&self, content: &str) -> Assessment {
        let (score, signals) = score_content(content, &self.weights);
        Assessment { score, signals }
    }
}

#[async_trait]
impl ContentAnalyzer for HeuristicAnalyzer {
    fn model_id(&self) -> &str {
        HEURISTIC_MODEL_ID
    }

    async fn assess(&self, content: &str) -> Result<Assessment> {
        Ok(self.assess_now(content))
    }
}
