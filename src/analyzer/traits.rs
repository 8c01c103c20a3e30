// Content analyzer trait: the swap-ready seam between scoring and reporting.

use anyhow::Result;
use async_trait::async_trait;

use crate::scoring::risk::RiskScore;
use crate::scoring::signals::SignalSet;

/// What an analyzer concluded about one piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    pub score: RiskScore,
    pub signals: SignalSet,
}

/// Trait for assessing text for manipulation. Async because real
/// implementations are expected to call out to an inference service.
#[async_trait]
pub trait ContentAnalyzer: Send + Sync {
    /// Identifier reported in the `model_used` metadata field.
    fn model_id(&self) -> &str;

    /// Assess already-normalized content.
    async fn assess(&self, content: &str) -> Result<Assessment>;
}
