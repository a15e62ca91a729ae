use chrono::Utc;
use gloo_timers::future::TimeoutFuture;

use crate::models::{EvidenceFile, EvidenceReport};
use crate::utils::constants::ANALYSIS_DELAY_MS;
use crate::utils::random_draw;

/// Capability seam for evidence analysis, same shape as the spam classifier.
#[allow(async_fn_in_trait)]
pub trait RiskScorer {
    async fn score(&self, file: &EvidenceFile) -> EvidenceReport;
}

/// Demo scorer: fixed delay, risk tier and score from one uniform draw,
/// canned threat and recommendation strings.
pub struct MockRiskScorer {
    pub delay_ms: u32,
}

impl Default for MockRiskScorer {
    fn default() -> Self {
        Self {
            delay_ms: ANALYSIS_DELAY_MS,
        }
    }
}

impl RiskScorer for MockRiskScorer {
    async fn score(&self, file: &EvidenceFile) -> EvidenceReport {
        log::info!("🔬 Analyzing {}...", file.name);
        TimeoutFuture::new(self.delay_ms).await;
        let report = EvidenceReport::from_draws(file.id, random_draw(), random_draw(), Utc::now());
        log::info!(
            "✅ Analysis finished: {} scored {}/100",
            file.name,
            report.risk_score
        );
        report
    }
}
