use gloo_timers::future::TimeoutFuture;

use crate::models::ScanReport;
use crate::utils::constants::SCAN_DELAY_MS;
use crate::utils::random_draw;

/// Capability seam for the detection tool. The shipped implementation is a
/// mock; a network-backed classifier slots in without touching callers.
#[allow(async_fn_in_trait)]
pub trait SpamClassifier {
    async fn classify(&self, file_name: &str) -> ScanReport;
}

/// Demo classifier: fixed delay, uniform 50/50 verdict, file content ignored.
pub struct MockSpamClassifier {
    pub delay_ms: u32,
}

impl Default for MockSpamClassifier {
    fn default() -> Self {
        Self {
            delay_ms: SCAN_DELAY_MS,
        }
    }
}

impl SpamClassifier for MockSpamClassifier {
    async fn classify(&self, file_name: &str) -> ScanReport {
        log::info!("🔍 Scanning {file_name}...");
        TimeoutFuture::new(self.delay_ms).await;
        let report = ScanReport::from_draw(random_draw());
        log::info!(
            "✅ Scan finished: {:?} ({}% confidence)",
            report.outcome,
            report.confidence
        );
        report
    }
}
