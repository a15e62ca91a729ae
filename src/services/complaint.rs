use chrono::{Datelike, Utc};
use gloo_timers::future::TimeoutFuture;

use crate::models::complaint::tracking_id;
use crate::models::{ComplaintDraft, ComplaintReceipt};
use crate::utils::constants::COMPLAINT_DELAY_MS;
use crate::utils::random_draw;

/// Capability seam for filing complaints.
#[allow(async_fn_in_trait)]
pub trait ComplaintGateway {
    async fn submit(&self, draft: &ComplaintDraft, notify_email: &str)
        -> Result<ComplaintReceipt, String>;
}

/// Demo gateway: fixed delay, synthesized tracking id, simulated
/// confirmation email (a log line, nothing is sent).
pub struct MockComplaintGateway {
    pub delay_ms: u32,
}

impl Default for MockComplaintGateway {
    fn default() -> Self {
        Self {
            delay_ms: COMPLAINT_DELAY_MS,
        }
    }
}

impl ComplaintGateway for MockComplaintGateway {
    async fn submit(
        &self,
        draft: &ComplaintDraft,
        notify_email: &str,
    ) -> Result<ComplaintReceipt, String> {
        log::info!("📝 Filing {} complaint: {}", draft.category, draft.subject);
        TimeoutFuture::new(self.delay_ms).await;
        let now = Utc::now();
        let receipt = ComplaintReceipt {
            tracking_id: tracking_id(now.year(), random_draw()),
            submitted_at: now,
        };
        log::info!("📧 Confirmation email sent to {notify_email}");
        log::info!("✅ Complaint registered: {}", receipt.tracking_id);
        Ok(receipt)
    }
}
