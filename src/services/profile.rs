use gloo_timers::future::TimeoutFuture;

use crate::models::{ProfileForm, UserRecord};
use crate::utils::constants::PROFILE_SAVE_DELAY_MS;

/// Simulated profile save: merge the edits into the record after a fixed
/// delay. Nothing persists beyond the returned value.
pub async fn save_profile(user: &UserRecord, edits: &ProfileForm) -> UserRecord {
    TimeoutFuture::new(PROFILE_SAVE_DELAY_MS).await;
    let mut updated = user.clone();
    updated.apply_profile(edits);
    log::info!("✅ Profile saved for {}", updated.email);
    updated
}
