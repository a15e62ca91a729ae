/// Simulated backend delays, in milliseconds. These stand in for network
/// round-trips; swapping a real service behind the same seams removes them.
pub const SCAN_DELAY_MS: u32 = 3_000;
pub const ANALYSIS_DELAY_MS: u32 = 3_000;
pub const COMPLAINT_DELAY_MS: u32 = 2_000;
pub const AUTH_SUBMIT_DELAY_MS: u32 = 1_500;
pub const PROFILE_SAVE_DELAY_MS: u32 = 1_000;

/// How long the email-sent splash stays up before the modal advances.
pub const VERIFY_HOLD_MS: u32 = 2_000;
pub const RESET_HOLD_MS: u32 = 3_000;

/// How long the profile "saved" banner stays visible.
pub const SAVE_BANNER_MS: u32 = 3_000;
