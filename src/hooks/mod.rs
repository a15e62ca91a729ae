pub mod use_auth;
pub mod use_complaint;
pub mod use_detection;
pub mod use_evidence;
pub mod use_profile;

pub use use_auth::{use_auth, AuthSession, UseAuthHandle};
pub use use_complaint::{use_complaint, ComplaintState, UseComplaintHandle};
pub use use_detection::{use_detection, DetectionState, UseDetectionHandle};
pub use use_evidence::{use_evidence, EvidenceState, UseEvidenceHandle};
pub use use_profile::{use_profile, ProfileState, UseProfileHandle};
