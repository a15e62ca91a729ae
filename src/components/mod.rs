pub mod app;
pub mod auth_modal;
pub mod complaint_form;
pub mod detection_tool;
pub mod evidence_analysis;
pub mod header;
pub mod user_profile;

pub use app::{App, Page};
pub use auth_modal::AuthModal;
pub use complaint_form::ComplaintForm;
pub use detection_tool::DetectionTool;
pub use evidence_analysis::EvidenceAnalysis;
pub use header::Header;
pub use user_profile::UserProfile;
