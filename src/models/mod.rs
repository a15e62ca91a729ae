pub mod auth;
pub mod complaint;
pub mod evidence;
pub mod scan;
pub mod user;

pub use auth::{validate, AuthForm, AuthMode, SubmitOutcome, ValidationErrors};
pub use complaint::{ComplaintDraft, ComplaintReceipt, ContactMethod, Priority, CATEGORIES};
pub use evidence::{EvidenceFile, EvidenceKind, EvidenceReport, EvidenceStatus, RiskLevel};
pub use scan::{ScanOutcome, ScanReport};
pub use user::{ProfileForm, UserRecord};
