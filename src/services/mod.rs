pub mod auth;
pub mod complaint;
pub mod detection;
pub mod evidence;
pub mod profile;

pub use complaint::{ComplaintGateway, MockComplaintGateway};
pub use detection::{MockSpamClassifier, SpamClassifier};
pub use evidence::{MockRiskScorer, RiskScorer};
