use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complaint categories shown in the form's category grid.
pub struct CategoryInfo {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const CATEGORIES: [CategoryInfo; 8] = [
    CategoryInfo { value: "phishing", label: "Phishing Attack", icon: "🎣" },
    CategoryInfo { value: "deepfake", label: "Deepfake Content", icon: "🎭" },
    CategoryInfo { value: "malware", label: "Malware/Virus", icon: "🦠" },
    CategoryInfo { value: "identity-theft", label: "Identity Theft", icon: "🆔" },
    CategoryInfo { value: "social-engineering", label: "Social Engineering", icon: "🎯" },
    CategoryInfo { value: "data-breach", label: "Data Breach", icon: "🔓" },
    CategoryInfo { value: "fraud", label: "Financial Fraud", icon: "💳" },
    CategoryInfo { value: "other", label: "Other", icon: "❓" },
];

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }

    pub fn from_str(value: &str) -> Self {
        match value {
            "low" => Priority::Low,
            "high" => Priority::High,
            "critical" => Priority::Critical,
            _ => Priority::Medium,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Priority::Low => "Non-urgent issue",
            Priority::Medium => "Standard priority",
            Priority::High => "Urgent attention needed",
            Priority::Critical => "Immediate action required",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum ContactMethod {
    Email,
    Phone,
}

impl ContactMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            ContactMethod::Email => "email",
            ContactMethod::Phone => "phone",
        }
    }

    pub fn from_str(value: &str) -> Self {
        match value {
            "phone" => ContactMethod::Phone,
            _ => ContactMethod::Email,
        }
    }
}

/// Complaint form fields. Attachments carry file names only.
#[derive(Clone, PartialEq, Debug)]
pub struct ComplaintDraft {
    pub category: String,
    pub subject: String,
    pub description: String,
    pub priority: Priority,
    pub contact_method: ContactMethod,
    pub attachments: Vec<String>,
}

impl Default for ComplaintDraft {
    fn default() -> Self {
        Self {
            category: String::new(),
            subject: String::new(),
            description: String::new(),
            priority: Priority::Medium,
            contact_method: ContactMethod::Email,
            attachments: Vec::new(),
        }
    }
}

impl ComplaintDraft {
    pub fn set_field(&mut self, field: &str, value: String) {
        match field {
            "category" => self.category = value,
            "subject" => self.subject = value,
            "description" => self.description = value,
            "priority" => self.priority = Priority::from_str(&value),
            "contact_method" => self.contact_method = ContactMethod::from_str(&value),
            _ => log::warn!("Unknown complaint field: {field}"),
        }
    }

    /// Category, subject and description must be non-empty before submit.
    pub fn is_submittable(&self) -> bool {
        !self.category.trim().is_empty()
            && !self.subject.trim().is_empty()
            && !self.description.trim().is_empty()
    }
}

/// Opaque tracking identifier: `CMP-<year>-<3-digit zero-padded random>`.
pub fn tracking_id(year: i32, draw: f64) -> String {
    format!("CMP-{year}-{:03}", (draw * 1000.0).floor() as u32)
}

/// Confirmation handed back by a (mock) complaint submission.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ComplaintReceipt {
    pub tracking_id: String,
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches_tracking_pattern(id: &str) -> bool {
        // CMP-\d{4}-\d{3}
        let mut parts = id.split('-');
        parts.next() == Some("CMP")
            && parts
                .next()
                .is_some_and(|y| y.len() == 4 && y.chars().all(|c| c.is_ascii_digit()))
            && parts
                .next()
                .is_some_and(|n| n.len() == 3 && n.chars().all(|c| c.is_ascii_digit()))
            && parts.next().is_none()
    }

    #[test]
    fn tracking_id_shape() {
        assert_eq!(tracking_id(2026, 0.042), "CMP-2026-042");
        assert_eq!(tracking_id(2026, 0.0), "CMP-2026-000");
        assert_eq!(tracking_id(2026, 0.9999), "CMP-2026-999");
        for i in 0..50 {
            let id = tracking_id(2026, i as f64 / 50.0);
            assert!(matches_tracking_pattern(&id), "{id}");
        }
    }

    #[test]
    fn required_fields_gate_submission() {
        let mut draft = ComplaintDraft::default();
        assert!(!draft.is_submittable());
        draft.set_field("category", "phishing".into());
        draft.set_field("subject", "Suspicious bank email".into());
        assert!(!draft.is_submittable());
        draft.set_field("description", "Asked for my card PIN".into());
        assert!(draft.is_submittable());
    }

    #[test]
    fn whitespace_does_not_satisfy_required_fields() {
        let mut draft = ComplaintDraft::default();
        draft.set_field("category", "phishing".into());
        draft.set_field("subject", "   ".into());
        draft.set_field("description", "details".into());
        assert!(!draft.is_submittable());
    }

    #[test]
    fn priority_round_trips() {
        for priority in Priority::ALL {
            assert_eq!(Priority::from_str(priority.as_str()), priority);
        }
        // Unknown values fall back to the form default.
        assert_eq!(Priority::from_str("bogus"), Priority::Medium);
    }

    #[test]
    fn defaults_match_the_form() {
        let draft = ComplaintDraft::default();
        assert_eq!(draft.priority, Priority::Medium);
        assert_eq!(draft.contact_method, ContactMethod::Email);
        assert!(draft.attachments.is_empty());
    }
}
