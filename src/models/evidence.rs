use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canned findings attached to mock analysis results. A random-length prefix
/// of the threat pool is reported; recommendations always come whole.
pub const THREAT_POOL: [&str; 3] = [
    "Potential phishing indicators detected",
    "Suspicious URL patterns found",
    "Email header inconsistencies",
];

pub const RECOMMENDATION_POOL: [&str; 3] = [
    "Do not click any links in this email",
    "Verify sender through alternative communication",
    "Report to your IT security team",
];

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum EvidenceKind {
    Image,
    Document,
}

impl EvidenceKind {
    /// Only the browser-reported MIME type is inspected; file content never
    /// leaves the client.
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            EvidenceKind::Image
        } else {
            EvidenceKind::Document
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum EvidenceStatus {
    Uploaded,
    Analyzed,
}

/// One uploaded piece of evidence (metadata only).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct EvidenceFile {
    pub id: Uuid,
    pub name: String,
    pub kind: EvidenceKind,
    pub size_bytes: f64,
    pub uploaded_at: DateTime<Utc>,
    pub status: EvidenceStatus,
}

impl EvidenceFile {
    pub fn new(name: String, mime: &str, size_bytes: f64, uploaded_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            kind: EvidenceKind::from_mime(mime),
            size_bytes,
            uploaded_at,
            status: EvidenceStatus::Uploaded,
        }
    }

    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size_bytes / 1024.0 / 1024.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Tier a uniform draw: above 0.7 is high, above 0.4 medium, else low.
    pub fn from_draw(draw: f64) -> Self {
        if draw > 0.7 {
            RiskLevel::High
        } else if draw > 0.4 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW RISK",
            RiskLevel::Medium => "MEDIUM RISK",
            RiskLevel::High => "HIGH RISK",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            RiskLevel::Low => "risk-low",
            RiskLevel::Medium => "risk-medium",
            RiskLevel::High => "risk-high",
        }
    }
}

/// Result of one mock evidence analysis.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct EvidenceReport {
    pub file_id: Uuid,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub threats: Vec<String>,
    pub recommendations: Vec<String>,
    pub analyzed_at: DateTime<Utc>,
}

impl EvidenceReport {
    /// Derive a full report from two uniform draws: one for the risk tier and
    /// score, one for how many canned threats to include (1 to 3).
    pub fn from_draws(
        file_id: Uuid,
        risk_draw: f64,
        count_draw: f64,
        analyzed_at: DateTime<Utc>,
    ) -> Self {
        let threat_count = (count_draw * 3.0).floor() as usize + 1;
        Self {
            file_id,
            risk_score: (risk_draw * 100.0).floor() as u8,
            risk_level: RiskLevel::from_draw(risk_draw),
            threats: THREAT_POOL[..threat_count.min(THREAT_POOL.len())]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            recommendations: RECOMMENDATION_POOL.iter().map(|s| s.to_string()).collect(),
            analyzed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_tier_thresholds() {
        assert_eq!(RiskLevel::from_draw(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_draw(0.4), RiskLevel::Low);
        assert_eq!(RiskLevel::from_draw(0.41), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_draw(0.7), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_draw(0.71), RiskLevel::High);
        assert_eq!(RiskLevel::from_draw(0.99), RiskLevel::High);
    }

    #[test]
    fn score_is_floored_percentage() {
        let report = EvidenceReport::from_draws(Uuid::new_v4(), 0.678, 0.0, Utc::now());
        assert_eq!(report.risk_score, 67);
        assert_eq!(report.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn threat_count_stays_in_range() {
        for i in 0..100 {
            let draw = i as f64 / 100.0;
            let report = EvidenceReport::from_draws(Uuid::new_v4(), 0.5, draw, Utc::now());
            assert!((1..=3).contains(&report.threats.len()), "draw {draw}");
        }
    }

    #[test]
    fn recommendations_are_complete() {
        let report = EvidenceReport::from_draws(Uuid::new_v4(), 0.1, 0.1, Utc::now());
        assert_eq!(report.recommendations.len(), RECOMMENDATION_POOL.len());
    }

    #[test]
    fn mime_type_maps_to_kind() {
        assert_eq!(EvidenceKind::from_mime("image/png"), EvidenceKind::Image);
        assert_eq!(EvidenceKind::from_mime("application/pdf"), EvidenceKind::Document);
        assert_eq!(EvidenceKind::from_mime(""), EvidenceKind::Document);
    }

    #[test]
    fn size_label_formats_megabytes() {
        let file = EvidenceFile::new("shot.png".into(), "image/png", 2.5 * 1024.0 * 1024.0, Utc::now());
        assert_eq!(file.size_label(), "2.50 MB");
        assert_eq!(file.status, EvidenceStatus::Uploaded);
    }
}
