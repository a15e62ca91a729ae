use serde::{Deserialize, Serialize};

/// Spam scan verdict. Exactly one of the two is produced per scan.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum ScanOutcome {
    Clean,
    Spam,
}

impl ScanOutcome {
    /// Classify a uniform draw in `[0, 1)`, 50/50 between the two branches.
    pub fn from_draw(draw: f64) -> Self {
        if draw > 0.5 {
            ScanOutcome::Spam
        } else {
            ScanOutcome::Clean
        }
    }

    /// Cosmetic confidence percentage, fixed per branch.
    pub fn confidence(self) -> u8 {
        match self {
            ScanOutcome::Clean => 95,
            ScanOutcome::Spam => 85,
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            ScanOutcome::Clean => "Email Appears Safe",
            ScanOutcome::Spam => "Potential Spam Detected",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            ScanOutcome::Clean => {
                "Our analysis indicates this email is likely safe with no signs of spam."
            }
            ScanOutcome::Spam => {
                "Our analysis has detected potential signs of spam. Please be cautious with this email."
            }
        }
    }

    pub fn is_clean(self) -> bool {
        self == ScanOutcome::Clean
    }
}

/// Result of one detection-tool scan.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ScanReport {
    pub outcome: ScanOutcome,
    pub confidence: u8,
    pub analysis_secs: f32,
}

impl ScanReport {
    pub fn from_draw(draw: f64) -> Self {
        let outcome = ScanOutcome::from_draw(draw);
        Self {
            outcome,
            confidence: outcome.confidence(),
            analysis_secs: 1.8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_splits_evenly_at_half() {
        assert_eq!(ScanOutcome::from_draw(0.0), ScanOutcome::Clean);
        assert_eq!(ScanOutcome::from_draw(0.5), ScanOutcome::Clean);
        assert_eq!(ScanOutcome::from_draw(0.51), ScanOutcome::Spam);
        assert_eq!(ScanOutcome::from_draw(0.999), ScanOutcome::Spam);
    }

    #[test]
    fn confidence_is_fixed_per_branch() {
        assert_eq!(ScanReport::from_draw(0.1).confidence, 95);
        assert_eq!(ScanReport::from_draw(0.9).confidence, 85);
    }

    #[test]
    fn every_draw_yields_exactly_one_outcome() {
        for i in 0..100 {
            let draw = i as f64 / 100.0;
            let outcome = ScanOutcome::from_draw(draw);
            assert!(matches!(outcome, ScanOutcome::Clean | ScanOutcome::Spam));
        }
    }
}
