use std::rc::Rc;

use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{EvidenceFile, EvidenceReport, EvidenceStatus, RiskLevel};
use crate::services::{MockRiskScorer, RiskScorer};

#[derive(Clone, PartialEq, Default)]
pub struct EvidenceState {
    pub files: Vec<EvidenceFile>,
    /// Id of the file whose analysis is in flight, if any. One at a time.
    pub analyzing: Option<Uuid>,
    pub reports: Vec<EvidenceReport>,
}

impl EvidenceState {
    pub fn report_for(&self, file_id: Uuid) -> Option<&EvidenceReport> {
        self.reports.iter().find(|r| r.file_id == file_id)
    }

    /// A file can be analyzed when nothing is in flight, it exists, and it
    /// has not been analyzed yet. Gates both the button and the callback.
    pub fn can_analyze(&self, file_id: Uuid) -> bool {
        self.analyzing.is_none()
            && self
                .files
                .iter()
                .any(|f| f.id == file_id && f.status == EvidenceStatus::Uploaded)
    }

    pub fn analyzed_count(&self) -> usize {
        self.reports.len()
    }

    pub fn high_risk_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| r.risk_level == RiskLevel::High)
            .count()
    }

    pub fn low_risk_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| r.risk_level == RiskLevel::Low)
            .count()
    }
}

/// State transitions. The completion touches only its own file's status,
/// the report list and the in-flight slot.
pub enum EvidenceAction {
    Upload(Vec<EvidenceFile>),
    AnalyzeStarted(Uuid),
    AnalyzeFinished { file_id: Uuid, report: EvidenceReport },
}

impl Reducible for EvidenceState {
    type Action = EvidenceAction;

    fn reduce(self: Rc<Self>, action: EvidenceAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            EvidenceAction::Upload(new_files) => next.files.extend(new_files),
            EvidenceAction::AnalyzeStarted(file_id) => next.analyzing = Some(file_id),
            EvidenceAction::AnalyzeFinished { file_id, report } => {
                next.reports.push(report);
                if let Some(entry) = next.files.iter_mut().find(|f| f.id == file_id) {
                    entry.status = EvidenceStatus::Analyzed;
                }
                next.analyzing = None;
            }
        }
        Rc::new(next)
    }
}

pub struct UseEvidenceHandle {
    pub state: UseReducerHandle<EvidenceState>,
    pub upload: Callback<Vec<EvidenceFile>>,
    pub analyze: Callback<Uuid>,
}

/// Evidence-analysis form instance: a list of uploaded file metadata, each
/// independently analyzable, with at most one analysis in flight.
#[hook]
pub fn use_evidence() -> UseEvidenceHandle {
    let state = use_reducer(EvidenceState::default);

    let upload = {
        let state = state.clone();
        Callback::from(move |new_files: Vec<EvidenceFile>| {
            log::info!("📎 {} evidence file(s) added", new_files.len());
            state.dispatch(EvidenceAction::Upload(new_files));
        })
    };

    let analyze = {
        let state = state.clone();
        Callback::from(move |file_id: Uuid| {
            let current = (*state).clone();
            if !current.can_analyze(file_id) {
                return;
            }
            let Some(file) = current.files.iter().find(|f| f.id == file_id).cloned() else {
                return;
            };

            state.dispatch(EvidenceAction::AnalyzeStarted(file_id));

            let state = state.clone();
            spawn_local(async move {
                let report = MockRiskScorer::default().score(&file).await;
                state.dispatch(EvidenceAction::AnalyzeFinished { file_id, report });
            });
        })
    };

    UseEvidenceHandle { state, upload, analyze }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn dispatch(state: EvidenceState, action: EvidenceAction) -> EvidenceState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn two_uploaded_files() -> EvidenceState {
        dispatch(
            EvidenceState::default(),
            EvidenceAction::Upload(vec![
                EvidenceFile::new("a.png".into(), "image/png", 1024.0, Utc::now()),
                EvidenceFile::new("b.pdf".into(), "application/pdf", 2048.0, Utc::now()),
            ]),
        )
    }

    fn state_with_reports(levels: &[RiskLevel]) -> EvidenceState {
        let reports = levels
            .iter()
            .map(|level| {
                let draw = match level {
                    RiskLevel::Low => 0.1,
                    RiskLevel::Medium => 0.5,
                    RiskLevel::High => 0.9,
                };
                EvidenceReport::from_draws(Uuid::new_v4(), draw, 0.0, Utc::now())
            })
            .collect();
        EvidenceState {
            files: Vec::new(),
            analyzing: None,
            reports,
        }
    }

    #[test]
    fn one_analysis_in_flight_blocks_the_rest() {
        let state = two_uploaded_files();
        let first = state.files[0].id;
        let second = state.files[1].id;
        assert!(state.can_analyze(first));
        assert!(state.can_analyze(second));

        let state = dispatch(state, EvidenceAction::AnalyzeStarted(first));
        assert!(!state.can_analyze(first));
        assert!(!state.can_analyze(second));
    }

    #[test]
    fn completion_frees_the_slot_and_settles_the_file() {
        let state = two_uploaded_files();
        let first = state.files[0].id;
        let second = state.files[1].id;
        let state = dispatch(state, EvidenceAction::AnalyzeStarted(first));
        let report = EvidenceReport::from_draws(first, 0.9, 0.5, Utc::now());
        let state = dispatch(
            state,
            EvidenceAction::AnalyzeFinished {
                file_id: first,
                report,
            },
        );
        assert!(state.analyzing.is_none());
        assert_eq!(state.files[0].status, EvidenceStatus::Analyzed);
        // The finished file stays done; the other becomes available.
        assert!(!state.can_analyze(first));
        assert!(state.can_analyze(second));
    }

    #[test]
    fn unknown_files_cannot_be_analyzed() {
        let state = two_uploaded_files();
        assert!(!state.can_analyze(Uuid::new_v4()));
    }

    #[test]
    fn sidebar_counters() {
        let state = state_with_reports(&[
            RiskLevel::Low,
            RiskLevel::High,
            RiskLevel::High,
            RiskLevel::Medium,
        ]);
        assert_eq!(state.analyzed_count(), 4);
        assert_eq!(state.high_risk_count(), 2);
        assert_eq!(state.low_risk_count(), 1);
    }

    #[test]
    fn report_lookup_by_file_id() {
        let mut state = state_with_reports(&[RiskLevel::Low]);
        let id = state.reports[0].file_id;
        assert!(state.report_for(id).is_some());
        assert!(state.report_for(Uuid::new_v4()).is_none());
        state.reports.clear();
        assert!(state.report_for(id).is_none());
    }
}
