use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::ScanReport;
use crate::services::{MockSpamClassifier, SpamClassifier};

#[derive(Clone, PartialEq, Default)]
pub struct DetectionState {
    pub uploaded_file: Option<String>,
    pub is_scanning: bool,
    pub result: Option<ScanReport>,
}

impl DetectionState {
    /// One scan at a time, and only with a file selected. Gates both the
    /// button and the callback.
    pub fn can_scan(&self) -> bool {
        !self.is_scanning && self.uploaded_file.is_some()
    }
}

/// State transitions. The completion owns only the scan fields, so an
/// upload made while a scan runs is not reverted when it lands.
pub enum DetectionAction {
    Upload(String),
    ScanStarted,
    ScanFinished(ScanReport),
}

impl Reducible for DetectionState {
    type Action = DetectionAction;

    fn reduce(self: Rc<Self>, action: DetectionAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            // New upload replaces the file and discards any previous result
            DetectionAction::Upload(file_name) => {
                next.uploaded_file = Some(file_name);
                next.result = None;
            }
            DetectionAction::ScanStarted => {
                next.is_scanning = true;
                next.result = None;
            }
            DetectionAction::ScanFinished(report) => {
                next.result = Some(report);
                next.is_scanning = false;
            }
        }
        Rc::new(next)
    }
}

pub struct UseDetectionHandle {
    pub state: UseReducerHandle<DetectionState>,
    pub upload: Callback<String>,
    pub scan: Callback<()>,
}

/// Detection-tool form instance: one uploaded file name, one in-flight scan
/// at most, one result.
#[hook]
pub fn use_detection() -> UseDetectionHandle {
    let state = use_reducer(DetectionState::default);

    let upload = {
        let state = state.clone();
        Callback::from(move |file_name: String| {
            log::info!("📎 File selected: {file_name}");
            state.dispatch(DetectionAction::Upload(file_name));
        })
    };

    let scan = {
        let state = state.clone();
        Callback::from(move |_| {
            let current = (*state).clone();
            // The button is disabled while scanning; ignore re-entry anyway.
            if !current.can_scan() {
                return;
            }
            let Some(file_name) = current.uploaded_file.clone() else {
                return;
            };

            state.dispatch(DetectionAction::ScanStarted);

            let state = state.clone();
            spawn_local(async move {
                let report = MockSpamClassifier::default().classify(&file_name).await;
                state.dispatch(DetectionAction::ScanFinished(report));
            });
        })
    };

    UseDetectionHandle { state, upload, scan }
}
