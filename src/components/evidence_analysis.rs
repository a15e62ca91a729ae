use chrono::Utc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_evidence;
use crate::models::{EvidenceFile, EvidenceKind, EvidenceReport, EvidenceStatus};

/// Evidence upload and per-file mock risk analysis. Only file metadata is
/// read; nothing leaves the browser.
#[function_component(EvidenceAnalysis)]
pub fn evidence_analysis() -> Html {
    let evidence = use_evidence();
    let state = (*evidence.state).clone();

    let on_file_change = {
        let upload = evidence.upload.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(files) = input.files() else { return };
            let now = Utc::now();
            let mut new_files = Vec::new();
            for i in 0..files.length() {
                if let Some(file) = files.get(i) {
                    new_files.push(EvidenceFile::new(file.name(), &file.type_(), file.size(), now));
                }
            }
            if !new_files.is_empty() {
                upload.emit(new_files);
            }
        })
    };

    let file_cards = state.files.iter().map(|file| {
        let report = state.report_for(file.id);
        let analyzing_this = state.analyzing == Some(file.id);
        let on_analyze = {
            let analyze = evidence.analyze.clone();
            let id = file.id;
            Callback::from(move |_: MouseEvent| analyze.emit(id))
        };

        html! {
            <div class="evidence-card" key={file.id.to_string()}>
                <div class="evidence-card-header">
                    <div class="file-meta">
                        <span class="file-icon">
                            {if file.kind == EvidenceKind::Image { "🖼️" } else { "📄" }}
                        </span>
                        <div>
                            <h3>{file.name.clone()}</h3>
                            <p class="file-detail">
                                {format!(
                                    "{} • Uploaded {}",
                                    file.size_label(),
                                    file.uploaded_at.format("%-m/%-d/%Y")
                                )}
                            </p>
                        </div>
                    </div>

                    {card_action(file.status, analyzing_this, state.can_analyze(file.id), report, on_analyze)}
                </div>

                if let Some(report) = report {
                    <div class="evidence-report">
                        <div class="report-columns">
                            <div>
                                <h4>{"Threats Detected"}</h4>
                                <ul>
                                    { for report.threats.iter().map(|threat| html! {
                                        <li>{format!("⚠️ {threat}")}</li>
                                    }) }
                                </ul>
                            </div>
                            <div>
                                <h4>{"Recommendations"}</h4>
                                <ul>
                                    { for report.recommendations.iter().map(|rec| html! {
                                        <li>{format!("✅ {rec}")}</li>
                                    }) }
                                </ul>
                            </div>
                        </div>
                        <div class="report-footer">
                            <span>
                                {"Risk Score: "}
                                <strong>{format!("{}/100", report.risk_score)}</strong>
                            </span>
                            <span>
                                {format!("Analyzed: {}", report.analyzed_at.format("%-m/%-d/%Y %H:%M"))}
                            </span>
                        </div>
                    </div>
                }
            </div>
        }
    });

    html! {
        <section class="evidence-analysis">
            <div class="section-header">
                <h1>{"📷 Evidence Analysis"}</h1>
                <p>{"Upload screenshots, emails, or documents to analyze for potential scams and fraud"}</p>
            </div>

            <div class="evidence-layout">
                <div class="evidence-main">
                    <div class="upload-panel">
                        <h2>{"Upload Evidence"}</h2>
                        <div class="upload-dropzone">
                            <input
                                type="file"
                                accept="image/*,.pdf,.doc,.docx,.txt,.eml"
                                id="evidence-upload"
                                class="hidden-input"
                                multiple=true
                                onchange={on_file_change}
                            />
                            <label for="evidence-upload" class="upload-label">
                                <span class="upload-icon">{"⬆️"}</span>
                                <h3>{"Upload Your Evidence"}</h3>
                                <p>{"Drag and drop files here or click to browse"}</p>
                                <p class="upload-hint">
                                    {"Supports: Images, PDFs, Documents, Email files (Max 10MB each)"}
                                </p>
                            </label>
                        </div>
                    </div>

                    if !state.files.is_empty() {
                        <div class="uploaded-panel">
                            <h2>{"Uploaded Evidence"}</h2>
                            { for file_cards }
                        </div>
                    }
                </div>

                <aside class="evidence-sidebar">
                    <div class="stats-panel">
                        <h3>{"Analysis Statistics"}</h3>
                        <div class="stat-row">
                            <span>{"Files Analyzed"}</span>
                            <strong>{state.analyzed_count()}</strong>
                        </div>
                        <div class="stat-row">
                            <span>{"Threats Found"}</span>
                            <strong class="risk-high">{state.high_risk_count()}</strong>
                        </div>
                        <div class="stat-row">
                            <span>{"Safe Files"}</span>
                            <strong class="risk-low">{state.low_risk_count()}</strong>
                        </div>
                    </div>

                    <div class="tips-panel">
                        <h3>{"Analysis Tips"}</h3>
                        <p>{"Upload clear screenshots for better analysis accuracy"}</p>
                        <p>{"Include email headers when uploading suspicious emails"}</p>
                        <p>{"Multiple file formats supported for comprehensive analysis"}</p>
                    </div>
                </aside>
            </div>
        </section>
    }
}

fn card_action(
    status: EvidenceStatus,
    analyzing_this: bool,
    can_analyze: bool,
    report: Option<&EvidenceReport>,
    on_analyze: Callback<MouseEvent>,
) -> Html {
    if status == EvidenceStatus::Uploaded {
        html! {
            <button class="btn-analyze" disabled={!can_analyze} onclick={on_analyze}>
                {if analyzing_this { "Analyzing..." } else { "Analyze" }}
            </button>
        }
    } else if let Some(report) = report {
        html! {
            <span class={classes!("risk-badge", report.risk_level.css_class())}>
                {report.risk_level.label()}
            </span>
        }
    } else {
        html! {}
    }
}
