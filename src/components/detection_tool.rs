use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_detection;

/// Public spam-detection demo: upload an email screenshot, run a mock scan,
/// show exactly one verdict.
#[function_component(DetectionTool)]
pub fn detection_tool() -> Html {
    let detection = use_detection();
    let state = (*detection.state).clone();

    let on_file_change = {
        let upload = detection.upload.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                upload.emit(file.name());
            }
        })
    };

    let on_scan = detection.scan.reform(|_: MouseEvent| ());

    html! {
        <section class="detection-tool">
            <div class="section-header">
                <h2>{"Email Spam Detection Tool"}</h2>
                <p>{"Upload a screenshot of an email to analyze for potential spam"}</p>
            </div>

            <div class="detection-panel">
                <div class="form-group">
                    <label>{"Upload Media File"}</label>
                    <div class="upload-dropzone">
                        <input
                            type="file"
                            accept="image/*"
                            id="file-upload"
                            class="hidden-input"
                            onchange={on_file_change}
                        />
                        <label for="file-upload" class="upload-label">
                            <span class="upload-icon">{"⬆️"}</span>
                            <p>{"Click to upload or drag and drop"}</p>
                            <p class="upload-hint">{"Supports images (Max 10MB)"}</p>
                        </label>
                    </div>
                </div>

                if let Some(file_name) = &state.uploaded_file {
                    <div class="uploaded-file-row">
                        <span class="file-icon">{"🖼️"}</span>
                        <span class="file-name">{file_name.clone()}</span>
                        <button
                            class="btn-scan"
                            disabled={!state.can_scan()}
                            onclick={on_scan}
                        >
                            if state.is_scanning {
                                {"Analyzing..."}
                            } else {
                                {"Scan for Spam"}
                            }
                        </button>
                    </div>
                }

                if state.is_scanning {
                    <div class="scan-progress">
                        <span class="spinner"></span>
                        <span>{"Analyzing content..."}</span>
                        <div class="progress-bar"><div class="progress-fill"></div></div>
                        <p class="progress-hint">{"Running advanced AI detection algorithms..."}</p>
                    </div>
                }

                if let Some(report) = &state.result {
                    <div class={classes!("scan-result", if report.outcome.is_clean() { "clean" } else { "spam" })}>
                        <div class="result-headline">
                            <span class="result-icon">
                                {if report.outcome.is_clean() { "✅" } else { "⚠️" }}
                            </span>
                            <span>{report.outcome.headline()}</span>
                        </div>
                        <p>{report.outcome.summary()}</p>
                        <div class="result-meta">
                            <span>
                                {"Confidence Score: "}
                                <strong>{format!("{}%", report.confidence)}</strong>
                            </span>
                            <span>
                                {"Analysis Time: "}
                                <strong>{format!("{} seconds", report.analysis_secs)}</strong>
                            </span>
                        </div>
                    </div>
                }
            </div>
        </section>
    }
}
