use app_logging::{app_debug, app_warn};

use crate::export::{build_markdown, build_plain_notes, build_plain_script, markdown_filename};
use crate::state::{STATUS_NOTES_COPIED, STATUS_NOTHING_TO_EXPORT, STATUS_SCRIPT_COPIED};
use crate::{build_request, AppState, Effect, ExportKind, Msg, ServiceHealth, SubmissionState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ModeSelected(mode) => {
            state.select_mode(mode);
            Vec::new()
        }
        Msg::TextChanged(text) => {
            state.form_mut().text = text;
            Vec::new()
        }
        Msg::UrlChanged(url) => {
            state.form_mut().url = url;
            Vec::new()
        }
        Msg::FileSelected(file) => {
            state.form_mut().file = file;
            Vec::new()
        }
        Msg::ModelChanged(model) => {
            state.form_mut().model = model;
            Vec::new()
        }
        Msg::MaxWordsChanged(raw) => {
            state.form_mut().max_words = raw;
            Vec::new()
        }
        Msg::SpeakingWpmChanged(raw) => {
            state.form_mut().speaking_wpm = raw;
            Vec::new()
        }
        Msg::IncludeTimestampsToggled(checked) => {
            state.form_mut().include_timestamps = checked;
            Vec::new()
        }
        Msg::SubmitClicked => {
            if !state.submit_enabled() {
                // Control is disabled while a request is in flight.
                return (state, Vec::new());
            }
            let request_id = state.begin_submission();
            match build_request(state.form()) {
                Ok(payload) => {
                    app_debug!(
                        "Submitting request_id={} mode={}",
                        request_id,
                        payload.mode().as_str()
                    );
                    vec![Effect::Generate {
                        request_id,
                        payload,
                    }]
                }
                Err(err) => {
                    app_debug!("Submission {} rejected: {}", request_id, err);
                    state.fail_submission(&err.to_string());
                    Vec::new()
                }
            }
        }
        Msg::GenerationSucceeded { request_id, result } => {
            if is_current(&state, request_id) {
                state.complete_submission(result);
            } else {
                app_warn!("Ignoring stale result for request_id={}", request_id);
            }
            Vec::new()
        }
        Msg::GenerationFailed {
            request_id,
            message,
        } => {
            if is_current(&state, request_id) {
                state.fail_submission(&message);
            } else {
                app_warn!("Ignoring stale failure for request_id={}", request_id);
            }
            Vec::new()
        }
        Msg::CopyScriptClicked => copy_effect(&mut state, ExportKind::Script),
        Msg::CopyNotesClicked => copy_effect(&mut state, ExportKind::Notes),
        Msg::DownloadMarkdownClicked => match state.last_result() {
            Some(result) => vec![Effect::SaveMarkdown {
                filename: markdown_filename(result),
                content: build_markdown(result),
            }],
            None => {
                state.set_status(STATUS_NOTHING_TO_EXPORT);
                Vec::new()
            }
        },
        Msg::ClipboardWritten { kind } => {
            state.set_status(match kind {
                ExportKind::Script => STATUS_SCRIPT_COPIED,
                ExportKind::Notes => STATUS_NOTES_COPIED,
            });
            Vec::new()
        }
        Msg::ExportFailed { message } => {
            state.set_status(format!("Error: {message}"));
            Vec::new()
        }
        Msg::HealthCheckRequested => {
            if state.health() == ServiceHealth::Checking {
                return (state, Vec::new());
            }
            state.set_health(ServiceHealth::Checking);
            vec![Effect::CheckHealth]
        }
        Msg::HealthChecked { up } => {
            state.set_health(if up {
                ServiceHealth::Up
            } else {
                ServiceHealth::Down
            });
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn is_current(state: &AppState, request_id: crate::RequestId) -> bool {
    state.submission() == SubmissionState::Submitting && state.in_flight() == Some(request_id)
}

/// Export text is built here, from the stored result, before any await.
fn copy_effect(state: &mut AppState, kind: ExportKind) -> Vec<Effect> {
    let Some(result) = state.last_result() else {
        state.set_status(STATUS_NOTHING_TO_EXPORT);
        return Vec::new();
    };
    let text = match kind {
        ExportKind::Script => build_plain_script(result),
        ExportKind::Notes => build_plain_notes(result),
    };
    vec![Effect::WriteClipboard { kind, text }]
}
