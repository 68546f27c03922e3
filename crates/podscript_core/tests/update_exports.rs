use podscript_core::{
    build_markdown, build_plain_notes, build_plain_script, update, AppState, Effect, ExportKind,
    Msg, ResultModel, ShowNote, STATUS_NOTES_COPIED, STATUS_NOTHING_TO_EXPORT,
    STATUS_SCRIPT_COPIED,
};

fn state_with_result(result: ResultModel) -> AppState {
    let (state, _) = update(AppState::new(), Msg::TextChanged("article".to_string()));
    let (state, _) = update(state, Msg::SubmitClicked);
    let request_id = state.in_flight().expect("request in flight");
    let (state, _) = update(state, Msg::GenerationSucceeded { request_id, result });
    state
}

fn sample() -> ResultModel {
    ResultModel {
        title: Some("Ep 1".to_string()),
        intro: Some("Hi".to_string()),
        show_notes: vec![ShowNote {
            time: Some("00:10".to_string()),
            note: "x".to_string(),
        }],
        ..ResultModel::default()
    }
}

#[test]
fn exports_without_result_are_signalled_noops() {
    for msg in [
        Msg::CopyScriptClicked,
        Msg::CopyNotesClicked,
        Msg::DownloadMarkdownClicked,
    ] {
        let (state, effects) = update(AppState::new(), msg);
        assert!(effects.is_empty());
        assert_eq!(state.view().status, STATUS_NOTHING_TO_EXPORT);
    }
}

#[test]
fn copy_script_emits_clipboard_write() {
    let state = state_with_result(sample());
    let (state, effects) = update(state, Msg::CopyScriptClicked);

    assert_eq!(
        effects,
        vec![Effect::WriteClipboard {
            kind: ExportKind::Script,
            text: build_plain_script(&sample()),
        }]
    );

    let (state, _) = update(
        state,
        Msg::ClipboardWritten {
            kind: ExportKind::Script,
        },
    );
    assert_eq!(state.view().status, STATUS_SCRIPT_COPIED);
}

#[test]
fn copy_notes_emits_clipboard_write() {
    let state = state_with_result(sample());
    let (state, effects) = update(state, Msg::CopyNotesClicked);

    assert_eq!(
        effects,
        vec![Effect::WriteClipboard {
            kind: ExportKind::Notes,
            text: build_plain_notes(&sample()),
        }]
    );

    let (state, _) = update(
        state,
        Msg::ClipboardWritten {
            kind: ExportKind::Notes,
        },
    );
    assert_eq!(state.view().status, STATUS_NOTES_COPIED);
}

#[test]
fn download_emits_markdown_save() {
    let state = state_with_result(sample());
    let (_state, effects) = update(state, Msg::DownloadMarkdownClicked);

    assert_eq!(
        effects,
        vec![Effect::SaveMarkdown {
            filename: "ep-1.md".to_string(),
            content: build_markdown(&sample()),
        }]
    );
}

#[test]
fn exports_read_the_last_successful_result_during_a_new_submission() {
    let state = state_with_result(sample());
    let (state, _) = update(state, Msg::SubmitClicked);
    assert!(!state.submit_enabled());

    let (state, effects) = update(state, Msg::CopyNotesClicked);
    assert_eq!(
        effects,
        vec![Effect::WriteClipboard {
            kind: ExportKind::Notes,
            text: "[00:10] x".to_string(),
        }]
    );
    assert!(!state.submit_enabled());
}

#[test]
fn export_failure_is_surfaced_in_status() {
    let state = state_with_result(sample());
    let (state, _) = update(
        state,
        Msg::ExportFailed {
            message: "clipboard unavailable".to_string(),
        },
    );
    assert_eq!(state.view().status, "Error: clipboard unavailable");
    assert!(state.last_result().is_some());
}
