#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User switched the input mode.
    ModeSelected(crate::InputMode),
    /// User edited the pasted text.
    TextChanged(String),
    /// User edited the URL box.
    UrlChanged(String),
    /// User picked (or cleared) a file.
    FileSelected(Option<crate::SelectedFile>),
    ModelChanged(String),
    MaxWordsChanged(String),
    SpeakingWpmChanged(String),
    IncludeTimestampsToggled(bool),
    /// User clicked Generate.
    SubmitClicked,
    CopyScriptClicked,
    CopyNotesClicked,
    DownloadMarkdownClicked,
    /// Engine returned a parsed result for the in-flight request.
    GenerationSucceeded {
        request_id: crate::RequestId,
        result: crate::ResultModel,
    },
    /// Engine failed the in-flight request (HTTP status, network or decode).
    GenerationFailed {
        request_id: crate::RequestId,
        message: String,
    },
    /// Clipboard write settled successfully.
    ClipboardWritten { kind: crate::ExportKind },
    /// A clipboard write or file save failed.
    ExportFailed { message: String },
    /// Host asked whether the service is reachable.
    HealthCheckRequested,
    /// Health check settled; `up` is false on any error or a non-`ok` status.
    HealthChecked { up: bool },
    /// Fallback for placeholder wiring.
    NoOp,
}
