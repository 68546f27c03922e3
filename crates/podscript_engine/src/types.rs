use podscript_core::{ExportKind, RequestId, ResultModel};

/// Why a generation call did not produce a result.
///
/// `Display` is the text shown to the user, so it carries the message alone.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// The service answered with a non-2xx status.
    #[error("{message}")]
    Transport { status: u16, message: String },
    /// The call could not complete.
    #[error("{0}")]
    Network(String),
    /// A 2xx answer whose body is not a generation result.
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("invalid API base address {base}: {message}")]
    InvalidBaseUrl { base: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("engine is not running")]
pub struct EngineStopped;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    GenerationCompleted {
        request_id: RequestId,
        result: Result<ResultModel, GenerationError>,
    },
    ClipboardCompleted {
        kind: ExportKind,
        result: Result<(), ClipboardError>,
    },
    /// `Ok(true)` when the service answered `GET /health` with `ok`.
    HealthChecked {
        result: Result<bool, GenerationError>,
    },
}
