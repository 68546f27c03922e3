//! Podscript core: pure submission state machine, request shaping, result
//! model and export serializers.
mod effect;
mod export;
mod msg;
mod request;
mod result;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use export::{
    build_markdown, build_plain_notes, build_plain_script, markdown_filename, ExportKind,
};
pub use msg::Msg;
pub use request::{
    build_request, FormState, GenerationParams, InputMode, JsonRequest, RequestPayload,
    SelectedFile, ValidationError, DEFAULT_MAX_WORDS, DEFAULT_MODEL, DEFAULT_SPEAKING_WPM,
    GENERATE_FILE_PATH, GENERATE_PATH,
};
pub use result::{
    ResolvedNote, ResolvedScript, ResolvedSegment, ResultModel, Segment, ShowNote,
    DEFAULT_SEGMENT_HEADING, DEFAULT_TITLE,
};
pub use state::{
    AppState, RequestId, ServiceHealth, SubmissionState, STATUS_DONE, STATUS_GENERATING,
    STATUS_NOTES_COPIED, STATUS_NOTHING_TO_EXPORT, STATUS_SCRIPT_COPIED,
};
pub use update::update;
pub use view_model::{render_result, AppViewModel, NoteItem, RenderedResult, SegmentBlock};
