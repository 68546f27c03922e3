use crate::{InputMode, ResultModel, ServiceHealth, SubmissionState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub mode: InputMode,
    pub submission: SubmissionState,
    pub submit_enabled: bool,
    pub status: String,
    pub result_visible: bool,
    pub actions_visible: bool,
    pub result: Option<RenderedResult>,
    pub health: ServiceHealth,
    pub dirty: bool,
}

impl AppViewModel {
    /// Whether the input panel for `mode` is shown.
    pub fn shows_input(&self, mode: InputMode) -> bool {
        self.mode == mode
    }
}

/// On-screen projection of a result, defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedResult {
    pub title: String,
    pub intro: String,
    pub segments: Vec<SegmentBlock>,
    pub outro: String,
    pub notes: Vec<NoteItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentBlock {
    pub heading: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    pub time: Option<String>,
    pub note: String,
}

/// Builds a fresh rendering; nothing from a previous result carries over.
pub fn render_result(result: &ResultModel) -> RenderedResult {
    let script = result.resolved();
    RenderedResult {
        title: script.title.to_string(),
        intro: script.intro.to_string(),
        segments: script
            .segments
            .iter()
            .map(|segment| SegmentBlock {
                heading: segment.heading.to_string(),
                content: segment.content.to_string(),
            })
            .collect(),
        outro: script.outro.to_string(),
        notes: script
            .show_notes
            .iter()
            .map(|note| NoteItem {
                time: note.time.map(ToOwned::to_owned),
                note: note.note.to_string(),
            })
            .collect(),
    }
}
