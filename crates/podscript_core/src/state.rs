use crate::request::{FormState, InputMode};
use crate::result::ResultModel;
use crate::view_model::{render_result, AppViewModel, RenderedResult};

pub type RequestId = u64;

pub const STATUS_GENERATING: &str = "Generating…";
pub const STATUS_DONE: &str = "Done.";
pub const STATUS_SCRIPT_COPIED: &str = "Script copied to clipboard.";
pub const STATUS_NOTES_COPIED: &str = "Show notes copied to clipboard.";
pub const STATUS_NOTHING_TO_EXPORT: &str = "Nothing to export yet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Last known reachability of the generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceHealth {
    #[default]
    Unknown,
    Checking,
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    form: FormState,
    submission: SubmissionState,
    in_flight: Option<RequestId>,
    next_request_id: RequestId,
    status: String,
    result_visible: bool,
    rendered: Option<RenderedResult>,
    last_result: Option<ResultModel>,
    health: ServiceHealth,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            form: FormState::default(),
            submission: SubmissionState::Idle,
            in_flight: None,
            next_request_id: 1,
            status: String::new(),
            result_visible: false,
            rendered: None,
            last_result: None,
            health: ServiceHealth::Unknown,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            mode: self.form.mode,
            submission: self.submission,
            submit_enabled: self.submit_enabled(),
            status: self.status.clone(),
            result_visible: self.result_visible,
            actions_visible: self.last_result.is_some(),
            result: self.rendered.clone(),
            health: self.health,
            dirty: self.dirty,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    /// The submit control is disabled exactly while a request is in flight.
    pub fn submit_enabled(&self) -> bool {
        self.submission != SubmissionState::Submitting
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    /// Most recent successful result, kept for export actions.
    pub fn last_result(&self) -> Option<&ResultModel> {
        self.last_result.as_ref()
    }

    pub fn health(&self) -> ServiceHealth {
        self.health
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn form_mut(&mut self) -> &mut FormState {
        self.dirty = true;
        &mut self.form
    }

    pub(crate) fn select_mode(&mut self, mode: InputMode) {
        if self.form.mode != mode {
            self.form.mode = mode;
            self.dirty = true;
        }
    }

    /// Idle/Succeeded/Failed -> Submitting. Returns the id of the new request.
    pub(crate) fn begin_submission(&mut self) -> RequestId {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.submission = SubmissionState::Submitting;
        self.in_flight = Some(request_id);
        self.result_visible = false;
        self.status = STATUS_GENERATING.to_string();
        self.dirty = true;
        request_id
    }

    /// Submitting -> Succeeded. The new result replaces the previous one whole.
    pub(crate) fn complete_submission(&mut self, result: ResultModel) {
        self.rendered = Some(render_result(&result));
        self.last_result = Some(result);
        self.result_visible = true;
        self.submission = SubmissionState::Succeeded;
        self.in_flight = None;
        self.status = STATUS_DONE.to_string();
        self.dirty = true;
    }

    /// Submitting -> Failed. The previous result stays available for exports.
    pub(crate) fn fail_submission(&mut self, message: &str) {
        self.submission = SubmissionState::Failed;
        self.in_flight = None;
        self.status = format!("Error: {message}");
        self.dirty = true;
    }

    pub(crate) fn set_health(&mut self, health: ServiceHealth) {
        if self.health != health {
            self.health = health;
            self.dirty = true;
        }
    }

    pub(crate) fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.dirty = true;
    }
}
