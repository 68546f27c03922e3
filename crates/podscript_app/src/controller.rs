use std::collections::VecDeque;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use app_logging::{app_debug, app_info};
use podscript_core::{update, AppState, AppViewModel, Msg, ResultModel};
use podscript_engine::{
    Clipboard, DirectoryDownloader, EngineHandle, GenerationClient, GenerationError,
    MarkdownDownloader, MemoryClipboard, ReqwestGenerationClient,
};

use crate::effects::EffectRunner;
use crate::ControllerConfig;

#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error("failed to build generation client: {0}")]
    Client(#[from] GenerationError),
    #[error("failed to start engine: {0}")]
    Engine(#[from] io::Error),
}

/// Owns the submission state machine and the single "last result".
///
/// Every user action enters through [`SubmissionController::dispatch`]; engine
/// completions are fed back by [`SubmissionController::pump`] or
/// [`SubmissionController::settle`].
pub struct SubmissionController {
    state: AppState,
    runner: EffectRunner,
}

impl SubmissionController {
    /// Builds the reqwest client and a directory downloader from `config`.
    ///
    /// The clipboard is kept in memory; hosts with a real clipboard use
    /// [`SubmissionController::with_parts`].
    pub fn new(config: ControllerConfig) -> Result<Self, ControllerError> {
        if let Some((destination, level)) = config.log {
            app_logging::initialize(destination, level);
        }
        app_info!(
            "Starting controller base_url={} downloads_dir={:?}",
            config.client.base_url,
            config.downloads_dir
        );
        let client = Arc::new(ReqwestGenerationClient::new(config.client)?);
        let downloader = Arc::new(DirectoryDownloader::new(config.downloads_dir));
        Self::with_parts(client, Arc::new(MemoryClipboard::new()), downloader)
            .map_err(ControllerError::Engine)
    }

    pub fn with_parts(
        client: Arc<dyn GenerationClient>,
        clipboard: Arc<dyn Clipboard>,
        downloader: Arc<dyn MarkdownDownloader>,
    ) -> io::Result<Self> {
        let engine = EngineHandle::new(client, clipboard)?;
        Ok(Self {
            state: AppState::new(),
            runner: EffectRunner::new(engine, downloader),
        })
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn last_result(&self) -> Option<&ResultModel> {
        self.state.last_result()
    }

    /// Whether engine work (a generation, clipboard write or health check) is outstanding.
    pub fn is_busy(&self) -> bool {
        self.runner.pending() > 0
    }

    /// Applies one message and starts its effects. Returns the view when a
    /// re-render is due.
    pub fn dispatch(&mut self, msg: Msg) -> Option<AppViewModel> {
        let mut dirty = false;
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let before = self.state.submission();
            let state = std::mem::take(&mut self.state);
            let (mut state, effects) = update(state, msg);
            dirty |= state.consume_dirty();
            if state.submission() != before {
                app_debug!("Submission {:?} -> {:?}", before, state.submission());
            }
            self.state = state;
            // Synchronous effect outcomes are applied before returning.
            inbox.extend(self.runner.enqueue(effects));
        }
        dirty.then(|| self.state.view())
    }

    /// Applies every engine completion that is already available.
    pub fn pump(&mut self) -> Option<AppViewModel> {
        let mut latest = None;
        while let Some(msg) = self.runner.poll() {
            if let Some(view) = self.dispatch(msg) {
                latest = Some(view);
            }
        }
        latest
    }

    /// Blocks until no engine work is outstanding or `timeout` elapses.
    pub fn settle(&mut self, timeout: Duration) -> AppViewModel {
        let deadline = Instant::now() + timeout;
        while self.is_busy() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            if let Some(msg) = self.runner.wait(remaining) {
                self.dispatch(msg);
            }
        }
        self.state.view()
    }
}
