use std::sync::Arc;
use std::time::Duration;

use app_logging::{app_info, app_warn};
use podscript_core::{Effect, Msg};
use podscript_engine::{EngineEvent, EngineHandle, MarkdownDownloader};

/// Executes core effects and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    downloader: Arc<dyn MarkdownDownloader>,
    pending: usize,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, downloader: Arc<dyn MarkdownDownloader>) -> Self {
        Self {
            engine,
            downloader,
            pending: 0,
        }
    }

    /// Number of engine commands that have not reported back yet.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Starts every effect. Effects that settle synchronously may yield messages.
    pub fn enqueue(&mut self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut immediate = Vec::new();
        for effect in effects {
            match effect {
                Effect::Generate {
                    request_id,
                    payload,
                } => {
                    app_info!(
                        "Generate request_id={} mode={}",
                        request_id,
                        payload.mode().as_str()
                    );
                    match self.engine.generate(request_id, payload) {
                        Ok(()) => self.pending += 1,
                        Err(err) => immediate.push(Msg::GenerationFailed {
                            request_id,
                            message: err.to_string(),
                        }),
                    }
                }
                Effect::WriteClipboard { kind, text } => {
                    match self.engine.write_clipboard(kind, text) {
                        Ok(()) => self.pending += 1,
                        Err(err) => immediate.push(Msg::ExportFailed {
                            message: err.to_string(),
                        }),
                    }
                }
                Effect::CheckHealth => match self.engine.check_health() {
                    Ok(()) => self.pending += 1,
                    Err(_) => immediate.push(Msg::HealthChecked { up: false }),
                },
                Effect::SaveMarkdown { filename, content } => {
                    if let Err(err) = self.downloader.save(&filename, &content) {
                        app_warn!("Saving {} failed: {}", filename, err);
                        immediate.push(Msg::ExportFailed {
                            message: err.to_string(),
                        });
                    }
                }
            }
        }
        immediate
    }

    pub fn poll(&mut self) -> Option<Msg> {
        let event = self.engine.try_recv()?;
        Some(self.settle(event))
    }

    pub fn wait(&mut self, timeout: Duration) -> Option<Msg> {
        let event = self.engine.recv_timeout(timeout)?;
        Some(self.settle(event))
    }

    fn settle(&mut self, event: EngineEvent) -> Msg {
        self.pending = self.pending.saturating_sub(1);
        map_event(event)
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::GenerationCompleted { request_id, result } => match result {
            Ok(result) => Msg::GenerationSucceeded { request_id, result },
            Err(err) => {
                app_warn!("Request {} failed: {}", request_id, err);
                Msg::GenerationFailed {
                    request_id,
                    message: err.to_string(),
                }
            }
        },
        EngineEvent::ClipboardCompleted { kind, result } => match result {
            Ok(()) => Msg::ClipboardWritten { kind },
            Err(err) => Msg::ExportFailed {
                message: err.to_string(),
            },
        },
        EngineEvent::HealthChecked { result } => match result {
            Ok(up) => Msg::HealthChecked { up },
            Err(err) => {
                app_warn!("Health check failed: {}", err);
                Msg::HealthChecked { up: false }
            }
        },
    }
}
