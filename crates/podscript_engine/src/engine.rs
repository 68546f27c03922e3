use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use app_logging::{app_debug, app_error, app_warn};
use podscript_core::{ExportKind, RequestId, RequestPayload};

use crate::{
    Clipboard, ClipboardError, EngineEvent, EngineStopped, GenerationClient, GenerationError,
};

enum EngineCommand {
    Generate {
        request_id: RequestId,
        payload: RequestPayload,
    },
    WriteClipboard {
        kind: ExportKind,
        text: String,
    },
    CheckHealth,
}

impl EngineCommand {
    fn tag(&self) -> CommandTag {
        match self {
            EngineCommand::Generate { request_id, .. } => CommandTag::Generate(*request_id),
            EngineCommand::WriteClipboard { kind, .. } => CommandTag::Clipboard(*kind),
            EngineCommand::CheckHealth => CommandTag::Health,
        }
    }
}

/// What a command was, kept so a task that dies still reports back.
#[derive(Debug, Clone, Copy)]
enum CommandTag {
    Generate(RequestId),
    Clipboard(ExportKind),
    Health,
}

impl CommandTag {
    fn aborted(self, message: String) -> EngineEvent {
        match self {
            CommandTag::Generate(request_id) => EngineEvent::GenerationCompleted {
                request_id,
                result: Err(GenerationError::Network(message)),
            },
            CommandTag::Clipboard(kind) => EngineEvent::ClipboardCompleted {
                kind,
                result: Err(ClipboardError::WriteFailed(message)),
            },
            CommandTag::Health => EngineEvent::HealthChecked {
                result: Err(GenerationError::Network(message)),
            },
        }
    }
}

/// Runs network calls and clipboard writes on a background tokio runtime.
///
/// Each command settles with exactly one [`EngineEvent`], even if its task panics.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(
        client: Arc<dyn GenerationClient>,
        clipboard: Arc<dyn Clipboard>,
    ) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("podscript-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let client = client.clone();
                    let clipboard = clipboard.clone();
                    let event_tx = event_tx.clone();
                    let tag = command.tag();
                    runtime.spawn(async move {
                        let task = tokio::spawn(async move {
                            handle_command(client.as_ref(), clipboard.as_ref(), command).await
                        });
                        let event = match task.await {
                            Ok(event) => event,
                            Err(err) => {
                                app_error!("Engine task failed: {}", err);
                                tag.aborted(err.to_string())
                            }
                        };
                        let _ = event_tx.send(event);
                    });
                }
                app_debug!("Engine command channel closed; shutting down");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn generate(
        &self,
        request_id: RequestId,
        payload: RequestPayload,
    ) -> Result<(), EngineStopped> {
        self.send(EngineCommand::Generate {
            request_id,
            payload,
        })
    }

    pub fn write_clipboard(
        &self,
        kind: ExportKind,
        text: String,
    ) -> Result<(), EngineStopped> {
        self.send(EngineCommand::WriteClipboard { kind, text })
    }

    pub fn check_health(&self) -> Result<(), EngineStopped> {
        self.send(EngineCommand::CheckHealth)
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    fn send(&self, command: EngineCommand) -> Result<(), EngineStopped> {
        self.cmd_tx.send(command).map_err(|_| {
            app_warn!("Engine thread is gone; command dropped");
            EngineStopped
        })
    }
}

async fn handle_command(
    client: &dyn GenerationClient,
    clipboard: &dyn Clipboard,
    command: EngineCommand,
) -> EngineEvent {
    match command {
        EngineCommand::Generate {
            request_id,
            payload,
        } => {
            let result = client.generate(&payload).await;
            EngineEvent::GenerationCompleted { request_id, result }
        }
        EngineCommand::WriteClipboard { kind, text } => {
            let result = clipboard.write_text(text).await;
            EngineEvent::ClipboardCompleted { kind, result }
        }
        EngineCommand::CheckHealth => EngineEvent::HealthChecked {
            result: client.health().await,
        },
    }
}
