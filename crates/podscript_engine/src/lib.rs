//! Podscript engine: generation client, clipboard and download IO.
mod client;
mod clipboard;
mod download;
mod engine;
mod types;

pub use client::{
    ClientSettings, GenerationClient, ReqwestGenerationClient, DEFAULT_BASE_URL, HEALTH_PATH,
};
pub use clipboard::{Clipboard, MemoryClipboard, NoClipboard};
pub use download::{DirectoryDownloader, MarkdownDownloader, PersistError};
pub use engine::EngineHandle;
pub use types::{ClipboardError, EngineEvent, EngineStopped, GenerationError};
