use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use app_logging::{app_debug, app_info};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("download directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Saves an exported Markdown document where the user can pick it up.
pub trait MarkdownDownloader: Send + Sync {
    fn save(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError>;
}

/// Writes downloads into a fixed directory, replacing same-named files.
///
/// The document lands in a temp file beside the target and is renamed over
/// it, so a reader never sees half an export.
#[derive(Debug, Clone)]
pub struct DirectoryDownloader {
    dir: PathBuf,
}

impl DirectoryDownloader {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn prepare_dir(&self) -> Result<(), PersistError> {
        match fs::metadata(&self.dir) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(PersistError::OutputDir(format!(
                "{} is not a directory",
                self.dir.display()
            ))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                app_debug!("Creating download directory {:?}", self.dir);
                fs::create_dir_all(&self.dir).map_err(|e| PersistError::OutputDir(e.to_string()))
            }
            Err(err) => Err(PersistError::OutputDir(err.to_string())),
        }
    }

    fn stage(&self, content: &str) -> Result<NamedTempFile, PersistError> {
        let mut staged = NamedTempFile::new_in(&self.dir)?;
        staged.write_all(content.as_bytes())?;
        staged.as_file_mut().sync_all()?;
        Ok(staged)
    }
}

impl MarkdownDownloader for DirectoryDownloader {
    fn save(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        self.prepare_dir()?;
        let target = self.dir.join(filename);
        // Dropping an unpersisted temp file deletes it.
        self.stage(content)?
            .persist(&target)
            .map_err(|err| PersistError::Io(err.error))?;
        app_info!("Saved markdown export to {:?} ({} bytes)", target, content.len());
        Ok(target)
    }
}
