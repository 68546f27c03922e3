use std::path::PathBuf;

use app_logging::LogDestination;
use log::LevelFilter;
use podscript_engine::ClientSettings;

/// Everything a host needs to start a controller.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    pub client: ClientSettings,
    /// Where Markdown downloads land.
    pub downloads_dir: PathBuf,
    /// `None` leaves logger setup to the host.
    pub log: Option<(LogDestination, LevelFilter)>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        let downloads_dir = std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join("downloads");
        Self {
            client: ClientSettings::default(),
            downloads_dir,
            log: None,
        }
    }
}
