//! Podscript app: the submission controller that wires the pure core to the
//! engine's IO.
mod config;
mod controller;
mod effects;

pub use app_logging::LogDestination;
pub use config::ControllerConfig;
pub use controller::{ControllerError, SubmissionController};
pub use effects::EffectRunner;
pub use log::LevelFilter;
