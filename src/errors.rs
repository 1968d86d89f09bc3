use thiserror::Error;

use crate::app::dataset::DatasetError;
use crate::app::settings::SettingsError;
use crate::runner::terminal::TerminalError;

/// Library-level error: everything that can fail before or after the
/// dashboard loop. The loop itself reports through `anyhow`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Terminal(#[from] TerminalError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),
}
