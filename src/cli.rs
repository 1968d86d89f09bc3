use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::dataset::StaticDataset;
use crate::errors::AppError;

#[derive(Parser, Debug)]
#[command(name = "travelZoom", version)]
#[command(about = "Browse countries and their places in two synchronized carousels")]
pub struct Cli {
    /// Dataset file (.toml or .json). The built-in demo set is used when omitted.
    #[arg(long, short = 'd', global = true)]
    pub dataset: Option<PathBuf>,

    /// Log file. Defaults to travelZoom.log in the user cache directory.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Theme name (`dark`, `light`) or a theme TOML file, for this session.
    #[arg(long, global = true)]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Open the dashboard (default).
    #[default]
    Run,
    /// Validate the dataset and print a one-line summary.
    Check,
}

impl Cli {
    pub fn action(&self) -> Command {
        self.command.unwrap_or_default()
    }

    pub fn load_dataset(&self) -> Result<StaticDataset, AppError> {
        match &self.dataset {
            Some(path) => Ok(StaticDataset::from_path(path)?),
            None => Ok(StaticDataset::demo()),
        }
    }
}
