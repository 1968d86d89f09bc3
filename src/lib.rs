pub mod app;
pub mod cli;
pub mod errors;
pub mod input;
pub mod logging;
#[path = "runner/mod.rs"]
pub mod runner;
#[path = "ui/mod.rs"]
pub mod ui;

pub use crate::app::{App, Dataset, Item, Group, Navigator, RenderSequence, Selection, StaticDataset, Strip};
pub use crate::errors::AppError;
pub use crate::runner::run_app;
