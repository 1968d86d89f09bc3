use clap::Parser;

use travelZoom::app::settings::{self, Settings};
use travelZoom::cli::{Cli, Command};
use travelZoom::{logging, run_app};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.action() {
        Command::Check => {
            let dataset = cli.load_dataset()?;
            println!("{}", dataset.summary());
            Ok(())
        }
        Command::Run => {
            let _guard = logging::init_logging(cli.log_file.clone())?;
            if let Err(e) = settings::ensure_dirs_exist() {
                tracing::warn!(error = %e, "could not create config directories");
            }
            let dataset = cli.load_dataset()?;
            let mut settings = settings::load_settings().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "falling back to default settings");
                Settings::default()
            });
            if let Some(theme) = cli.theme.clone() {
                settings.theme = theme;
            }
            run_app(&dataset, settings)
        }
    }
}
