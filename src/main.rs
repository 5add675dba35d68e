// Entry point for the quote collective TUI.
// Resolves settings, installs logging, and runs the app on a raw-mode terminal.

mod api;
mod app;
mod config;
mod error;
mod logging;
mod state;
mod ui;

use std::io::stdout;
use std::process::ExitCode;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tracing::{error, info};

use crate::app::App;
use crate::config::{Args, Settings};
use crate::error::Result;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "exiting with error");
            eprintln!("quote-collective: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let settings = Settings::load(args)?;
    logging::init(settings.log_path.as_deref())?;
    info!(api_url = %settings.api_url, view = ?settings.start_view, "starting");

    let mut app = App::new(settings)?;

    let mut terminal = ratatui::init();
    let outcome = execute!(stdout(), EnableMouseCapture)
        .map_err(Into::into)
        .and_then(|()| app.run(&mut terminal));

    // Restore the terminal even when the loop failed
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();

    outcome
}
