//! metex - Terminal metadata explorer
//!
//! A terminal-based explorer for catalog/schema/table hierarchies,
//! similar in spirit to lazygit, k9s, or htop.

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::backend::CrosstermBackend;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::process::ExitCode;

use metex_core::prelude::*;
use metex_core::storage::Config;

mod action;
mod app;
mod components;
mod error;
mod event;
mod layout;

use app::App;
use error::TuiError;

#[derive(Parser)]
#[command(name = "metex")]
#[command(about = "Terminal explorer for catalog/schema/table metadata")]
#[command(version)]
#[command(after_help = "Examples:
  metex                                 # Explore the built-in mock catalog
  metex --catalog warehouse.json        # Explore a catalog exported to JSON

Environment Variables:
  METEX_CATALOG   Path of the catalog JSON file to open by default")]
struct Cli {
    /// Catalog JSON file to explore (falls back to METEX_CATALOG, then the
    /// config file, then the built-in mock)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Custom configuration directory path
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Resolve the catalog source and build the app before touching the
    // terminal, so wiring failures abort with a readable message instead of
    // corrupting the screen.
    let app = match build_app(&cli) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match run_terminal(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Application error: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Logging goes through env_logger; `--verbose` forces the debug level.
fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

/// Pick the catalog provider and construct the application.
fn build_app(cli: &Cli) -> Result<App, TuiError> {
    let config_file = cli.config_dir.as_deref().map(Config::file_in);
    let catalog_provider: Box<dyn CatalogProvider> =
        match Config::resolve_catalog(cli.catalog.clone(), config_file)? {
            Some(path) => Box::new(JsonCatalogProvider::new(path)),
            None => Box::new(MockCatalogProvider),
        };
    log::info!("catalog source: {}", catalog_provider.describe());

    App::new(catalog_provider, Box::new(RuleBasedSchemaProvider))
}

/// Enter the alternate screen, run the app, and always restore the terminal.
fn run_terminal(mut app: App) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    // Set panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let result = app.run(&mut terminal);
    restore_terminal()?;
    result
}

/// Restore terminal to normal state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
