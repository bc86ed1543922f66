//! mealpicker - Main entry point
//!
//! Parses the command line, sets up logging, and dispatches to the
//! interactive picker or one of the headless commands.

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::Path;
use tracing::{debug, error, info};

use mealpicker::app::App;
use mealpicker::cli::{Cli, Commands};
use mealpicker::headless::{describe_catalog, run_check};
use mealpicker::logging::{init_logging, LogConfig, LogTarget};
use mealpicker::{MealCatalog, MealPickerError, SelectionManager};

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let interactive = matches!(cli.command, None | Some(Commands::Pick));
    let target = match (&cli.log_file, interactive) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, true) => LogTarget::Discard,
        (None, false) => LogTarget::Stderr,
    };
    init_logging(&LogConfig::from_verbosity(cli.verbose, target))?;
    info!("mealpicker starting up");

    match cli.command {
        None | Some(Commands::Pick) => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            run_tui(catalog)?;
        }
        Some(Commands::Check { selections, json }) => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let mut manager = SelectionManager::new(catalog)?;
            let report = match run_check(&mut manager, &selections) {
                Ok(report) => report,
                Err(e) => {
                    error!("Check failed: {}", e);
                    eprintln!("✗ {}", e);
                    std::process::exit(1);
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.to_text());
            }
            if !report.ready {
                std::process::exit(1);
            }
        }
        Some(Commands::Catalog) => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            print!("{}", describe_catalog(&catalog));
        }
        Some(Commands::Validate { path }) => {
            info!("Validating catalog file: {:?}", path);
            match MealCatalog::load_from_file(&path) {
                Ok(catalog) => match catalog.validate() {
                    Ok(()) => {
                        info!("Catalog validation successful");
                        println!(
                            "✓ Catalog is valid: {} categories",
                            catalog.categories.len()
                        );
                    }
                    Err(e) => {
                        error!("Catalog validation failed: {}", e);
                        eprintln!("✗ Catalog validation failed: {}", e);
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    error!("Failed to load catalog file: {:#}", e);
                    eprintln!("✗ Failed to load catalog file: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::ExportCatalog { path }) => {
            MealCatalog::default().save_to_file(&path)?;
            println!("✓ Wrote built-in catalog to {:?}", path);
        }
    }

    Ok(())
}

/// Load the catalog from a file, or fall back to the built-in menu
fn load_catalog(path: Option<&Path>) -> Result<MealCatalog> {
    let catalog = match path {
        Some(path) => {
            debug!("Loading catalog from {:?}", path);
            MealCatalog::load_from_file(path)?
        }
        None => MealCatalog::default(),
    };
    catalog
        .validate()
        .context("Catalog failed validation")?;
    Ok(catalog)
}

/// Run the interactive picker
fn run_tui(catalog: MealCatalog) -> Result<()> {
    debug!("Initializing terminal for TUI mode");
    let manager = SelectionManager::new(catalog)?;

    enable_raw_mode()
        .map_err(|e| MealPickerError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen).map_err(|e| {
        MealPickerError::terminal(format!("Failed to enter alternate screen: {}", e))
    })?;

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(|e| MealPickerError::terminal(format!("Failed to create terminal: {}", e)))
        .and_then(|mut terminal| App::new(manager).run(&mut terminal));

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result?;
    Ok(())
}
