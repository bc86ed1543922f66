use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// mealpicker - pick your meals, one quota at a time
#[derive(Parser, Debug)]
#[command(name = "mealpicker")]
#[command(about = "A terminal meal-selection form with per-category pick quotas")]
#[command(version)]
pub struct Cli {
    /// Catalog JSON file to use instead of the built-in menu
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Append logs to this file (the interactive picker logs nowhere otherwise)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive picker (default)
    Pick,
    /// Apply picks without the TUI and report the summary
    Check {
        /// A pick as category=item, applied in order (repeatable)
        #[arg(short, long = "select", value_name = "CATEGORY=ITEM")]
        selections: Vec<String>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// List categories, quotas and items
    Catalog,
    /// Validate a catalog file
    Validate {
        /// Path to catalog file to validate
        path: PathBuf,
    },
    /// Write the built-in catalog to a JSON file
    ExportCatalog {
        /// Destination path
        path: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Split a `category=item` argument
pub fn parse_selection(arg: &str) -> Option<(&str, &str)> {
    let (category, item) = arg.split_once('=')?;
    let (category, item) = (category.trim(), item.trim());
    if category.is_empty() || item.is_empty() {
        None
    } else {
        Some((category, item))
    }
}
