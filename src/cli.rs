//! Command Line Interface module
//!
//! Handles command-line argument parsing using clap
//!

use crate::catalog::Catalog;
use crate::validation::InputValidator;
use crate::Result;
use clap::Parser;
use std::path::PathBuf;

/// Component Explorer - searchable list of components and APIs
#[derive(Parser, Debug)]
#[command(
    name = "explorer-rs",
    about = "Component Explorer - searchable list of components and APIs",
    long_about = "Component Explorer - Rust based TUI listing components and APIs with live search

    EXAMPLES:
        explorer-rs                          # Built-in demo catalog
        explorer-rs -c catalog.json          # Load a catalog file
        explorer-rs -s \"^s\"                  # Start with a search applied

    USAGE TIP:
        Type to filter titles (case insensitive, regex syntax), arrow keys or the mouse
        to hover, enter or click to open a row, ctrl+u to clear the search
    "
)]
#[command(version)]
pub struct Cli {
    /// Catalog file to load
    #[arg(
        short,
        long,
        help = "JSON catalog with \"components\" and \"apis\" arrays (default: built-in demo)"
    )]
    pub catalog: Option<PathBuf>,

    /// Initial search text
    #[arg(short, long, help = "Initial search text")]
    pub search: Option<String>,

    /// debug mode
    #[arg(
        short,
        long,
        help = "Debug mode (logging to a temp file with timestamps)"
    )]
    pub debug: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate command line arguments
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.catalog {
            InputValidator::validate_catalog_path(path)?;
        }
        if let Some(text) = &self.search {
            InputValidator::validate_search_text(text)?;
        }
        Ok(())
    }

    /// Load the requested catalog, defaulting to the built-in one
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::builtin()),
        }
    }

    /// Initial search text, empty when not given
    pub fn search_text(&self) -> &str {
        self.search.as_deref().unwrap_or("")
    }
}
