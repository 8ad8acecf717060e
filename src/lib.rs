//! Component Explorer - a searchable list of components and APIs
//!
//! A Rust based terminal user interface (TUI) that lists a catalog of examples
//! in two sections, filters them by title as you type, and opens the pressed
//! row in a detail pane

pub mod catalog;
pub mod cli;
pub mod constants;
pub mod error;
pub mod logging;
pub mod search;
pub mod tui;
pub mod validation;

// Re-export `Cli` for use from `main`
pub use catalog::{Catalog, DataSource, Example};
pub use cli::Cli;
pub use error::{ExplorerError, Result};
