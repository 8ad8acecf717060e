//! Search module
//!
//! Filters the explorer catalog by title with a case-insensitive regex

pub mod filter;

pub use filter::TitleFilter;
