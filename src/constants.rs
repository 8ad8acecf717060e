//! Constants used throughout the application.
//!
//! This module provides constants used throughout the application.

pub const COMPONENTS_SECTION: &str = "Components:";
pub const APIS_SECTION: &str = "APIs:";
pub const SEARCH_PLACEHOLDER: &str = "Search...";
pub const SEARCH_MAX_LENGTH: usize = 1000;
pub const MAX_CATALOG_BYTES: u64 = 8 * 1024 * 1024;
pub const ROW_HEIGHT: u16 = 2;
pub const SECTION_HEADER_HEIGHT: u16 = 1;
pub const SEARCH_BAR_HEIGHT: u16 = 3;
pub const EVENT_POLL_MILLIS: u64 = 100;
