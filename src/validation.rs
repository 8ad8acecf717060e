//! Input validation.
//!
//! Provides validation for the starting search text, catalog paths and
//! catalog contents

use crate::catalog::{Catalog, Example};
use crate::constants::*;
use crate::{ExplorerError, Result};
use std::collections::HashMap;
use std::path::Path;

/// Input validator for search text and catalogs
pub struct InputValidator;

impl InputValidator {
    /// Validates the search text given on the command line
    ///
    /// Regex syntax is not checked here; a bad pattern is reported by the
    /// explorer when the search runs.
    pub fn validate_search_text(text: &str) -> Result<String> {
        if text.len() > SEARCH_MAX_LENGTH {
            return Err(ExplorerError::InvalidInput(format!(
                "Search text cannot be longer than {} characters",
                SEARCH_MAX_LENGTH
            )));
        }

        if text.contains('\0') {
            return Err(ExplorerError::InvalidInput(
                "Search text contains null bytes".to_string(),
            ));
        }

        Ok(text.to_string())
    }

    /// Validates a catalog file path
    pub fn validate_catalog_path(path: &Path) -> Result<()> {
        let display = path.display().to_string();

        if display.trim().is_empty() {
            return Err(ExplorerError::InvalidInput(
                "Catalog path cannot be empty".to_string(),
            ));
        }
        if !path.exists() {
            return Err(ExplorerError::catalog_error(&display, "file does not exist"));
        }
        if !path.is_file() {
            return Err(ExplorerError::catalog_error(&display, "path is not a file"));
        }

        Ok(())
    }

    /// Reports titles that make rows hard to tell apart
    ///
    /// Rows are identified by title, so duplicates select and hover together
    /// and an empty title gives an empty row. Neither stops the catalog from
    /// loading; each one is logged as a warning.
    pub fn validate_catalog(catalog: &Catalog) -> CatalogReport {
        let mut report = CatalogReport::default();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for example in catalog.components.iter().chain(catalog.apis.iter()) {
            Self::count_empty_titles(example, &mut report.empty_titles);
            *counts.entry(example.title.as_str()).or_insert(0) += 1;
        }

        report.duplicates = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(title, _)| title.to_string())
            .collect();
        report.duplicates.sort();

        for title in &report.duplicates {
            crate::logging::warn_log(&format!(
                "Duplicate title {:?}: these rows will select and hover together",
                title
            ));
        }

        report
    }

    fn count_empty_titles(example: &Example, empty_titles: &mut usize) {
        if example.title.trim().is_empty() {
            *empty_titles += 1;
            crate::logging::warn_log(&format!(
                "Catalog item with description {:?} has an empty title",
                example.description
            ));
        }
        for nested in example.examples.iter().flatten() {
            Self::count_empty_titles(nested, empty_titles);
        }
    }
}

/// What [`InputValidator::validate_catalog`] found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogReport {
    /// Top-level titles used more than once, sorted
    pub duplicates: Vec<String>,
    /// Blank titles at any depth
    pub empty_titles: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_search_text() {
        assert!(InputValidator::validate_search_text("").is_ok());
        assert!(InputValidator::validate_search_text("button").is_ok());
        // regex errors are the explorer's concern
        assert!(InputValidator::validate_search_text("[").is_ok());

        let long_text = "a".repeat(SEARCH_MAX_LENGTH + 1);
        assert!(InputValidator::validate_search_text(&long_text).is_err());
        assert!(InputValidator::validate_search_text("a\0b").is_err());
    }

    #[test]
    fn test_validate_catalog_path() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(InputValidator::validate_catalog_path(file.path()).is_ok());

        let dir = tempfile::tempdir().unwrap();
        assert!(InputValidator::validate_catalog_path(dir.path()).is_err());
        assert!(InputValidator::validate_catalog_path(&dir.path().join("missing.json")).is_err());
        assert!(InputValidator::validate_catalog_path(Path::new("")).is_err());
    }

    #[test]
    fn test_validate_catalog_reports_duplicates() {
        let catalog = Catalog::new(
            vec![Example::new("Text", ""), Example::new("View", "")],
            vec![Example::new("Text", ""), Example::new("Alert", "")],
        );
        assert_eq!(
            InputValidator::validate_catalog(&catalog).duplicates,
            vec!["Text".to_string()]
        );
        assert_eq!(
            InputValidator::validate_catalog(&Catalog::builtin()),
            CatalogReport::default()
        );
    }

    #[test]
    fn test_validate_catalog_accepts_empty_titles() {
        let catalog = Catalog::new(
            vec![Example::new("  ", "blank"), Example::new("Button", "")],
            vec![Example::new("", "also blank")],
        );
        let report = InputValidator::validate_catalog(&catalog);
        assert_eq!(report.empty_titles, 2);
        assert!(report.duplicates.is_empty());

        let nested = Catalog::new(
            vec![Example::group("Group", "", vec![Example::new("", "nested")])],
            vec![],
        );
        assert_eq!(InputValidator::validate_catalog(&nested).empty_titles, 1);
    }

    #[test]
    fn test_empty_title_rows_still_load_and_filter() {
        let catalog = Catalog::new(vec![Example::new("", "blank"), Example::new("Text", "")], vec![]);
        InputValidator::validate_catalog(&catalog);

        let everything = crate::search::TitleFilter::new("").unwrap().apply(&catalog);
        assert_eq!(everything.components.len(), 2);
        let text = crate::search::TitleFilter::new("te").unwrap().apply(&catalog);
        assert_eq!(text.components, vec![Example::new("Text", "")]);
    }
}
