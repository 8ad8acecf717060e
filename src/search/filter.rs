//! Title filter.
//!
//! Compiles the raw search text into a case-insensitive regular expression
//! and applies it to example titles. The text is not escaped, so regex
//! syntax in the input is honoured and malformed input is an error.

use crate::catalog::{Catalog, DataSource, Example};
use crate::{ExplorerError, Result};
use regex::{Regex, RegexBuilder};

/// Case-insensitive title matcher built from raw search text
#[derive(Debug, Clone)]
pub struct TitleFilter {
    regex: Regex,
}

impl TitleFilter {
    /// Compile `text` as a case-insensitive regex
    pub fn new(text: &str) -> Result<Self> {
        crate::logging::trace_log(&format!("Compiling title filter: {:?}", text));
        let regex = RegexBuilder::new(text)
            .case_insensitive(true)
            .build()
            .map_err(|e| ExplorerError::invalid_pattern(text, &e.to_string()))?;
        Ok(Self { regex })
    }

    /// Only the title is tested, never the description
    pub fn matches(&self, example: &Example) -> bool {
        self.regex.is_match(&example.title)
    }

    /// Byte range of the first match inside `title`, for highlighting
    pub fn find(&self, title: &str) -> Option<(usize, usize)> {
        self.regex
            .find(title)
            .filter(|m| !m.is_empty())
            .map(|m| (m.start(), m.end()))
    }

    /// Keep matching items, preserving order
    pub fn filter(&self, examples: &[Example]) -> Vec<Example> {
        examples
            .iter()
            .filter(|example| self.matches(example))
            .cloned()
            .collect()
    }

    /// Build a fresh data source from the unfiltered catalog
    pub fn apply(&self, catalog: &Catalog) -> DataSource {
        DataSource {
            components: self.filter(&catalog.components),
            apis: self.filter(&catalog.apis),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(examples: &[Example]) -> Vec<&str> {
        examples.iter().map(|e| e.title.as_str()).collect()
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(
            vec![Example::new("Button", ""), Example::new("Slider", "")],
            vec![Example::new("Alert", "")],
        )
    }

    #[test]
    fn test_filter_scenario() {
        let filter = TitleFilter::new("li").unwrap();
        let source = filter.apply(&sample_catalog());
        assert_eq!(titles(&source.components), vec!["Slider"]);
        assert!(source.apis.is_empty());
    }

    #[test]
    fn test_empty_text_matches_everything_in_order() {
        let catalog = sample_catalog();
        let filter = TitleFilter::new("").unwrap();
        assert_eq!(filter.apply(&catalog), catalog.data_source());
    }

    #[test]
    fn test_case_insensitive() {
        let catalog = sample_catalog();
        for text in ["BUTTON", "button", "bUtToN", "UTT"] {
            let source = TitleFilter::new(text).unwrap().apply(&catalog);
            assert_eq!(titles(&source.components), vec!["Button"], "text: {}", text);
        }
    }

    #[test]
    fn test_description_is_not_searched() {
        let catalog = Catalog::new(vec![Example::new("Switch", "toggle between states")], vec![]);
        let source = TitleFilter::new("toggle").unwrap().apply(&catalog);
        assert!(source.is_empty());
    }

    #[test]
    fn test_shown_and_hidden_items_partition() {
        let catalog = Catalog::builtin();
        for text in ["a", "te", "VIEW", "x", "picker"] {
            let filter = TitleFilter::new(text).unwrap();
            let source = filter.apply(&catalog);
            let needle = text.to_lowercase();

            for shown in source.rows() {
                assert!(shown.title.to_lowercase().contains(&needle));
            }
            for item in catalog.components.iter().chain(catalog.apis.iter()) {
                let visible = source.rows().any(|e| e == item);
                assert_eq!(visible, item.title.to_lowercase().contains(&needle));
            }
        }
    }

    #[test]
    fn test_regex_syntax_is_honoured() {
        let catalog = sample_catalog();
        let source = TitleFilter::new("^(al|sl)").unwrap().apply(&catalog);
        assert_eq!(titles(&source.components), vec!["Slider"]);
        assert_eq!(titles(&source.apis), vec!["Alert"]);
    }

    #[test]
    fn test_malformed_pattern_is_an_error() {
        for text in ["[", "(", "a{2", "[z-a]"] {
            let err = TitleFilter::new(text).unwrap_err();
            match err {
                ExplorerError::InvalidPattern { pattern, .. } => assert_eq!(pattern, text),
                other => panic!("unexpected error for {:?}: {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_find_match_range() {
        let filter = TitleFilter::new("li").unwrap();
        assert_eq!(filter.find("Slider"), Some((1, 3)));
        assert_eq!(filter.find("Button"), None);
        assert_eq!(TitleFilter::new("").unwrap().find("Button"), None);
    }
}
