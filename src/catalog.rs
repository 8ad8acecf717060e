//! Explorer catalog: example items and the two-section data source.
//!
//! A catalog is read from a JSON file of the form
//! `{ "components": [...], "apis": [...] }` or taken from the built-in demo set.

use crate::constants::MAX_CATALOG_BYTES;
use crate::{ExplorerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A leaf entry, or a group when `examples` is present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Example>>,
}

impl Example {
    /// Create a leaf example
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            examples: None,
        }
    }

    /// Create a group carrying nested examples
    pub fn group(title: &str, description: &str, examples: Vec<Example>) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            examples: Some(examples),
        }
    }

    /// True when the item has at least one nested example
    pub fn has_nested_examples(&self) -> bool {
        self.examples.as_ref().is_some_and(|nested| !nested.is_empty())
    }
}

/// The two sequences currently displayed
///
/// Always rebuilt from the catalog, never edited in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSource {
    pub components: Vec<Example>,
    pub apis: Vec<Example>,
}

impl DataSource {
    /// Total number of rows across both sections
    pub fn len(&self) -> usize {
        self.components.len() + self.apis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rows in display order: components first, then APIs
    pub fn rows(&self) -> impl Iterator<Item = &Example> {
        self.components.iter().chain(self.apis.iter())
    }
}

/// Unfiltered source sequences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub components: Vec<Example>,
    #[serde(default)]
    pub apis: Vec<Example>,
}

impl Catalog {
    pub fn new(components: Vec<Example>, apis: Vec<Example>) -> Self {
        Self { components, apis }
    }

    /// Parse a catalog from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a catalog from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let metadata =
            fs::metadata(path).map_err(|e| ExplorerError::catalog_error(&display, &e.to_string()))?;
        if metadata.len() > MAX_CATALOG_BYTES {
            return Err(ExplorerError::catalog_error(
                &display,
                &format!("file is larger than {} bytes", MAX_CATALOG_BYTES),
            ));
        }

        let text = fs::read_to_string(path)
            .map_err(|e| ExplorerError::catalog_error(&display, &e.to_string()))?;

        Self::from_json(&text).map_err(|e| match e {
            ExplorerError::CatalogError { reason, .. } => {
                ExplorerError::catalog_error(&display, &reason)
            }
            other => other,
        })
    }

    /// Full, unfiltered data source
    pub fn data_source(&self) -> DataSource {
        DataSource {
            components: self.components.clone(),
            apis: self.apis.clone(),
        }
    }

    /// Demo catalog used when no file is given
    pub fn builtin() -> Self {
        let components = vec![
            Example::new("ActivityIndicator", "Animated loading indicators."),
            Example::new("Button", "Simple clickable button with a title."),
            Example::new("DatePicker", "Calendar based date selection."),
            Example::new("Image", "Base component to display images."),
            Example::group(
                "Layout",
                "Flexbox layout examples.",
                vec![
                    Example::new("Flex Direction", "Rows and columns."),
                    Example::new("Justify Content", "Main axis alignment."),
                    Example::new("Align Items", "Cross axis alignment."),
                ],
            ),
            Example::new("ScrollView", "Scrollable container for content."),
            Example::new("Slider", "Pick a value from a continuous range."),
            Example::new("Switch", "Native boolean input."),
            Example::new("Text", "Base component for displaying text."),
            Example::new("TextInput", "Single and multi line text entry."),
            Example::new("TouchableHighlight", "Feedback when a view is pressed."),
            Example::new("View", "Basic building block of the interface."),
        ];
        let apis = vec![
            Example::new("Alert", "Dialogs with a title, message and buttons."),
            Example::new("AppState", "Foreground and background transitions."),
            Example::new("Clipboard", "Read and write the system clipboard."),
            Example::new("Dimensions", "Window and screen size."),
            Example::group(
                "Linking",
                "Open URLs and handle incoming links.",
                vec![
                    Example::new("Open URL", "Open a link in the default handler."),
                    Example::new("Initial URL", "Link that launched the app."),
                ],
            ),
            Example::new("PixelRatio", "Device pixel density."),
            Example::new("StyleSheet", "Create and compose style objects."),
            Example::new("Timers", "setTimeout, setInterval and friends."),
        ];

        Self::new(components, apis)
    }
}
