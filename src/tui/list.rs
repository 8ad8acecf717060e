//! Sectioned list renderer
//!
//! Lays out a data source as `Components:` header, component rows,
//! `APIs:` header, API rows. Every row is materialized; nothing is windowed.

use crate::catalog::{DataSource, Example};
use crate::constants::{APIS_SECTION, COMPONENTS_SECTION, ROW_HEIGHT, SECTION_HEADER_HEIGHT};
use ratatui::widgets::{List, ListItem};

/// The two fixed groupings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Components,
    Apis,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Components => COMPONENTS_SECTION,
            Section::Apis => APIS_SECTION,
        }
    }
}

/// One line group in the flattened list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEntry<'a> {
    Header(Section),
    Row {
        section: Section,
        /// Position inside its own section
        index: usize,
        /// Position among all rows of both sections
        row: usize,
        example: &'a Example,
    },
}

impl<'a> ListEntry<'a> {
    /// Terminal rows this entry occupies
    pub fn height(&self) -> u16 {
        match self {
            ListEntry::Header(_) => SECTION_HEADER_HEIGHT,
            ListEntry::Row { .. } => ROW_HEIGHT,
        }
    }

    pub fn example(&self) -> Option<&'a Example> {
        match self {
            ListEntry::Header(_) => None,
            ListEntry::Row { example, .. } => Some(example),
        }
    }
}

/// Renders a data source through caller-supplied row and header callbacks
pub struct ListView<'a> {
    entries: Vec<ListEntry<'a>>,
}

impl<'a> ListView<'a> {
    pub fn new(data_source: &'a DataSource) -> Self {
        let mut entries = Vec::with_capacity(data_source.len() + 2);
        let mut first_row = 0;

        for (section, examples) in [
            (Section::Components, &data_source.components),
            (Section::Apis, &data_source.apis),
        ] {
            entries.push(ListEntry::Header(section));
            entries.extend(
                examples
                    .iter()
                    .enumerate()
                    .map(|(index, example)| ListEntry::Row {
                        section,
                        index,
                        row: first_row + index,
                        example,
                    }),
            );
            first_row += examples.len();
        }

        Self { entries }
    }

    /// Build the list widget, one item per entry
    pub fn render<R, H>(&self, mut render_row: R, mut render_section_header: H) -> List<'static>
    where
        R: FnMut(&Example, usize) -> ListItem<'static>,
        H: FnMut(&str) -> ListItem<'static>,
    {
        let items: Vec<ListItem<'static>> = self
            .entries
            .iter()
            .map(|entry| match entry {
                ListEntry::Header(section) => render_section_header(section.title()),
                ListEntry::Row { index, example, .. } => render_row(example, *index),
            })
            .collect();

        List::new(items)
    }

    /// Entry index of the `row`th row
    pub fn position_of_row(&self, row: usize) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| matches!(entry, ListEntry::Row { row: r, .. } if *r == row))
    }

    /// Smallest scroll change from `offset` that shows all of entry `position`
    /// in a list `height` rows tall
    pub fn scroll_to(&self, offset: usize, position: usize, height: u16) -> usize {
        if position < offset {
            return position;
        }

        let mut offset = offset;
        while offset < position {
            let used: u16 = self.entries[offset..=position]
                .iter()
                .map(|entry| entry.height())
                .fold(0, u16::saturating_add);
            if used <= height {
                break;
            }
            offset += 1;
        }
        offset
    }

    /// Entry drawn at `row` (relative to the list's top) when scrolled to `offset`
    pub fn entry_at(&self, offset: usize, row: u16) -> Option<&ListEntry<'a>> {
        let mut top: u16 = 0;
        for entry in self.entries.iter().skip(offset) {
            let bottom = top.saturating_add(entry.height());
            if row < bottom {
                return Some(entry);
            }
            top = bottom;
        }
        None
    }
}
