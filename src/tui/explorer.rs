//! Explorer list controller
//!
//! Owns the search text, the filtered data source and the hovered/selected
//! rows. Hovered and selected rows are tracked by title, so items sharing a
//! title light up together.

use crate::catalog::{Catalog, DataSource, Example};
use crate::constants::SEARCH_PLACEHOLDER;
use crate::search::TitleFilter;
use crate::tui::list::{ListEntry, ListView};
use crate::tui::styles::{self, STYLES};
use crate::Result;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, ListItem, ListState, Paragraph},
    Frame,
};
use std::fmt;

/// Called with the raw text before every search
pub type SearchCallback = Box<dyn FnMut(&str)>;

/// Called with the item after a row is pressed
pub type PressRowCallback = Box<dyn FnMut(&Example)>;

/// Owner-supplied view drawn above the list
pub trait AdditionalView {
    /// Terminal rows to reserve above the list
    fn height(&self) -> u16;

    fn render(&self, frame: &mut Frame<'_>, area: Rect, ctx: &ViewContext<'_>);
}

/// Row and text input renderers handed to an [`AdditionalView`]
pub struct ViewContext<'a> {
    state: &'a ExplorerState,
    filter: Option<&'a TitleFilter>,
}

impl<'a> ViewContext<'a> {
    pub fn render_row(&self, example: &Example, index: usize) -> ListItem<'static> {
        render_row(self.state, self.filter, example, index)
    }

    pub fn render_text_input(&self, style: Style) -> Paragraph<'static> {
        render_text_input(self.state, style)
    }

    pub fn state(&self) -> &ExplorerState {
        self.state
    }
}

/// Inputs to an [`ExplorerList`]
#[derive(Default)]
pub struct ExplorerProps {
    pub components: Vec<Example>,
    pub apis: Vec<Example>,
    pub search_text: Option<String>,
    pub search: Option<SearchCallback>,
    pub on_press_row: Option<PressRowCallback>,
    pub additional_view: Option<Box<dyn AdditionalView>>,
}

impl ExplorerProps {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            components: catalog.components,
            apis: catalog.apis,
            ..Self::default()
        }
    }

    pub fn search_text(mut self, text: &str) -> Self {
        self.search_text = Some(text.to_string());
        self
    }

    pub fn on_search<F: FnMut(&str) + 'static>(mut self, callback: F) -> Self {
        self.search = Some(Box::new(callback));
        self
    }

    pub fn on_press_row<F: FnMut(&Example) + 'static>(mut self, callback: F) -> Self {
        self.on_press_row = Some(Box::new(callback));
        self
    }

    pub fn additional_view<V: AdditionalView + 'static>(mut self, view: V) -> Self {
        self.additional_view = Some(Box::new(view));
        self
    }
}

/// Controller state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplorerState {
    pub data_source: DataSource,
    pub search_text: String,
    /// Title of the last pressed row
    pub selected: Option<String>,
    /// Title of the last hovered row; never cleared once set
    pub hovered: Option<String>,
}

/// Searchable two-section list of examples
pub struct ExplorerList {
    catalog: Catalog,
    search: Option<SearchCallback>,
    on_press_row: Option<PressRowCallback>,
    additional_view: Option<Box<dyn AdditionalView>>,
    state: ExplorerState,
    filter: Option<TitleFilter>,
    list_state: ListState,
    /// Where the list was last drawn, for mouse hit testing
    list_area: Option<Rect>,
    /// Row the hover last landed on; titles alone can repeat
    cursor: Option<usize>,
    /// Scroll the cursor into view on the next render (keyboard moves only)
    follow_cursor: bool,
}

impl fmt::Debug for ExplorerList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExplorerList")
            .field("components", &self.catalog.components.len())
            .field("apis", &self.catalog.apis.len())
            .field("state", &self.state)
            .field("search", &self.search.as_ref().map(|_| "Fn(...)"))
            .field("on_press_row", &self.on_press_row.as_ref().map(|_| "Fn(...)"))
            .field("additional_view", &self.additional_view.is_some())
            .finish()
    }
}

impl ExplorerList {
    /// Create the controller; the list stays empty until [`ExplorerList::mount`]
    pub fn new(props: ExplorerProps) -> Self {
        Self {
            catalog: Catalog::new(props.components, props.apis),
            search: props.search,
            on_press_row: props.on_press_row,
            additional_view: props.additional_view,
            state: ExplorerState {
                search_text: props.search_text.unwrap_or_default(),
                ..ExplorerState::default()
            },
            filter: None,
            list_state: ListState::default(),
            list_area: None,
            cursor: None,
            follow_cursor: false,
        }
    }

    /// Run the initial search with the starting text
    pub fn mount(&mut self) -> Result<()> {
        let text = self.state.search_text.clone();
        self.search(&text)
    }

    /// Notify the owner, then filter both sections by title
    ///
    /// A malformed pattern is returned as an error and leaves the state as it was.
    pub fn search(&mut self, text: &str) -> Result<()> {
        if let Some(callback) = self.search.as_mut() {
            callback(text);
        }

        let filter = TitleFilter::new(text)?;
        let data_source = filter.apply(&self.catalog);
        crate::logging::debug_log(&format!(
            "Search {:?}: {} components, {} apis",
            text,
            data_source.components.len(),
            data_source.apis.len()
        ));

        self.state.data_source = data_source;
        self.state.search_text = text.to_string();
        self.filter = Some(filter);
        // row numbers refer to the old results
        self.cursor = None;
        self.follow_cursor = false;
        *self.list_state.offset_mut() = 0;
        Ok(())
    }

    /// Same as the input's clear button
    pub fn clear_search(&mut self) -> Result<()> {
        self.search("")
    }

    /// Select the row and notify the owner
    pub fn press_row(&mut self, example: &Example) {
        self.state.selected = Some(example.title.clone());
        crate::logging::debug_log(&format!("Pressed row: {}", example.title));
        if let Some(callback) = self.on_press_row.as_mut() {
            callback(example);
        }
    }

    pub fn hover_row(&mut self, example: &Example) {
        self.state.hovered = Some(example.title.clone());
    }

    /// Press whichever visible row is hovered
    pub fn press_hovered(&mut self) -> bool {
        let hovered = self
            .hovered_row()
            .and_then(|row| self.state.data_source.rows().nth(row))
            .cloned();

        match hovered {
            Some(example) => {
                self.press_row(&example);
                true
            }
            None => false,
        }
    }

    /// Visible row carrying the hover: the cursor while it still shows the
    /// hovered title, else the first row with that title
    fn hovered_row(&self) -> Option<usize> {
        let title = self.state.hovered.as_deref()?;
        let rows = &self.state.data_source;

        self.cursor
            .filter(|&row| rows.rows().nth(row).is_some_and(|e| e.title == title))
            .or_else(|| rows.rows().position(|example| example.title == title))
    }

    /// Move the hover cursor one row down
    pub fn hover_next(&mut self) {
        self.move_hover(|position, len| match position {
            Some(position) => (position + 1).min(len - 1),
            None => 0,
        });
    }

    /// Move the hover cursor one row up
    pub fn hover_previous(&mut self) {
        self.move_hover(|position, _| match position {
            Some(position) => position.saturating_sub(1),
            None => 0,
        });
    }

    fn move_hover<F: Fn(Option<usize>, usize) -> usize>(&mut self, step: F) {
        let len = self.state.data_source.len();
        if len == 0 {
            return;
        }

        let target = step(self.hovered_row(), len);
        let example = self.state.data_source.rows().nth(target).cloned();
        if let Some(example) = example {
            self.hover_row(&example);
            self.cursor = Some(target);
            self.follow_cursor = true;
        }
    }

    /// Hover the row under a terminal cell; false if no row is there
    pub fn hover_at(&mut self, column: u16, row: u16) -> bool {
        match self.example_at(column, row) {
            Some((position, example)) => {
                self.hover_row(&example);
                self.cursor = Some(position);
                // the pointer is already over it, leave the scroll alone
                self.follow_cursor = false;
                true
            }
            None => false,
        }
    }

    /// Press the row under a terminal cell; false if no row is there
    pub fn press_at(&mut self, column: u16, row: u16) -> bool {
        match self.example_at(column, row) {
            Some((_, example)) => {
                self.press_row(&example);
                true
            }
            None => false,
        }
    }

    fn example_at(&self, column: u16, row: u16) -> Option<(usize, Example)> {
        let area = self.list_area?;
        if !area.contains(Position::new(column, row)) {
            return None;
        }

        let view = ListView::new(&self.state.data_source);
        match view.entry_at(self.list_state.offset(), row - area.top())? {
            ListEntry::Row {
                row: position,
                example,
                ..
            } => Some((*position, (*example).clone())),
            ListEntry::Header(_) => None,
        }
    }

    pub fn state(&self) -> &ExplorerState {
        &self.state
    }

    pub fn data_source(&self) -> &DataSource {
        &self.state.data_source
    }

    pub fn search_text(&self) -> &str {
        &self.state.search_text
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn render_row(&self, example: &Example, index: usize) -> ListItem<'static> {
        render_row(&self.state, self.filter.as_ref(), example, index)
    }

    pub fn render_text_input(&self, style: Style) -> Paragraph<'static> {
        render_text_input(&self.state, style)
    }

    /// Draw the additional view (if any) above the sectioned list
    pub fn render(&mut self, frame: &mut Frame<'_>, area: Rect) {
        let top_height = self
            .additional_view
            .as_ref()
            .map(|view| view.height().min(area.height))
            .unwrap_or(0);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(top_height), Constraint::Min(0)])
            .split(area);

        if let Some(view) = self.additional_view.as_ref() {
            let ctx = ViewContext {
                state: &self.state,
                filter: self.filter.as_ref(),
            };
            view.render(frame, chunks[0], &ctx);
        }

        let list_area = chunks[1];
        let view = ListView::new(&self.state.data_source);
        let list = view
            .render(
                |example, index| render_row(&self.state, self.filter.as_ref(), example, index),
                render_section_header,
            )
            .style(STYLES.list);

        if self.follow_cursor {
            if let Some(position) = self.cursor.and_then(|row| view.position_of_row(row)) {
                let offset = view.scroll_to(self.list_state.offset(), position, list_area.height);
                *self.list_state.offset_mut() = offset;
            }
        }

        frame.render_stateful_widget(list, list_area, &mut self.list_state);
        self.list_area = Some(list_area);
    }
}

fn render_section_header(section: &str) -> ListItem<'static> {
    ListItem::new(Line::from(format!(" {}", section.to_uppercase()))).style(STYLES.section_header)
}

fn render_row(
    state: &ExplorerState,
    filter: Option<&TitleFilter>,
    example: &Example,
    _index: usize,
) -> ListItem<'static> {
    let hovered = state.hovered.as_deref() == Some(example.title.as_str());
    let selected = state.selected.as_deref() == Some(example.title.as_str());

    let title = &example.title;
    let title_line = match filter.and_then(|filter| filter.find(title)) {
        Some((start, end)) => Line::from(vec![
            Span::styled(format!("  {}", &title[..start]), STYLES.row_title),
            Span::styled(
                title[start..end].to_string(),
                STYLES.row_title.patch(STYLES.row_match),
            ),
            Span::styled(title[end..].to_string(), STYLES.row_title),
        ]),
        None => Line::from(Span::styled(format!("  {}", title), STYLES.row_title)),
    };
    let detail_line = Line::from(Span::styled(
        format!("  {}", example.description),
        STYLES.row_detail,
    ));

    ListItem::new(Text::from(vec![title_line, detail_line]))
        .style(styles::row_style(hovered, selected))
}

fn render_text_input(state: &ExplorerState, style: Style) -> Paragraph<'static> {
    let line = if state.search_text.is_empty() {
        Line::from(Span::styled(SEARCH_PLACEHOLDER, STYLES.search_placeholder))
    } else {
        Line::from(state.search_text.clone())
    };

    Paragraph::new(line)
        .style(STYLES.search_text_input.patch(style))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(STYLES.search_row),
        )
}
