//! TUI application state and event handling

use crate::catalog::{Catalog, Example};
use crate::constants::SEARCH_BAR_HEIGHT;
use crate::logging;
use crate::tui::events::{KeyAction, MouseAction};
use crate::tui::explorer::{AdditionalView, ExplorerList, ExplorerProps, ViewContext};
use crate::tui::page::{make_renderable, ExamplePageFactory, Renderable};
use crate::Result;
use ratatui::{layout::Rect, style::Style, Frame};
use std::sync::mpsc::{self, Receiver};

/// Search input drawn above the list
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchBar;

impl AdditionalView for SearchBar {
    fn height(&self) -> u16 {
        SEARCH_BAR_HEIGHT
    }

    fn render(&self, frame: &mut Frame<'_>, area: Rect, ctx: &ViewContext<'_>) {
        frame.render_widget(ctx.render_text_input(Style::default()), area);
    }
}

/// Main TUI application state
pub struct App {
    /// The searchable list
    pub explorer: ExplorerList,

    /// Text typed so far, including edits that failed to compile
    pub input: String,

    /// Item opened from the list, shown in the detail pane
    pub detail: Option<Renderable>,

    /// Last recoverable error, shown in the status line
    pub status: Option<String>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Rows pressed in the explorer, waiting to be opened
    pressed: Receiver<Example>,

    page_factory: ExamplePageFactory,
}

impl App {
    /// Create the application and mount the explorer with the initial search
    pub fn new(catalog: Catalog, search_text: &str) -> Result<Self> {
        let (pressed_tx, pressed_rx) = mpsc::channel();

        let props = ExplorerProps::new(catalog)
            .search_text(search_text)
            .on_search(|text| logging::debug_log(&format!("Search input: {:?}", text)))
            .on_press_row(move |example| {
                if pressed_tx.send(example.clone()).is_err() {
                    logging::warn_log("Pressed row dropped: receiver closed");
                }
            })
            .additional_view(SearchBar);

        let mut explorer = ExplorerList::new(props);
        explorer.mount()?;

        Ok(Self {
            explorer,
            input: search_text.to_string(),
            detail: None,
            status: None,
            should_quit: false,
            pressed: pressed_rx,
            page_factory: ExamplePageFactory,
        })
    }

    /// Apply a key action
    pub fn handle_key_action(&mut self, action: KeyAction) -> Result<()> {
        match action {
            KeyAction::Quit => self.quit(),
            KeyAction::MovePrevious => self.explorer.hover_previous(),
            KeyAction::MoveNext => self.explorer.hover_next(),
            KeyAction::PressRow => {
                self.explorer.press_hovered();
            }
            KeyAction::CloseDetail => self.detail = None,
            KeyAction::ClearSearch => {
                self.input.clear();
                self.apply_search()?;
            }
            KeyAction::InputChar(c) => {
                self.input.push(c);
                self.apply_search()?;
            }
            KeyAction::DeleteChar => {
                if self.input.pop().is_some() {
                    self.apply_search()?;
                }
            }
            KeyAction::None => {}
        }
        self.pump_pressed_rows();
        Ok(())
    }

    /// Apply a mouse action
    pub fn handle_mouse_action(&mut self, action: MouseAction) {
        match action {
            MouseAction::ClickAt(column, row) => {
                self.explorer.press_at(column, row);
            }
            MouseAction::HoverAt(column, row) => {
                self.explorer.hover_at(column, row);
            }
            MouseAction::None => {}
        }
        self.pump_pressed_rows();
    }

    /// Run the explorer search over the whole input buffer
    ///
    /// Bad patterns stay in the status line until the next successful search.
    fn apply_search(&mut self) -> Result<()> {
        match self.explorer.search(&self.input) {
            Ok(()) => {
                self.status = None;
                Ok(())
            }
            Err(err) if err.is_recoverable() => {
                logging::debug_log(&format!("Search rejected: {}", err.plain_message()));
                self.status = Some(err.plain_message());
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Open every row pressed since the last call; the latest one wins
    pub fn pump_pressed_rows(&mut self) {
        while let Ok(example) = self.pressed.try_recv() {
            let renderable = make_renderable(example, &self.page_factory);
            logging::info_log(&format!("Opened {}", renderable.title()));
            self.detail = Some(renderable);
        }
    }

    /// Set quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Text for the bottom status line
    pub fn status_line(&self) -> String {
        if let Some(status) = &self.status {
            return status.clone();
        }

        let source = self.explorer.data_source();
        let catalog = self.explorer.catalog();
        format!(
            "{}/{} components, {}/{} apis | enter: open  ctrl+u: clear  esc: quit",
            source.components.len(),
            catalog.components.len(),
            source.apis.len(),
            catalog.apis.len()
        )
    }

    /// Draw the whole screen
    pub fn draw(&mut self, frame: &mut Frame<'_>) {
        crate::tui::ui::draw(frame, self);
    }
}
