//! Module-scoped style table for the explorer list
//!
//! Immutable, shared by every explorer instance.

use ratatui::style::{Color, Modifier, Style};

/// Named styles used by the list, rows and search input
#[derive(Debug, Clone, Copy)]
pub struct StyleSheet {
    pub list: Style,
    pub section_header: Style,
    pub row: Style,
    pub row_title: Style,
    pub row_detail: Style,
    pub row_match: Style,
    pub hovered_row: Style,
    pub selected_row: Style,
    pub search_row: Style,
    pub search_text_input: Style,
    pub search_placeholder: Style,
    pub status: Style,
    pub status_error: Style,
    pub detail_title: Style,
}

pub const STYLES: StyleSheet = StyleSheet {
    list: Style::new().bg(Color::Rgb(0xee, 0xee, 0xee)),
    section_header: Style::new()
        .fg(Color::White)
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD),
    row: Style::new().fg(Color::Black).bg(Color::White),
    row_title: Style::new().add_modifier(Modifier::BOLD),
    row_detail: Style::new().fg(Color::Rgb(0x88, 0x88, 0x88)),
    row_match: Style::new().add_modifier(Modifier::UNDERLINED),
    hovered_row: Style::new().bg(Color::Rgb(0xdd, 0xdd, 0xdd)),
    selected_row: Style::new().bg(Color::Rgb(0xff, 0xfd, 0x7e)),
    search_row: Style::new()
        .fg(Color::Rgb(0xcc, 0xcc, 0xcc))
        .bg(Color::Rgb(0xee, 0xee, 0xee)),
    search_text_input: Style::new().fg(Color::Black),
    search_placeholder: Style::new()
        .fg(Color::Rgb(0x99, 0x99, 0x99))
        .add_modifier(Modifier::ITALIC),
    status: Style::new().fg(Color::Gray),
    status_error: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
    detail_title: Style::new().add_modifier(Modifier::BOLD),
};

/// Compose the row style: hovered first, then selected, so selected wins
pub fn row_style(hovered: bool, selected: bool) -> Style {
    let mut style = STYLES.row;
    if hovered {
        style = style.patch(STYLES.hovered_row);
    }
    if selected {
        style = style.patch(STYLES.selected_row);
    }
    style
}
