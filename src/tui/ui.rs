//! UI rendering and layout module

use crate::tui::app::App;
use crate::tui::page::Renderable;
use crate::tui::styles::STYLES;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Split the screen into list, detail and status line, then draw each
pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    app.explorer.render(frame, panes[0]);
    draw_detail(frame, panes[1], app.detail.as_ref());
    draw_status(frame, rows[1], app);
}

fn draw_detail(frame: &mut Frame<'_>, area: Rect, detail: Option<&Renderable>) {
    let block = Block::default().borders(Borders::ALL).title(" Details ");

    let text = match detail {
        None => Text::from(Line::from(Span::styled(
            "Press enter or click a row to open it",
            STYLES.search_placeholder,
        ))),
        Some(Renderable::Leaf(example)) => Text::from(vec![
            Line::from(Span::styled(example.title.clone(), STYLES.detail_title)),
            Line::from(""),
            Line::from(example.description.clone()),
        ]),
        Some(Renderable::Page(page)) => {
            let mut lines = vec![
                Line::from(Span::styled(page.title.clone(), STYLES.detail_title)),
                Line::from(Span::styled(page.description.clone(), STYLES.row_detail)),
                Line::from(""),
            ];
            lines.extend(page.examples.iter().map(|example| {
                Line::from(vec![
                    Span::styled(format!("- {}", example.title), STYLES.detail_title),
                    Span::styled(format!("  {}", example.description), STYLES.row_detail),
                ])
            }));
            Text::from(lines)
        }
    };

    frame.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn draw_status(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let style = if app.status.is_some() {
        STYLES.status_error
    } else {
        STYLES.status
    };
    frame.render_widget(Paragraph::new(app.status_line()).style(style), area);
}
