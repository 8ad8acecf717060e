//! Event handling for keyboard and mouse input

use crate::{ExplorerError, Result};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Event handler for TUI input
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    /// Create a new event handler
    pub fn new() -> Self {
        Self
    }

    /// Poll for the next event with timeout
    pub fn next_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)
            .map_err(|e| ExplorerError::TuiError(format!("Event polling failed: {}", e)))?
        {
            let event = event::read()
                .map_err(|e| ExplorerError::TuiError(format!("Event reading failed: {}", e)))?;
            Ok(Some(event))
        } else {
            Ok(None)
        }
    }

    /// Handle a mouse event and return the action to take
    pub fn handle_mouse_event(&self, event: MouseEvent) -> MouseAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                MouseAction::ClickAt(event.column, event.row)
            }
            MouseEventKind::Moved => MouseAction::HoverAt(event.column, event.row),
            _ => MouseAction::None,
        }
    }

    /// Handle a key event and return the action to take
    pub fn handle_key_event(&self, event: KeyEvent) -> KeyAction {
        match event {
            KeyEvent {
                code: KeyCode::Esc, ..
            } => KeyAction::Quit,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => KeyAction::Quit,
            KeyEvent {
                code: KeyCode::Up, ..
            } => KeyAction::MovePrevious,
            KeyEvent {
                code: KeyCode::Down,
                ..
            } => KeyAction::MoveNext,
            KeyEvent {
                code: KeyCode::Enter,
                ..
            } => KeyAction::PressRow,
            KeyEvent {
                code: KeyCode::Left,
                ..
            } => KeyAction::CloseDetail,
            KeyEvent {
                code: KeyCode::Char('u'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => KeyAction::ClearSearch,
            KeyEvent {
                code: KeyCode::Char(c),
                modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
                ..
            } => KeyAction::InputChar(c),
            KeyEvent {
                code: KeyCode::Backspace,
                modifiers: KeyModifiers::NONE,
                ..
            } => KeyAction::DeleteChar,
            _ => KeyAction::None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum KeyAction {
    Quit,
    MovePrevious,
    MoveNext,
    PressRow,
    CloseDetail,
    ClearSearch,
    InputChar(char),
    DeleteChar,
    None,
}

#[derive(Debug, PartialEq)]
pub enum MouseAction {
    None,
    ClickAt(u16, u16),
    HoverAt(u16, u16),
}
