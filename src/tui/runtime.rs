//! Terminal setup and the main event loop

use crate::constants::EVENT_POLL_MILLIS;
use crate::tui::app::App;
use crate::tui::events::EventHandler;
use crate::{logging, ExplorerError, Result};
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};
use ratatui::DefaultTerminal;
use std::io;
use std::time::Duration;

/// Runs `restore` when dropped, on early returns and while unwinding alike
struct RestoreGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Take over the terminal, run the app until it quits, then restore the terminal
///
/// The terminal is restored however the loop ends, including a panic. Setup that
/// fails halfway is undone too.
pub fn run(mut app: App) -> Result<()> {
    let _restore = RestoreGuard::new(restore_terminal);

    // also installs a panic hook that restores before the message is printed
    let mut terminal = ratatui::try_init()
        .map_err(|e| ExplorerError::terminal_error(&format!("Failed to set up terminal: {}", e)))?;
    execute!(io::stdout(), EnableMouseCapture).map_err(|e| {
        ExplorerError::terminal_error(&format!("Failed to enable mouse capture: {}", e))
    })?;

    event_loop(&mut terminal, &mut app)
}

/// Undo every setup step; a failing step does not stop the others
fn restore_terminal() {
    let steps: [(&str, io::Result<()>); 4] = [
        ("disable mouse capture", execute!(io::stdout(), DisableMouseCapture)),
        ("disable raw mode", disable_raw_mode()),
        ("leave alternate screen", execute!(io::stdout(), LeaveAlternateScreen)),
        ("show cursor", execute!(io::stdout(), Show)),
    ];

    for (step, result) in steps {
        if let Err(e) = result {
            logging::warn_log(&format!("Failed to {}: {}", step, e));
        }
    }
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    let events = EventHandler::new();
    let timeout = Duration::from_millis(EVENT_POLL_MILLIS);

    while !app.should_quit {
        terminal
            .draw(|frame| app.draw(frame))
            .map_err(|e| ExplorerError::TuiError(format!("Draw failed: {}", e)))?;

        match events.next_event(timeout)? {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                let action = events.handle_key_event(key);
                logging::trace_log(&format!("Key {:?} -> {:?}", key.code, action));
                app.handle_key_action(action)?;
            }
            Some(Event::Mouse(mouse)) => {
                app.handle_mouse_action(events.handle_mouse_event(mouse));
            }
            Some(_) | None => {}
        }
    }

    logging::info_log("Explorer closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn test_restore_runs_when_setup_fails_halfway() {
        let restored = Cell::new(0);

        let result = (|| -> Result<()> {
            let _restore = RestoreGuard::new(|| restored.set(restored.get() + 1));
            Err(ExplorerError::terminal_error("Failed to enable mouse capture"))
        })();

        assert!(result.is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_restore_runs_when_loop_panics() {
        let restored = Cell::new(0);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let _restore = RestoreGuard::new(|| restored.set(restored.get() + 1));
            panic!("draw blew up");
        }));

        assert!(outcome.is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_restore_runs_once_on_clean_exit() {
        let restored = Cell::new(0);
        {
            let _restore = RestoreGuard::new(|| restored.set(restored.get() + 1));
            assert_eq!(restored.get(), 0);
        }
        assert_eq!(restored.get(), 1);
    }
}
