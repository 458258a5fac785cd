//! Key bindings for the word table
//!
//! - `s`, `Enter`, `Space` → toggle sort order
//! - `↓`/`j`, `↑`/`k` → move selection
//! - `PgDn`, `PgUp` → move selection by a page
//! - `Home`/`g`, `End`/`G` → first / last row
//! - `q`, `Esc`, `Ctrl-C` → quit
//!
//! Only key presses are translated. Release and repeat events, which some
//! platforms report as separate events, map to `AppEvent::None`.

use crate::app::AppEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// One-line key help for the footer
pub const KEY_HELP: &str = "s sort · ↑↓ move · PgUp/PgDn page · q quit";

/// Translate a terminal key event into an AppEvent
pub fn key_to_app_event(key: KeyEvent) -> AppEvent {
    if key.kind != KeyEventKind::Press {
        return AppEvent::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => AppEvent::Quit,
            _ => AppEvent::None,
        };
    }

    match key.code {
        KeyCode::Char('s') | KeyCode::Char(' ') | KeyCode::Enter => AppEvent::ToggleSort,
        KeyCode::Down | KeyCode::Char('j') => AppEvent::SelectNext,
        KeyCode::Up | KeyCode::Char('k') => AppEvent::SelectPrevious,
        KeyCode::PageDown => AppEvent::PageDown,
        KeyCode::PageUp => AppEvent::PageUp,
        KeyCode::Home | KeyCode::Char('g') => AppEvent::SelectFirst,
        KeyCode::End | KeyCode::Char('G') => AppEvent::SelectLast,
        KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
        _ => AppEvent::None,
    }
}
