//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
    /// The view was torn down and mounted again.
    Reloaded,
    /// Event was consumed.
    Consumed,
}

/// Terminal event classification helpers.
pub struct EventHandler;

impl EventHandler {
    /// Checks if key is the hard quit chord, which no keybinding can override.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Checks if the mouse event is a left click inside `area`.
    #[must_use]
    pub fn is_click_in(mouse: &MouseEvent, area: Rect) -> bool {
        matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
            && area.contains(Position::new(mouse.column, mouse.row))
    }
}
