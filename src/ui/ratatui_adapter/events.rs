//! Event handling for the ratatui TUI
//!
//! Maps keyboard and mouse events to form edits, focus moves and the
//! Search and Reset actions.

use super::state::{AppState, Focus, Mode};
use crate::form::FieldEdit;
use crate::schema::UiType;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Leave the portal
    Quit,
    /// No action taken
    Ignored,
}

/// Translate a key into an edit of the focused field
fn field_edit(key: KeyEvent, ui_type: UiType) -> Option<FieldEdit> {
    let select = ui_type == UiType::Select;
    let edit = match (key.code, key.modifiers) {
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => FieldEdit::Clear,
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => FieldEdit::DeleteWord,
        (KeyCode::Char(' '), _) if select => FieldEdit::NextOption,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => FieldEdit::Insert(c),
        (KeyCode::Backspace, _) => FieldEdit::Backspace,
        (KeyCode::Delete, _) => FieldEdit::Delete,
        (KeyCode::Left, _) if select => FieldEdit::PrevOption,
        (KeyCode::Right, _) if select => FieldEdit::NextOption,
        (KeyCode::Left, _) => FieldEdit::Left,
        (KeyCode::Right, _) => FieldEdit::Right,
        (KeyCode::Home, _) => FieldEdit::Home,
        (KeyCode::End, _) => FieldEdit::End,
        _ => return None,
    };
    Some(edit)
}

/// Handle events in normal mode
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.should_exit = true;
            return EventResult::Quit;
        }

        // Help overlay
        (KeyCode::F(1), _) => {
            state.mode = Mode::Help;
            return EventResult::Continue;
        }

        // Form actions
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
            return if state.reset() {
                EventResult::Continue
            } else {
                EventResult::Ignored
            };
        }
        (KeyCode::Enter, _) => {
            let acted = match state.focus {
                Focus::Reset => state.reset(),
                Focus::Results => false,
                Focus::Field(_) | Focus::Search => state.submit().is_some(),
            };
            return if acted {
                EventResult::Continue
            } else {
                EventResult::Ignored
            };
        }

        // Focus
        (KeyCode::Tab, _) => {
            state.focus_next();
            return EventResult::Continue;
        }
        (KeyCode::BackTab, _) => {
            state.focus_prev();
            return EventResult::Continue;
        }
        _ => {}
    }

    match state.focus {
        Focus::Results => match key.code {
            KeyCode::Up => {
                state.cursor_up();
                EventResult::Continue
            }
            KeyCode::Down => {
                state.cursor_down();
                EventResult::Continue
            }
            _ => EventResult::Ignored,
        },
        Focus::Field(_) => {
            if key.code == KeyCode::Down {
                state.focus_next();
                return EventResult::Continue;
            }
            if key.code == KeyCode::Up {
                state.focus_prev();
                return EventResult::Continue;
            }
            let Some(edit) = state.focused_ui_type().and_then(|t| field_edit(key, t)) else {
                return EventResult::Ignored;
            };
            // Cursor moves change nothing but still need a redraw
            state.edit_focused(edit);
            EventResult::Continue
        }
        Focus::Search | Focus::Reset => match key.code {
            KeyCode::Down | KeyCode::Right => {
                state.focus_next();
                EventResult::Continue
            }
            KeyCode::Up | KeyCode::Left => {
                state.focus_prev();
                EventResult::Continue
            }
            KeyCode::Char('?') => {
                state.mode = Mode::Help;
                EventResult::Continue
            }
            _ => EventResult::Ignored,
        },
    }
}

/// Handle events in help mode
fn handle_help_mode(state: &mut AppState) -> EventResult {
    // Any key closes help
    state.mode = Mode::Normal;
    EventResult::Continue
}

/// Handle mouse events
fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.cursor_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.cursor_down();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Dispatch a single key press
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    if key.kind != KeyEventKind::Press {
        return EventResult::Ignored;
    }
    match state.mode {
        Mode::Normal => handle_normal_mode(state, key),
        Mode::Help => handle_help_mode(state),
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Ignored);
    }

    let result = match event::read()? {
        Event::Key(key) => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}
