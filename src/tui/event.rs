//! Event handling: maps keyboard events to application messages.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::Message;

/// Map a key event to an optional message.
pub fn map_key_event(key: KeyEvent) -> Option<Message> {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() || c == '-' || c == '+' => {
            Some(Message::InputChar(c))
        }
        KeyCode::Backspace => Some(Message::InputBackspace),

        KeyCode::Tab | KeyCode::Down | KeyCode::Right => Some(Message::FocusNext),
        KeyCode::BackTab | KeyCode::Up | KeyCode::Left => Some(Message::FocusPrev),

        KeyCode::Enter => Some(Message::Submit),
        KeyCode::Esc => Some(Message::Quit),

        _ => None,
    }
}
