//! Keystroke input handling using crossterm
//!
//! Features:
//! - Non-blocking keystroke capture
//! - Key to game action mapping
//! - Ctrl+C / Escape graceful exit

use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::Result as IoResult;
use std::time::Duration;

/// Game actions a key can trigger
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Exit,
    Trick,
    Treat,
    Back,
    /// Knock on the door
    Tap,
    ToggleMute,
    VolumeUp,
    VolumeDown,
}

/// Handles user input from terminal
pub struct InputHandler {
    /// Timeout for poll operations (milliseconds)
    poll_timeout: Duration,
}

impl InputHandler {
    /// Create new input handler with default timeout (50ms keeps the failure reset timely)
    pub fn new() -> Self {
        InputHandler {
            poll_timeout: Duration::from_millis(50),
        }
    }

    /// Enable raw mode for terminal input
    pub fn enable_raw_mode() -> IoResult<()> {
        crossterm::terminal::enable_raw_mode()
    }

    /// Disable raw mode and restore terminal
    pub fn disable_raw_mode() -> IoResult<()> {
        crossterm::terminal::disable_raw_mode()
    }

    /// Poll for keystroke with timeout (non-blocking)
    /// Returns Some(KeyEvent) if key pressed, None if timeout
    pub fn read_key(&self) -> Result<Option<KeyEvent>, Box<dyn std::error::Error>> {
        if event::poll(self.poll_timeout)? {
            match event::read()? {
                // Only presses; some terminals also report releases and repeats
                event::Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    Ok(Some(key_event))
                }
                _ => Ok(None),
            }
        } else {
            Ok(None)
        }
    }

    /// Check if key event is an exit signal (Ctrl+C or Escape)
    pub fn is_exit(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
            KeyCode::Esc => true,
            _ => false,
        }
    }

    /// Map a key to a game action
    pub fn action(key: &KeyEvent) -> Option<Action> {
        if Self::is_exit(key) {
            return Some(Action::Exit);
        }
        if key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(KeyModifiers::ALT)
        {
            return None;
        }

        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Tap),
            KeyCode::Backspace => Some(Action::Back),
            KeyCode::Up => Some(Action::VolumeUp),
            KeyCode::Down => Some(Action::VolumeDown),
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                't' => Some(Action::Trick),
                'r' => Some(Action::Treat),
                'b' | 'q' => Some(Action::Back),
                'm' => Some(Action::ToggleMute),
                '+' | '=' => Some(Action::VolumeUp),
                '-' => Some(Action::VolumeDown),
                _ => None,
            },
            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_action_mapping() {
        assert_eq!(InputHandler::action(&key(KeyCode::Char(' '))), Some(Action::Tap));
        assert_eq!(InputHandler::action(&key(KeyCode::Enter)), Some(Action::Tap));
        assert_eq!(InputHandler::action(&key(KeyCode::Char('T'))), Some(Action::Trick));
        assert_eq!(InputHandler::action(&key(KeyCode::Char('r'))), Some(Action::Treat));
        assert_eq!(InputHandler::action(&key(KeyCode::Backspace)), Some(Action::Back));
        assert_eq!(InputHandler::action(&key(KeyCode::Char('m'))), Some(Action::ToggleMute));
        assert_eq!(InputHandler::action(&key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_exit_keys() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(InputHandler::action(&ctrl_c), Some(Action::Exit));
        assert_eq!(InputHandler::action(&key(KeyCode::Esc)), Some(Action::Exit));

        let ctrl_t = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL);
        assert_eq!(InputHandler::action(&ctrl_t), None);
    }
}
