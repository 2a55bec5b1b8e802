//! Input module - Keyboard handling for game controls

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Shell-level actions produced from key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    Toggle,
    Undo,
    Redo,
    NewGame,
}

/// Map keyboard input to shell actions
pub fn handle_key_event(key: KeyEvent) -> Option<UiAction> {
    match key.code {
        // Cursor movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(UiAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(UiAction::CursorRight),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(UiAction::CursorUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(UiAction::CursorDown),

        // Actions
        KeyCode::Char(' ') | KeyCode::Enter => Some(UiAction::Toggle),
        KeyCode::Char('u') | KeyCode::Char('U') => Some(UiAction::Undo),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(UiAction::Redo),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(UiAction::NewGame),

        _ => None,
    }
}

/// Check if key should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
