//! Key mapping from terminal events to input events.

use crate::types::{Direction, InputEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a game input event.
///
/// Arrows, WASD and vim-style HJKL slide tiles; `q`, `Esc` and Ctrl+C quit.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if should_quit(key) {
        return Some(InputEvent::Quit);
    }
    map_direction(key.code).map(InputEvent::KeyPress)
}

fn map_direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Direction::Right)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Direction::Up)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Direction::Down)
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> Option<InputEvent> {
        map_key(KeyEvent::from(code))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(press(KeyCode::Left), Some(InputEvent::KeyPress(Direction::Left)));
        assert_eq!(press(KeyCode::Right), Some(InputEvent::KeyPress(Direction::Right)));
        assert_eq!(press(KeyCode::Up), Some(InputEvent::KeyPress(Direction::Up)));
        assert_eq!(press(KeyCode::Down), Some(InputEvent::KeyPress(Direction::Down)));
    }

    #[test]
    fn test_letter_keys() {
        assert_eq!(press(KeyCode::Char('a')), Some(InputEvent::KeyPress(Direction::Left)));
        assert_eq!(press(KeyCode::Char('L')), Some(InputEvent::KeyPress(Direction::Right)));
        assert_eq!(press(KeyCode::Char('W')), Some(InputEvent::KeyPress(Direction::Up)));
        assert_eq!(press(KeyCode::Char('j')), Some(InputEvent::KeyPress(Direction::Down)));
        assert_eq!(press(KeyCode::Char('x')), None);
        assert_eq!(press(KeyCode::Char(' ')), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(press(KeyCode::Char('Q')), Some(InputEvent::Quit));
    }
}
