//! Key mapping from terminal events to UI actions.

use crate::types::{Direction, GameCommand, Phase};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Command(GameCommand),
    NameChar(char),
    Backspace,
    /// Start the game with the typed name.
    Submit,
    Quit,
}

/// Map keyboard input to a UI action for the current phase.
pub fn map_key(key: KeyEvent, phase: Phase) -> Option<UiAction> {
    if should_quit(key, phase) {
        return Some(UiAction::Quit);
    }

    match phase {
        Phase::NotStarted => match key.code {
            KeyCode::Enter => Some(UiAction::Submit),
            KeyCode::Backspace => Some(UiAction::Backspace),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(UiAction::NameChar(c))
            }
            _ => None,
        },
        Phase::Running | Phase::Paused => {
            if let Some(direction) = direction_for(key.code) {
                return Some(UiAction::Command(GameCommand::ChangeDirection(direction)));
            }
            match key.code {
                KeyCode::Char('p') | KeyCode::Char('P') => {
                    Some(UiAction::Command(GameCommand::TogglePause))
                }
                _ => None,
            }
        }
        Phase::GameOver => match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => {
                Some(UiAction::Command(GameCommand::Reset))
            }
            _ => None,
        },
    }
}

fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(Direction::Up)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(Direction::Down)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(Direction::Right)
        }
        _ => None,
    }
}

/// Check if key should quit the game.
///
/// `q` is a name character while the name is being typed.
pub fn should_quit(key: KeyEvent, phase: Phase) -> bool {
    if key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    {
        return true;
    }
    phase != Phase::NotStarted && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn dir(d: Direction) -> Option<UiAction> {
        Some(UiAction::Command(GameCommand::ChangeDirection(d)))
    }

    #[test]
    fn test_steering_keys() {
        let running = Phase::Running;
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up), running), dir(Direction::Up));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left), running), dir(Direction::Left));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('s')), running), dir(Direction::Down));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('L')), running), dir(Direction::Right));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('k')), running), dir(Direction::Up));
    }

    #[test]
    fn test_pause_key() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('p')), Phase::Running),
            Some(UiAction::Command(GameCommand::TogglePause))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('P')), Phase::Paused),
            Some(UiAction::Command(GameCommand::TogglePause))
        );
    }

    #[test]
    fn test_name_entry_keys() {
        let phase = Phase::NotStarted;
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('w')), phase), Some(UiAction::NameChar('w')));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('q')), phase), Some(UiAction::NameChar('q')));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Backspace), phase), Some(UiAction::Backspace));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter), phase), Some(UiAction::Submit));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up), phase), None);
    }

    #[test]
    fn test_game_over_keys() {
        let reset = Some(UiAction::Command(GameCommand::Reset));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('r')), Phase::GameOver), reset);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter), Phase::GameOver), reset);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up), Phase::GameOver), None);
    }

    #[test]
    fn test_quit_keys() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for phase in [Phase::NotStarted, Phase::Running, Phase::Paused, Phase::GameOver] {
            assert!(should_quit(KeyEvent::from(KeyCode::Esc), phase));
            assert!(should_quit(ctrl_c, phase));
        }
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q')), Phase::Running));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q')), Phase::NotStarted));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x')), Phase::GameOver));
    }
}
