//! Key mapping from terminal events to commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to commands.
///
/// Reserve keys map to nothing when `reserve_enabled` is false.
pub fn handle_key_event(key: KeyEvent, reserve_enabled: bool) -> Option<Command> {
    let cmd = match key.code {
        KeyCode::Char('1') | KeyCode::Char(' ') | KeyCode::Enter => Command::Play,
        KeyCode::Char('2') | KeyCode::Char('r') | KeyCode::Char('R') => Command::Reserve,
        KeyCode::Char('3') | KeyCode::Char('u') | KeyCode::Char('U') => Command::UseReserved,
        KeyCode::Char('0') => Command::Quit,
        _ => return None,
    };
    if cmd.needs_reserve() && !reserve_enabled {
        return None;
    }
    Some(cmd)
}

/// Key bindings shown under the panels.
pub fn key_help(reserve_enabled: bool) -> &'static [&'static str] {
    if reserve_enabled {
        &[
            "1 / Space   play piece",
            "2 / r       reserve piece",
            "3 / u       use reserved piece",
            "0 / q       quit",
        ]
    } else {
        &["1 / Space   play piece", "0 / q       quit"]
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('0') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_play_keys() {
        for code in [KeyCode::Char('1'), KeyCode::Char(' '), KeyCode::Enter] {
            assert_eq!(handle_key_event(KeyEvent::from(code), true), Some(Command::Play));
            assert_eq!(handle_key_event(KeyEvent::from(code), false), Some(Command::Play));
        }
    }

    #[test]
    fn test_reserve_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('2')), true),
            Some(Command::Reserve)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R')), true),
            Some(Command::Reserve)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('3')), true),
            Some(Command::UseReserved)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('u')), true),
            Some(Command::UseReserved)
        );
    }

    #[test]
    fn test_reserve_keys_ignored_without_reserve() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('2')), false), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('3')), false), None);
    }

    #[test]
    fn test_unmapped_key() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x')), true), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left), true), None);
    }

    #[test]
    fn test_key_help_matches_mode() {
        assert_eq!(key_help(true).len(), 4);
        assert!(key_help(false).iter().all(|l| !l.contains("reserve")));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('0'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('1'))));
    }
}
