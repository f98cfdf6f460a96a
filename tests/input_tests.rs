//! Key map and menu parsing agree on what each mode allows.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tetris_stack::input::{handle_key_event, menu_lines, parse_menu_option, should_quit};
use tetris_stack::types::Command;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn digit_keys_match_menu_numbers() {
    for (digit, n) in [('1', "1"), ('2', "2"), ('3', "3")] {
        let from_key = handle_key_event(key(KeyCode::Char(digit)), true);
        let from_menu = parse_menu_option(n, true).ok();
        assert_eq!(from_key, from_menu, "digit {}", digit);
    }
}

#[test]
fn reserve_commands_need_reserve_mode() {
    for enabled in [true, false] {
        let reserve_key = handle_key_event(key(KeyCode::Char('2')), enabled);
        let reserve_menu = parse_menu_option("2", enabled);
        assert_eq!(reserve_key.is_some(), enabled);
        assert_eq!(reserve_menu.is_ok(), enabled);
        assert_eq!(
            menu_lines(enabled).iter().any(|l| l.starts_with("2 - ")),
            enabled
        );
    }
}

#[test]
fn quit_paths() {
    assert!(should_quit(key(KeyCode::Char('q'))));
    assert!(should_quit(key(KeyCode::Esc)));
    assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(!should_quit(key(KeyCode::Char('1'))));
    assert_eq!(parse_menu_option("0", false), Ok(Command::Quit));
}
