//! Input module.
//!
//! Independent of any UI framework beyond `crossterm` key events. Maps keys
//! into [`crate::types::Command`]s for the terminal front end, and parses the
//! numbered menu options typed into the headless runner.

pub mod map;
pub mod menu;

pub use tetris_stack_types as types;

pub use map::{handle_key_event, key_help, should_quit};
pub use menu::{menu_lines, parse_menu_option, MenuParseError};
