//! Numbered console menu.

use derive_more::{Display, Error};

use crate::types::Command;

/// Why a typed menu line was rejected.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum MenuParseError {
    /// The line is not an integer.
    #[display("not a number")]
    Malformed,
    /// An integer that names no option in the current mode.
    #[display("{_0}")]
    OutOfRange(#[error(not(source))] i64),
}

/// Parse one line typed at the `Choose:` prompt.
///
/// `0` quits and `1` plays; `2` and `3` exist only when `reserve_enabled`.
pub fn parse_menu_option(line: &str, reserve_enabled: bool) -> Result<Command, MenuParseError> {
    let n: i64 = line
        .trim()
        .parse()
        .map_err(|_| MenuParseError::Malformed)?;
    let cmd = match n {
        0 => Command::Quit,
        1 => Command::Play,
        2 => Command::Reserve,
        3 => Command::UseReserved,
        other => return Err(MenuParseError::OutOfRange(other)),
    };
    if cmd.needs_reserve() && !reserve_enabled {
        return Err(MenuParseError::OutOfRange(n));
    }
    Ok(cmd)
}

/// Menu text, one entry per line.
pub fn menu_lines(reserve_enabled: bool) -> &'static [&'static str] {
    if reserve_enabled {
        &[
            "1 - Play piece",
            "2 - Reserve piece (queue -> stack)",
            "3 - Use reserved piece",
            "0 - Quit",
        ]
    } else {
        &["1 - Play piece", "0 - Quit"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_option() {
        assert_eq!(parse_menu_option("0", true), Ok(Command::Quit));
        assert_eq!(parse_menu_option("1", true), Ok(Command::Play));
        assert_eq!(parse_menu_option(" 2 \n", true), Ok(Command::Reserve));
        assert_eq!(parse_menu_option("3", true), Ok(Command::UseReserved));
    }

    #[test]
    fn malformed_and_out_of_range_are_distinct() {
        assert_eq!(parse_menu_option("abc", true), Err(MenuParseError::Malformed));
        assert_eq!(parse_menu_option("", true), Err(MenuParseError::Malformed));
        assert_eq!(parse_menu_option("7", true), Err(MenuParseError::OutOfRange(7)));
        assert_eq!(parse_menu_option("-1", true), Err(MenuParseError::OutOfRange(-1)));
    }

    #[test]
    fn reserve_options_rejected_in_basic_mode() {
        assert_eq!(parse_menu_option("1", false), Ok(Command::Play));
        assert_eq!(parse_menu_option("2", false), Err(MenuParseError::OutOfRange(2)));
        assert_eq!(parse_menu_option("3", false), Err(MenuParseError::OutOfRange(3)));
    }

    #[test]
    fn error_display() {
        assert_eq!(MenuParseError::Malformed.to_string(), "not a number");
        assert_eq!(MenuParseError::OutOfRange(9).to_string(), "9");
    }

    #[test]
    fn menu_lists_reserve_options_only_when_enabled() {
        assert_eq!(menu_lines(true).len(), 4);
        assert_eq!(menu_lines(false), &["1 - Play piece", "0 - Quit"]);
    }
}
