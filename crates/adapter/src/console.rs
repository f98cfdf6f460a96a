//! Plain-text console: numbered menu in, state printout out.

use crate::core::{Controller, ControllerSnapshot, Outcome};
use crate::input::{menu_lines, parse_menu_option, MenuParseError};
use crate::types::{Command, Piece};

pub const BANNER: &str = "Tetris Stack - piece manager";

fn pieces_line(pieces: &[Piece]) -> String {
    if pieces.is_empty() {
        return "(empty)".to_string();
    }
    pieces
        .iter()
        .map(Piece::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `Piece queue` heading plus the pieces, head first.
pub fn format_queue(pieces: &[Piece]) -> String {
    format!("Piece queue\n{}\n", pieces_line(pieces))
}

/// Reserve stack, top first, on one line.
pub fn format_reserve(pieces: &[Piece]) -> String {
    format!("Reserve stack (top -> base): {}\n", pieces_line(pieces))
}

/// Queue, and the reserve when there is one.
pub fn format_state(snap: &ControllerSnapshot) -> String {
    let mut out = format_queue(&snap.queue);
    if snap.has_reserve() {
        out.push_str(&format_reserve(&snap.reserve));
    }
    out
}

/// Output of one menu line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleStep {
    pub output: String,
    pub quit: bool,
}

pub struct ConsoleSession {
    controller: Controller,
}

impl ConsoleSession {
    pub fn new(controller: Controller) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Title and starting state.
    pub fn banner(&self) -> String {
        let mode = if self.controller.has_reserve() {
            "queue + reserve"
        } else {
            "queue"
        };
        format!(
            "{} ({})\n\n{}",
            BANNER,
            mode,
            format_state(&self.controller.snapshot())
        )
    }

    /// Options menu followed by the `Choose: ` prompt (no trailing newline).
    pub fn prompt(&self) -> String {
        let mut out = String::from("\nOptions:\n");
        for line in menu_lines(self.controller.has_reserve()) {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("Choose: ");
        out
    }

    pub fn handle_line(&mut self, line: &str) -> ConsoleStep {
        match parse_menu_option(line, self.controller.has_reserve()) {
            Ok(Command::Quit) => ConsoleStep {
                output: format!("{}\n", Outcome::Quit.message()),
                quit: true,
            },
            Ok(command) => {
                let outcome = self.controller.apply(command);
                ConsoleStep {
                    output: format!(
                        "{}\n\n{}",
                        outcome.message(),
                        format_state(&self.controller.snapshot())
                    ),
                    quit: false,
                }
            }
            Err(MenuParseError::Malformed) => ConsoleStep {
                output: "Invalid option: not a number.\n".to_string(),
                quit: false,
            },
            Err(MenuParseError::OutOfRange(n)) => ConsoleStep {
                output: format!("Invalid option: {}.\n", n),
                quit: false,
            },
        }
    }
}
