//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, the JSON protocol).
//!
//! # Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Upcoming pieces kept in the circular queue |
//! | `RESERVE_CAPACITY` | 3 | Pieces that can be set aside in the reserve stack |
//!
//! # Examples
//!
//! ```
//! use tetris_stack_types::{Command, Piece, PieceKind, QUEUE_CAPACITY};
//!
//! // Parse from string (case-insensitive)
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! // Pieces print as `[K id]`
//! let piece = Piece::new(kind, 7);
//! assert_eq!(piece.to_string(), "[T 7]");
//!
//! // Parse a command
//! assert_eq!(Command::from_str("useReserved"), Some(Command::UseReserved));
//!
//! assert_eq!(QUEUE_CAPACITY, 5);
//! ```

use std::fmt;

/// Number of upcoming pieces held in the queue (kept full at all times).
pub const QUEUE_CAPACITY: usize = 5;

/// Number of pieces the reserve stack can hold.
pub const RESERVE_CAPACITY: usize = 3;

/// Piece kinds the generator draws from, in a fixed order.
pub const PIECE_KINDS: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacities() {
        assert_eq!(QUEUE_CAPACITY, 5);
        assert_eq!(RESERVE_CAPACITY, 3);
        assert!(RESERVE_CAPACITY < QUEUE_CAPACITY);
    }

    #[test]
    fn piece_kinds_round_trip_through_letters() {
        for kind in PIECE_KINDS {
            assert_eq!(PieceKind::from_str(kind.letter()), Some(kind));
        }
    }

    #[test]
    fn piece_display_matches_console_format() {
        assert_eq!(Piece::new(PieceKind::I, 0).to_string(), "[I 0]");
        assert_eq!(Piece::new(PieceKind::L, 42).to_string(), "[L 42]");
    }

    #[test]
    fn command_names_round_trip() {
        for cmd in [
            Command::Play,
            Command::Reserve,
            Command::UseReserved,
            Command::Quit,
        ] {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
    }
}

/// The tetromino labels used for upcoming pieces
///
/// - **I**: horizontal bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **L**: L-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("s"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Upper-case single letter, as shown in the queue panel.
    pub fn letter(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// An upcoming piece: a kind plus the unique id it was generated with.
///
/// Pieces are plain values. Moving one from the queue to the reserve copies it;
/// nothing else keeps a reference to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub sequence_id: u64,
}

impl Piece {
    pub const fn new(kind: PieceKind, sequence_id: u64) -> Self {
        Self { kind, sequence_id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind, self.sequence_id)
    }
}

/// Commands that drive the controller
///
/// These are produced by both the terminal key map and the JSON protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the piece at the head of the queue
    Play,
    /// Move the head of the queue onto the reserve stack
    Reserve,
    /// Consume the piece on top of the reserve stack
    UseReserved,
    /// Leave the command loop
    Quit,
}

impl Command {
    /// Parse command from string (for the JSON protocol)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::Command;
    ///
    /// assert_eq!(Command::from_str("play"), Some(Command::Play));
    /// assert_eq!(Command::from_str("RESERVE"), Some(Command::Reserve));
    /// assert_eq!(Command::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "play" => Some(Command::Play),
            "reserve" => Some(Command::Reserve),
            "usereserved" => Some(Command::UseReserved),
            "quit" => Some(Command::Quit),
            _ => None,
        }
    }

    /// Convert to camelCase string for the JSON protocol
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Play => "play",
            Command::Reserve => "reserve",
            Command::UseReserved => "useReserved",
            Command::Quit => "quit",
        }
    }

    /// Whether the command needs the reserve stack.
    pub fn needs_reserve(&self) -> bool {
        matches!(self, Command::Reserve | Command::UseReserved)
    }
}
