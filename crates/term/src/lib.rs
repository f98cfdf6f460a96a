//! Terminal rendering.
//!
//! Draws the controller state into a simple framebuffer and flushes it to the
//! terminal through crossterm. No widget library.
//!
//! Goals:
//! - Keep `core` free of any terminal concern
//! - Make the view testable without a terminal (`GameView` is pure)
//! - Only rewrite changed cells between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris_stack_core as core;
pub use tetris_stack_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport, TITLE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
