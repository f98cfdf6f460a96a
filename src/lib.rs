//! Tetris Stack (workspace facade crate).
//!
//! Re-exports the workspace crates as `tetris_stack::{types,core,input,term,adapter}`
//! and adds the pieces both binaries share: environment configuration and the
//! line-oriented command loops.

pub mod config;
pub mod runner;

pub use tetris_stack_adapter as adapter;
pub use tetris_stack_core as core;
pub use tetris_stack_input as input;
pub use tetris_stack_term as term;
pub use tetris_stack_types as types;

pub use config::AppConfig;
