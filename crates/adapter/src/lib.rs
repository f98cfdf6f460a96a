//! Adapter module - command loops that sit in front of the controller
//!
//! Two synchronous front ends for driving a [`core::Controller`] from a
//! stream of lines (stdin in the `headless` binary, plain strings in tests).
//!
//! # Console
//!
//! The numbered menu: `1` play, `2` reserve, `3` use reserved, `0` quit.
//! After each command the outcome and both containers are printed:
//!
//! ```text
//! Played piece [T 0].
//!
//! Piece queue
//! [O 1] [I 2] [L 3] [T 4] [O 5]
//! Reserve stack (top -> base): (empty)
//! ```
//!
//! # JSON
//!
//! Line-delimited JSON, one reply per command:
//!
//! ```text
//! Client -> Runner: {"type":"command","seq":1,"action":"reserve"}
//! Runner -> Client: {"type":"observation","seq":1,"ts":1700000000000,"outcome":{"action":"reserve","result":"reserved","piece":{"kind":"T","id":0},"message":"..."},"queue":[...],"reserve":[{"kind":"T","id":0}],"next_id":6,"transitions":1}
//! Client -> Runner: {"type":"command","seq":1,"action":"play"}
//! Runner -> Client: {"type":"error","seq":1,"ts":1700000000001,"code":"out_of_order","message":"seq 1 must be greater than 1"}
//! ```
//!
//! - See [`protocol`] for message structure definitions
//! - See [`session`] for the JSON command loop and the wire log
//! - See [`console`] for the menu command loop

pub mod console;
pub mod protocol;
pub mod session;

pub use tetris_stack_core as core;
pub use tetris_stack_input as input;
pub use tetris_stack_types as types;

pub use console::{format_queue, format_reserve, format_state, ConsoleSession, ConsoleStep};
pub use protocol::*;
pub use session::{Reply, Session, WireLog};
