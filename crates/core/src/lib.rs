//! Core logic - pure, deterministic, and testable
//!
//! This crate holds the bounded containers and the controller that moves
//! pieces between them. It has **zero dependencies** on terminals, files or
//! sockets:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: every transition returns a plain value describing what happened
//! - **Portable**: drives both the terminal front end and the headless runner
//!
//! # Module Structure
//!
//! - [`queue`]: fixed-capacity circular queue of upcoming pieces
//! - [`stack`]: fixed-capacity reserve stack
//! - [`rng`]: LCG and the piece generator that owns the sequence counter
//! - [`controller`]: play / reserve / use-reserved and the refill rule
//! - [`snapshot`]: read-only copy of the controller for rendering
//! - [`error`]: the `Empty` / `Full` container errors
//!
//! # Rules
//!
//! - **Queue**: always refilled to capacity after a command
//! - **Reserve**: holds at most 3 pieces by default; the newest is used first
//! - **Ids**: every piece ever generated gets a fresh, increasing id
//!
//! # Example
//!
//! ```
//! use tetris_stack_core::{Controller, ControllerConfig, PlayOutcome, ReserveOutcome};
//!
//! let mut game = Controller::startup(ControllerConfig::intermediate(12345));
//! assert_eq!(game.queue_view().len(), 5);
//!
//! let PlayOutcome::Played(first) = game.play() else { unreachable!() };
//! assert_eq!(first.sequence_id, 0);
//!
//! assert!(matches!(game.reserve(), ReserveOutcome::Reserved(p) if p.sequence_id == 1));
//! assert_eq!(game.reserve_view()[0].sequence_id, 1);
//! assert_eq!(game.queue_view().len(), 5);
//! ```

pub mod controller;
pub mod error;
pub mod queue;
pub mod rng;
pub mod snapshot;
pub mod stack;

pub use tetris_stack_types as types;

// Re-export commonly used types for convenience
pub use controller::{Controller, ControllerConfig, Outcome, PlayOutcome, ReserveOutcome, UseOutcome};
pub use error::ContainerError;
pub use queue::CircularQueue;
pub use rng::{PieceGenerator, SimpleRng};
pub use snapshot::ControllerSnapshot;
pub use stack::BoundedStack;
