//! Game controller: the queue, the optional reserve stack and the generator.
//!
//! Every transition ends by refilling the queue to capacity, so callers always
//! observe a full queue between commands.

use std::fmt;

use crate::error::ContainerError;
use crate::queue::CircularQueue;
use crate::rng::PieceGenerator;
use crate::snapshot::ControllerSnapshot;
use crate::stack::BoundedStack;
use crate::types::{Command, Piece, QUEUE_CAPACITY, RESERVE_CAPACITY};

/// Startup parameters.
///
/// `reserve_capacity: None` selects the basic (queue-only) variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    pub queue_capacity: usize,
    pub reserve_capacity: Option<usize>,
    pub seed: u32,
}

impl ControllerConfig {
    /// Queue only, default capacity.
    pub fn basic(seed: u32) -> Self {
        Self {
            queue_capacity: QUEUE_CAPACITY,
            reserve_capacity: None,
            seed,
        }
    }

    /// Queue plus reserve stack, default capacities.
    pub fn intermediate(seed: u32) -> Self {
        Self {
            queue_capacity: QUEUE_CAPACITY,
            reserve_capacity: Some(RESERVE_CAPACITY),
            seed,
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::intermediate(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Played(Piece),
    NothingToPlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReserveOutcome {
    Reserved(Piece),
    ReserveFull,
    NothingToReserve,
    /// The controller was started without a reserve stack.
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseOutcome {
    Used(Piece),
    NothingReserved,
    /// The controller was started without a reserve stack.
    Unavailable,
}

/// Result of [`Controller::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Play(PlayOutcome),
    Reserve(ReserveOutcome),
    Use(UseOutcome),
    Quit,
}

impl Outcome {
    /// The piece that moved, if any.
    pub fn piece(&self) -> Option<Piece> {
        match *self {
            Outcome::Play(PlayOutcome::Played(p))
            | Outcome::Reserve(ReserveOutcome::Reserved(p))
            | Outcome::Use(UseOutcome::Used(p)) => Some(p),
            _ => None,
        }
    }

    /// Whether the command changed any container.
    pub fn succeeded(&self) -> bool {
        self.piece().is_some()
    }

    /// Line shown to the player after the command.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Play(PlayOutcome::Played(p)) => write!(f, "Played piece {}.", p),
            Outcome::Play(PlayOutcome::NothingToPlay) => {
                f.write_str("Queue is empty. No piece to play.")
            }
            Outcome::Reserve(ReserveOutcome::Reserved(p)) => {
                write!(f, "Reserved piece {} onto the stack.", p)
            }
            Outcome::Reserve(ReserveOutcome::ReserveFull) => {
                f.write_str("Reserve is full. Cannot reserve more pieces.")
            }
            Outcome::Reserve(ReserveOutcome::NothingToReserve) => {
                f.write_str("Queue is empty. No piece to reserve.")
            }
            Outcome::Use(UseOutcome::Used(p)) => write!(f, "Used reserved piece {}.", p),
            Outcome::Use(UseOutcome::NothingReserved) => {
                f.write_str("Reserve is empty. No reserved piece to use.")
            }
            Outcome::Reserve(ReserveOutcome::Unavailable)
            | Outcome::Use(UseOutcome::Unavailable) => {
                f.write_str("No reserve stack in this mode.")
            }
            Outcome::Quit => f.write_str("Exiting..."),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Controller {
    queue: CircularQueue<Piece>,
    reserve: Option<BoundedStack<Piece>>,
    generator: PieceGenerator,
    transitions: u32,
}

impl Controller {
    /// Build the containers and fill the queue to capacity.
    pub fn startup(config: ControllerConfig) -> Self {
        let mut controller = Self {
            queue: CircularQueue::new(config.queue_capacity),
            reserve: config.reserve_capacity.map(BoundedStack::new),
            generator: PieceGenerator::new(config.seed),
            transitions: 0,
        };
        controller.refill();
        controller
    }

    /// Enqueue freshly generated pieces until the queue is full.
    fn refill(&mut self) {
        while !self.queue.is_full() {
            let piece = self.generator.generate();
            if self.queue.enqueue(piece).is_err() {
                break;
            }
        }
    }

    /// Play the head of the queue.
    pub fn play(&mut self) -> PlayOutcome {
        let outcome = match self.queue.dequeue() {
            Ok(piece) => PlayOutcome::Played(piece),
            Err(_) => PlayOutcome::NothingToPlay,
        };
        self.finish();
        outcome
    }

    /// Move the head of the queue onto the reserve stack.
    pub fn reserve(&mut self) -> ReserveOutcome {
        let outcome = self.move_head_to_reserve();
        self.finish();
        outcome
    }

    fn move_head_to_reserve(&mut self) -> ReserveOutcome {
        let Some(reserve) = self.reserve.as_mut() else {
            return ReserveOutcome::Unavailable;
        };
        if reserve.is_full() {
            return ReserveOutcome::ReserveFull;
        }
        let piece = match self.queue.dequeue() {
            Ok(piece) => piece,
            Err(_) => return ReserveOutcome::NothingToReserve,
        };
        match reserve.push(piece) {
            Ok(()) => ReserveOutcome::Reserved(piece),
            Err(_) => {
                // The dequeue above freed the head slot, so the piece always fits back.
                let restored = self.queue.push_front(piece);
                debug_assert!(restored.is_ok(), "could not put {} back at the head", piece);
                ReserveOutcome::ReserveFull
            }
        }
    }

    /// Consume the top of the reserve stack.
    pub fn use_reserved(&mut self) -> UseOutcome {
        let outcome = match self.reserve.as_mut().map(BoundedStack::pop) {
            None => UseOutcome::Unavailable,
            Some(Ok(piece)) => UseOutcome::Used(piece),
            Some(Err(ContainerError::Empty)) | Some(Err(ContainerError::Full)) => {
                UseOutcome::NothingReserved
            }
        };
        self.finish();
        outcome
    }

    /// Dispatch a command to the matching transition.
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Play => Outcome::Play(self.play()),
            Command::Reserve => Outcome::Reserve(self.reserve()),
            Command::UseReserved => Outcome::Use(self.use_reserved()),
            Command::Quit => Outcome::Quit,
        }
    }

    fn finish(&mut self) {
        self.refill();
        self.transitions = self.transitions.saturating_add(1);
    }

    pub fn has_reserve(&self) -> bool {
        self.reserve.is_some()
    }

    /// Upcoming pieces, head first.
    pub fn queue_view(&self) -> Vec<Piece> {
        self.queue.snapshot()
    }

    /// Reserved pieces, top first. Empty without a reserve stack.
    pub fn reserve_view(&self) -> Vec<Piece> {
        self.reserve
            .as_ref()
            .map(BoundedStack::snapshot)
            .unwrap_or_default()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn queue_capacity(&self) -> usize {
        self.queue.capacity()
    }

    pub fn reserve_len(&self) -> usize {
        self.reserve.as_ref().map_or(0, BoundedStack::len)
    }

    pub fn reserve_capacity(&self) -> Option<usize> {
        self.reserve.as_ref().map(BoundedStack::capacity)
    }

    /// Number of play/reserve/use transitions applied since startup.
    pub fn transitions(&self) -> u32 {
        self.transitions
    }

    pub fn next_id(&self) -> u64 {
        self.generator.next_id()
    }

    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            queue: self.queue_view(),
            reserve: self.reserve_view(),
            queue_capacity: self.queue_capacity(),
            reserve_capacity: self.reserve_capacity(),
            next_id: self.next_id(),
            seed: self.seed(),
            transitions: self.transitions,
        }
    }

    /// Remove every queued piece without refilling.
    ///
    /// Only for exercising the empty-queue paths.
    #[cfg(test)]
    pub(crate) fn drain_queue(&mut self) {
        while self.queue.dequeue().is_ok() {}
    }
}
