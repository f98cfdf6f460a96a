use crate::types::Piece;

/// Read-only copy of everything a front end draws.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ControllerSnapshot {
    /// Head first.
    pub queue: Vec<Piece>,
    /// Top first.
    pub reserve: Vec<Piece>,
    pub queue_capacity: usize,
    pub reserve_capacity: Option<usize>,
    pub next_id: u64,
    pub seed: u32,
    pub transitions: u32,
}

impl ControllerSnapshot {
    pub fn has_reserve(&self) -> bool {
        self.reserve_capacity.is_some()
    }

    pub fn head(&self) -> Option<Piece> {
        self.queue.first().copied()
    }

    pub fn reserve_top(&self) -> Option<Piece> {
        self.reserve.first().copied()
    }

    pub fn reserve_full(&self) -> bool {
        self.reserve_capacity
            .map_or(false, |cap| self.reserve.len() >= cap)
    }
}
