//! Fixed-capacity circular queue.
//!
//! Slots live in one boxed slice allocated at construction. `head` indexes the
//! oldest element and the tail is derived as `(head + len) % capacity`, so
//! neither enqueue nor dequeue ever shifts elements.

use crate::error::ContainerError;

#[derive(Debug, Clone)]
pub struct CircularQueue<T> {
    slots: Box<[Option<T>]>,
    head: usize,
    len: usize,
}

impl<T> CircularQueue<T> {
    /// Create an empty queue. A capacity of 0 is raised to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            head: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    #[inline(always)]
    fn wrap(&self, idx: usize) -> usize {
        idx % self.capacity()
    }

    /// Append at the tail.
    pub fn enqueue(&mut self, item: T) -> Result<(), ContainerError> {
        if self.is_full() {
            return Err(ContainerError::Full);
        }
        let tail = self.wrap(self.head + self.len);
        self.slots[tail] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the head.
    pub fn dequeue(&mut self) -> Result<T, ContainerError> {
        if self.is_empty() {
            return Err(ContainerError::Empty);
        }
        let item = self.slots[self.head].take().ok_or(ContainerError::Empty)?;
        self.head = self.wrap(self.head + 1);
        self.len -= 1;
        Ok(item)
    }

    /// Insert at the head, in front of everything already queued.
    ///
    /// Used to put back an element that was just dequeued.
    pub fn push_front(&mut self, item: T) -> Result<(), ContainerError> {
        if self.is_full() {
            return Err(ContainerError::Full);
        }
        self.head = self.wrap(self.head + self.capacity() - 1);
        self.slots[self.head] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Head element without removing it.
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    /// Iterate from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |i| self.slots[self.wrap(self.head + i)].as_ref())
    }
}

impl<T: Clone> CircularQueue<T> {
    /// Head-to-tail copy of the contents.
    pub fn snapshot(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}
