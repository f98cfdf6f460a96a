//! Fixed-capacity LIFO stack.

use crate::error::ContainerError;

#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Create an empty stack. A capacity of 0 is raised to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Place on top.
    pub fn push(&mut self, item: T) -> Result<(), ContainerError> {
        if self.is_full() {
            return Err(ContainerError::Full);
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove and return the top.
    pub fn pop(&mut self) -> Result<T, ContainerError> {
        self.items.pop().ok_or(ContainerError::Empty)
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Iterate from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().rev()
    }
}

impl<T: Clone> BoundedStack<T> {
    /// Top-to-bottom copy of the contents.
    pub fn snapshot(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}
