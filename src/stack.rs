//! Bounded Stack
//!
//! Fixed-capacity LIFO of integers. In-memory only.
//!
//! Overflow and underflow are not fatal: they are logged, the operation is
//! skipped, and the error is handed back for callers that care.

use std::fmt;

use tracing::{debug, warn};

use crate::error::{Result, SlotDbError};

/// Default stack capacity
pub const DEFAULT_STACK_CAPACITY: usize = 25;

/// Fixed-capacity stack of `i32`
#[derive(Debug, Clone)]
pub struct BoundedStack {
    data: Vec<i32>,
    capacity: usize,
}

impl BoundedStack {
    /// Create an empty stack with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_STACK_CAPACITY)
    }

    /// Create an empty stack holding at most `capacity` values
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Push onto the top; `StackFull` leaves the stack unchanged
    pub fn push(&mut self, value: i32) -> Result<()> {
        if self.is_full() {
            warn!(value, capacity = self.capacity, "stack is full, value dropped");
            return Err(SlotDbError::StackFull {
                capacity: self.capacity,
            });
        }
        debug!(value, "pushing onto the stack");
        self.data.push(value);
        Ok(())
    }

    /// Push each value in order; overflowing values are dropped.
    ///
    /// Returns how many values were pushed.
    pub fn push_multiple<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = i32>,
    {
        values
            .into_iter()
            .filter(|&value| self.push(value).is_ok())
            .count()
    }

    /// Remove and return the top value
    pub fn pop(&mut self) -> Result<i32> {
        match self.data.pop() {
            Some(value) => {
                debug!(value, "popped off the stack");
                Ok(value)
            }
            None => {
                warn!("pop on empty stack");
                Err(SlotDbError::StackEmpty)
            }
        }
    }

    /// The top value, left in place
    pub fn top(&self) -> Result<i32> {
        match self.data.last() {
            Some(&value) => Ok(value),
            None => {
                warn!("top of empty stack");
                Err(SlotDbError::StackEmpty)
            }
        }
    }

    /// Alias for `top`
    pub fn peek(&self) -> Result<i32> {
        self.top()
    }

    /// Values from top to bottom
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.data.iter().rev().copied()
    }

    /// Snapshot of the values from top to bottom
    pub fn print(&self) -> Vec<i32> {
        self.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.data.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for BoundedStack {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoundedStack {
    /// Top to bottom, space separated
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for value in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
            first = false;
        }
        Ok(())
    }
}
