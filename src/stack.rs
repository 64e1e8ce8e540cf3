//! A LIFO stack whose backing storage grows in fixed increments.

use alloc::vec::Vec;

/// Number of slots added to the backing storage each time it fills up.
pub const GROWTH_SLOTS: usize = 10;

/// A last-in, first-out stack.
///
/// Storage starts with [`GROWTH_SLOTS`] slots and grows by the same amount
/// whenever a push finds it full, instead of doubling.
///
/// # Examples
///
/// ```
/// use lanes::Stack;
///
/// let mut stack = Stack::new();
/// stack.push("a");
/// stack.push("b");
/// assert_eq!(stack.pop(), Some("b"));
/// assert_eq!(stack.pop(), Some("a"));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Makes an empty stack with [`GROWTH_SLOTS`] preallocated slots.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(GROWTH_SLOTS)
    }

    /// Makes an empty stack with room for at least `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Pushes `item` on top of the stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanes::stack::{Stack, GROWTH_SLOTS};
    ///
    /// let mut stack = Stack::new();
    /// for i in 0..=GROWTH_SLOTS {
    ///     stack.push(i);
    /// }
    /// assert!(stack.capacity() >= 2 * GROWTH_SLOTS);
    /// ```
    pub fn push(&mut self, item: T) {
        if self.items.len() == self.items.capacity() {
            self.items.reserve_exact(GROWTH_SLOTS);
        }
        self.items.push(item);
    }

    /// Removes the most recently pushed item, or returns `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the most recently pushed item without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}
