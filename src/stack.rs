//! A plain LIFO stack, used by the tree's in-order iterator to hold the
//! traversal work that a recursive walk would keep on the call stack.
//!
//! The stack owns only its own storage. When it holds borrowed node
//! references (as the iterator's does), dropping it releases the `Vec`
//! backing it and nothing else.

/// A LIFO container backed by a `Vec`.
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Generates a new, empty `Stack`.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Pushes a value onto the top of the stack.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the top value, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns a reference to the top value without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns `true` if the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of values on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stack_is_empty() {
        let stack: Stack<i32> = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn pop_on_empty_returns_none() {
        let mut stack: Stack<i32> = Stack::default();
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn pops_in_lifo_order() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn peek_does_not_remove() {
        let mut stack = Stack::new();
        stack.push(42);

        assert_eq!(stack.peek(), Some(&42));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.pop(), Some(42));
    }

    #[test]
    fn holds_borrowed_references() {
        let values = [10, 20, 30];
        let mut stack = Stack::new();
        for value in &values {
            stack.push(value);
        }

        assert_eq!(stack.pop(), Some(&30));
        assert_eq!(stack.peek(), Some(&&20));
    }
}
