use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StackError {
    #[error("could not reserve stack storage: {0}")]
    Reserve(#[from] TryReserveError),
    #[error("stack depth limit of {0} exceeded")]
    Overflow(usize),
}

/// LIFO used for both the operand and the operator stack.
#[derive(Debug)]
pub struct Stack<T> {
    items: Vec<T>,
    limit: Option<usize>,
}

impl<T: Copy> Stack<T> {
    pub fn with_capacity(capacity: usize, limit: Option<usize>) -> Result<Self, StackError> {
        let mut items = Vec::new();
        items.try_reserve_exact(capacity)?;
        Ok(Stack { items, limit })
    }

    pub fn push(&mut self, item: T) -> Result<(), StackError> {
        if let Some(limit) = self.limit {
            if self.items.len() >= limit {
                return Err(StackError::Overflow(limit));
            }
        }
        self.items.try_reserve(1)?;
        self.items.push(item);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<T> {
        self.items.last().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_reverse_push_order() {
        let mut stack = Stack::with_capacity(4, None).unwrap();
        for n in 1..=3 {
            stack.push(n).unwrap();
        }
        assert_eq!(stack.peek(), Some(3));
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.pop(), Some(1));
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn grows_past_initial_capacity_without_limit() {
        let mut stack = Stack::with_capacity(1, None).unwrap();
        for n in 0..500 {
            stack.push(n).unwrap();
        }
        assert_eq!(stack.len(), 500);
    }

    #[test]
    fn depth_limit_rejects_extra_push() {
        let mut stack = Stack::with_capacity(2, Some(2)).unwrap();
        stack.push('a').unwrap();
        stack.push('b').unwrap();
        assert!(matches!(stack.push('c'), Err(StackError::Overflow(2))));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn impossible_reservation_is_an_error() {
        let result = Stack::<f64>::with_capacity(usize::MAX, None);
        assert!(matches!(result, Err(StackError::Reserve(_))));
    }
}
