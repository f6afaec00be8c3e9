//! The evaluation stack.
//!
//! Primitives only see the stack through [`EvaluationStack`], so an
//! interpreter can hand them its own frame-based stack. [`OperandStack`] is
//! the plain `Vec`-backed implementation used by [`Interpreter`].
//!
//! [`Interpreter`]: crate::interpreter::Interpreter

use minitalk_common::Value;

use crate::error::StackError;

/// LIFO operand stack borrowed by a primitive for the length of one call.
pub trait EvaluationStack {
    /// Push onto the top. Fails only when the stack is full.
    fn push(&mut self, value: Value) -> Result<(), StackError>;

    /// Remove and return the top value.
    fn pop(&mut self) -> Result<Value, StackError>;

    /// Read the value `depth` slots below the top (0 is the top) without
    /// removing anything.
    fn peek(&self, depth: usize) -> Result<Value, StackError>;

    /// Replace the top `count` values with `value`.
    ///
    /// Either the top `count` values are replaced by `value`, or the stack is
    /// left exactly as it was and an error is returned.
    fn replace_top(&mut self, count: usize, value: Value) -> Result<(), StackError>;

    /// Number of values on the stack.
    fn depth(&self) -> usize;
}

/// `Vec`-backed evaluation stack with a depth limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperandStack {
    values: Vec<Value>,
    limit: usize,
}

impl OperandStack {
    /// Create an empty stack that holds at most `limit` values.
    pub fn new(limit: usize) -> Self {
        OperandStack {
            values: Vec::new(),
            limit,
        }
    }

    /// Create a stack preloaded with `values`, bottom first.
    ///
    /// The limit is raised to fit the values if needed.
    pub fn with_values(values: Vec<Value>, limit: usize) -> Self {
        let limit = limit.max(values.len());
        OperandStack { values, limit }
    }

    /// The values, bottom first.
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl EvaluationStack for OperandStack {
    fn push(&mut self, value: Value) -> Result<(), StackError> {
        if self.values.len() >= self.limit {
            return Err(StackError::Overflow { limit: self.limit });
        }
        self.values.push(value);
        Ok(())
    }

    fn pop(&mut self) -> Result<Value, StackError> {
        self.values.pop().ok_or(StackError::Underflow {
            needed: 1,
            depth: 0,
        })
    }

    fn peek(&self, depth: usize) -> Result<Value, StackError> {
        let len = self.values.len();
        if depth >= len {
            return Err(StackError::Underflow {
                needed: depth + 1,
                depth: len,
            });
        }
        Ok(self.values[len - 1 - depth])
    }

    fn replace_top(&mut self, count: usize, value: Value) -> Result<(), StackError> {
        let len = self.values.len();
        if count > len {
            return Err(StackError::Underflow {
                needed: count,
                depth: len,
            });
        }
        // With nothing removed this is a plain push and may hit the limit.
        if count == 0 && len >= self.limit {
            return Err(StackError::Overflow { limit: self.limit });
        }
        self.values.truncate(len - count);
        self.values.push(value);
        Ok(())
    }

    fn depth(&self) -> usize {
        self.values.len()
    }
}
