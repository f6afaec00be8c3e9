//! Failure taxonomy for primitive calls.
//!
//! [`PrimitiveFailure`] is what the interpreter sees when a primitive does
//! not succeed. Data-dependent failures send the interpreter down the general
//! message-send path; defects point at a broken VM or a broken caller.

use std::fmt;

use minitalk_common::{Primitive, UnknownPrimitive};
use thiserror::Error;

/// Which operand of a binary primitive was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    Receiver,
    Argument,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Receiver => f.write_str("receiver"),
            Operand::Argument => f.write_str("argument"),
        }
    }
}

/// Why a primitive call did not produce a value.
///
/// In every case the evaluation stack holds exactly what it held before the
/// call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimitiveFailure {
    /// An operand is not a SmallInteger.
    #[error("primitive {primitive}: {operand} is not a SmallInteger")]
    TypeMismatch {
        primitive: Primitive,
        operand: Operand,
    },

    /// The result does not fit the SmallInteger range.
    #[error("primitive {primitive}: result overflows the SmallInteger range")]
    Overflow { primitive: Primitive },

    /// Divisor is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The dispatch table has no entry for this number.
    #[error("unknown primitive {number}")]
    UnknownPrimitive { number: u16 },

    /// Fewer operands on the stack than the primitive consumes.
    #[error("stack underflow: {needed} operands needed, {depth} on stack")]
    StackUnderflow { needed: usize, depth: usize },

    /// The stack refused to grow.
    #[error("stack overflow: depth limit {limit} reached")]
    StackOverflow { limit: usize },
}

impl PrimitiveFailure {
    /// Failures caused by the operand values. The interpreter answers these
    /// by running the ordinary method for the selector.
    pub fn is_fallback(&self) -> bool {
        matches!(
            self,
            PrimitiveFailure::TypeMismatch { .. }
                | PrimitiveFailure::Overflow { .. }
                | PrimitiveFailure::DivisionByZero
        )
    }

    /// Failures that indicate a misconfigured VM or a caller that broke the
    /// calling convention.
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            PrimitiveFailure::UnknownPrimitive { .. } | PrimitiveFailure::StackUnderflow { .. }
        )
    }

    /// The rejected operand, for `TypeMismatch`.
    pub fn operand(&self) -> Option<Operand> {
        match self {
            PrimitiveFailure::TypeMismatch { operand, .. } => Some(*operand),
            _ => None,
        }
    }
}

impl From<UnknownPrimitive> for PrimitiveFailure {
    fn from(err: UnknownPrimitive) -> Self {
        PrimitiveFailure::UnknownPrimitive { number: err.0 }
    }
}

impl From<StackError> for PrimitiveFailure {
    fn from(err: StackError) -> Self {
        match err {
            StackError::Underflow { needed, depth } => {
                PrimitiveFailure::StackUnderflow { needed, depth }
            }
            StackError::Overflow { limit } => PrimitiveFailure::StackOverflow { limit },
        }
    }
}

/// Errors raised by an [`EvaluationStack`](crate::stack::EvaluationStack).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// A read or pop reached below the bottom of the stack.
    #[error("stack underflow: {needed} slots needed, {depth} on stack")]
    Underflow { needed: usize, depth: usize },

    /// Push beyond the configured depth limit.
    #[error("stack overflow: depth limit {limit} reached")]
    Overflow { limit: usize },
}

/// Errors building a [`PrimitiveTable`](crate::table::PrimitiveTable).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The same primitive number was registered twice.
    #[error("primitive {number} registered twice")]
    DuplicatePrimitive { number: u16 },

    /// A descriptor declares an arity that disagrees with its primitive.
    #[error("primitive {number} declares arity {declared}, expected {expected}")]
    ArityMismatch {
        number: u16,
        declared: usize,
        expected: usize,
    },
}

/// Errors validating a [`VmConfig`](crate::config::VmConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// SmallInteger width outside the supported range.
    #[error("unsupported SmallInteger width: {bits} bits (supported {min}..={max})")]
    UnsupportedWidth { bits: u32, min: u32, max: u32 },

    /// A stack that cannot hold anything.
    #[error("max stack depth must be at least 2")]
    StackTooShallow,
}
