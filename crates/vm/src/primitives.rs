//! SmallInteger primitive implementations.
//!
//! Every primitive follows the same shape:
//!
//! 1. Read receiver and argument with `peek`, leaving the stack alone.
//! 2. Check both are SmallIntegers and compute in `i64`, which is strictly
//!    wider than any supported SmallInteger range.
//! 3. Only once the result is known to be representable, replace both
//!    operands with the result in one `replace_top` call.
//!
//! Any failure returns before step 3, so a failed primitive never touches
//! the stack.

use minitalk_common::{Primitive, SmallInteger, SmallIntegerRange, Value};

use crate::error::{Operand, PrimitiveFailure};
use crate::stack::EvaluationStack;

/// Primitive 1: `receiver + argument`.
pub fn add(
    stack: &mut dyn EvaluationStack,
    range: &SmallIntegerRange,
) -> Result<Value, PrimitiveFailure> {
    binary_arith(stack, range, Primitive::Add, i64::checked_add)
}

/// Primitive 2: `receiver - argument`.
pub fn subtract(
    stack: &mut dyn EvaluationStack,
    range: &SmallIntegerRange,
) -> Result<Value, PrimitiveFailure> {
    binary_arith(stack, range, Primitive::Subtract, i64::checked_sub)
}

/// Primitive 3: `receiver < argument`, answering a Boolean.
pub fn less_than(
    stack: &mut dyn EvaluationStack,
    range: &SmallIntegerRange,
) -> Result<Value, PrimitiveFailure> {
    let (receiver, argument) = operands(stack, range, Primitive::LessThan)?;
    commit(stack, Value::Boolean(receiver < argument))
}

/// Primitive 10: `receiver / argument`, truncated toward zero.
///
/// `-7 / 2` is `-3`. The most negative SmallInteger divided by `-1` has no
/// SmallInteger result and fails with `Overflow`.
pub fn divide(
    stack: &mut dyn EvaluationStack,
    range: &SmallIntegerRange,
) -> Result<Value, PrimitiveFailure> {
    let (receiver, argument) = operands(stack, range, Primitive::Divide)?;
    if argument.value() == 0 {
        return Err(PrimitiveFailure::DivisionByZero);
    }
    // i64 division truncates toward zero.
    let quotient = receiver
        .value()
        .checked_div(argument.value())
        .and_then(|wide| range.narrow(wide))
        .ok_or(PrimitiveFailure::Overflow {
            primitive: Primitive::Divide,
        })?;
    commit(stack, quotient.into())
}

/// Shared body of add and subtract.
fn binary_arith(
    stack: &mut dyn EvaluationStack,
    range: &SmallIntegerRange,
    primitive: Primitive,
    op: fn(i64, i64) -> Option<i64>,
) -> Result<Value, PrimitiveFailure> {
    let (receiver, argument) = operands(stack, range, primitive)?;
    let result = op(receiver.value(), argument.value())
        .and_then(|wide| range.narrow(wide))
        .ok_or(PrimitiveFailure::Overflow { primitive })?;
    commit(stack, result.into())
}

/// Read and check `[..., receiver, argument]` without popping.
///
/// The receiver is checked first, so when both are bad the failure names
/// the receiver.
fn operands(
    stack: &dyn EvaluationStack,
    range: &SmallIntegerRange,
    primitive: Primitive,
) -> Result<(SmallInteger, SmallInteger), PrimitiveFailure> {
    let receiver = stack.peek(1)?;
    let argument = stack.peek(0)?;

    let receiver = range
        .check(&receiver)
        .ok_or(PrimitiveFailure::TypeMismatch {
            primitive,
            operand: Operand::Receiver,
        })?;
    let argument = range
        .check(&argument)
        .ok_or(PrimitiveFailure::TypeMismatch {
            primitive,
            operand: Operand::Argument,
        })?;

    Ok((receiver, argument))
}

/// Replace the two operands with `result` and answer it.
fn commit(stack: &mut dyn EvaluationStack, result: Value) -> Result<Value, PrimitiveFailure> {
    stack.replace_top(2, result)?;
    Ok(result)
}
