//! The `call_primitive` entry point used by the interpreter loop.

use log::{debug, error, trace, warn};
use minitalk_common::{SmallIntegerRange, Value};

use crate::error::{Operand, PrimitiveFailure};
use crate::stack::EvaluationStack;
use crate::table::PrimitiveTable;

/// Run primitive `number` against the operands on top of `stack`.
///
/// On success the primitive has replaced its operands with the returned
/// value. On failure the stack is exactly as it was, so the interpreter can
/// send the original message instead.
///
/// # Errors
///
/// See [`PrimitiveFailure`]. `UnknownPrimitive` and `StackUnderflow` are
/// logged at error level since they point at a broken VM or caller.
pub fn call_primitive(
    table: &PrimitiveTable,
    stack: &mut dyn EvaluationStack,
    range: &SmallIntegerRange,
    number: u16,
) -> Result<Value, PrimitiveFailure> {
    let descriptor = match table.lookup(number) {
        Ok(descriptor) => descriptor,
        Err(failure) => {
            error!("primitive {number} is not in the dispatch table");
            return Err(failure);
        }
    };
    let primitive = descriptor.primitive;

    let depth = stack.depth();
    if depth < descriptor.arity {
        error!(
            "primitive {primitive} called with {depth} values on stack, needs {}",
            descriptor.arity
        );
        return Err(PrimitiveFailure::StackUnderflow {
            needed: descriptor.arity,
            depth,
        });
    }

    let result = (descriptor.implementation)(stack, range);
    match &result {
        Ok(value) => trace!("primitive {primitive} -> {value}"),
        Err(PrimitiveFailure::TypeMismatch { operand, .. }) => {
            // The stack is unchanged, so the rejected operand is still there.
            let slot = match operand {
                Operand::Receiver => 1,
                Operand::Argument => 0,
            };
            let class = stack.peek(slot).map_or("?", |value| value.class_name());
            debug!(
                "primitive {primitive}: {operand} is a {class}, sending #{} instead",
                primitive.selector()
            );
        }
        Err(PrimitiveFailure::StackOverflow { limit }) => {
            warn!("primitive {primitive}: stack refused the result at depth limit {limit}")
        }
        Err(failure) if failure.is_defect() => error!("primitive {primitive}: {failure}"),
        Err(failure) => debug!("primitive {primitive} failed, falling back: {failure}"),
    }
    result
}
