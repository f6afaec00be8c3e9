//! Interpreter-side state for primitive calls: a stack, the shared dispatch
//! table and the SmallInteger range.

use minitalk_common::{SmallIntegerRange, Value};

use crate::config::VmConfig;
use crate::dispatch;
use crate::error::{ConfigError, PrimitiveFailure, StackError};
use crate::stack::{EvaluationStack, OperandStack};
use crate::table::PrimitiveTable;

/// One execution context.
///
/// Each context owns its stack. The table is borrowed, so any number of
/// contexts can share one table.
pub struct Interpreter<'t, S: EvaluationStack = OperandStack> {
    table: &'t PrimitiveTable,
    stack: S,
    range: SmallIntegerRange,
}

impl<'t> Interpreter<'t> {
    /// Create an interpreter with an empty [`OperandStack`] sized by `config`.
    pub fn new(table: &'t PrimitiveTable, config: &VmConfig) -> Result<Self, ConfigError> {
        let range = config.validate()?;
        Ok(Interpreter {
            table,
            stack: OperandStack::new(config.max_stack_depth),
            range,
        })
    }
}

impl<'t, S: EvaluationStack> Interpreter<'t, S> {
    /// Run primitives against a caller-supplied stack.
    pub fn with_stack(table: &'t PrimitiveTable, stack: S, range: SmallIntegerRange) -> Self {
        Interpreter {
            table,
            stack,
            range,
        }
    }

    /// Push a value, as a literal or temp push bytecode would.
    pub fn push(&mut self, value: Value) -> Result<(), StackError> {
        self.stack.push(value)
    }

    pub fn pop(&mut self) -> Result<Value, StackError> {
        self.stack.pop()
    }

    /// Invoke primitive `number` on the operands at the top of the stack.
    ///
    /// # Errors
    ///
    /// Any [`PrimitiveFailure`]; the stack is unchanged in every case.
    pub fn call_primitive(&mut self, number: u16) -> Result<Value, PrimitiveFailure> {
        dispatch::call_primitive(self.table, &mut self.stack, &self.range, number)
    }

    pub fn stack(&self) -> &S {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut S {
        &mut self.stack
    }

    pub fn range(&self) -> SmallIntegerRange {
        self.range
    }

    pub fn table(&self) -> &'t PrimitiveTable {
        self.table
    }

    /// Give the stack back to the caller.
    pub fn into_stack(self) -> S {
        self.stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_config() {
        let table = PrimitiveTable::standard();
        let config = VmConfig::new().with_max_stack_depth(3);
        let mut interp = Interpreter::new(&table, &config).unwrap();
        for n in 0..3 {
            interp.push(Value::Integer(n)).unwrap();
        }
        assert_eq!(
            interp.push(Value::Integer(3)),
            Err(StackError::Overflow { limit: 3 })
        );
        assert_eq!(interp.range(), SmallIntegerRange::DEFAULT);
    }

    #[test]
    fn new_rejects_bad_config() {
        let table = PrimitiveTable::standard();
        let config = VmConfig::new().with_small_integer_bits(70);
        assert!(matches!(
            Interpreter::new(&table, &config),
            Err(ConfigError::UnsupportedWidth { bits: 70, .. })
        ));
    }

    #[test]
    fn call_primitive_uses_own_stack() {
        let table = PrimitiveTable::standard();
        let mut interp = Interpreter::new(&table, &VmConfig::default()).unwrap();
        interp.push(Value::Integer(20)).unwrap();
        interp.push(Value::Integer(22)).unwrap();
        assert_eq!(interp.call_primitive(1), Ok(Value::Integer(42)));
        assert_eq!(interp.stack().as_slice(), &[Value::Integer(42)]);
        assert_eq!(interp.pop(), Ok(Value::Integer(42)));
    }

    #[test]
    fn with_stack_accepts_prefilled_stack() {
        let table = PrimitiveTable::standard();
        let stack = OperandStack::with_values(vec![Value::Integer(5), Value::Integer(9)], 8);
        let mut interp = Interpreter::with_stack(&table, stack, SmallIntegerRange::DEFAULT);
        assert_eq!(interp.call_primitive(3), Ok(Value::Boolean(true)));
        assert_eq!(interp.into_stack().as_slice(), &[Value::Boolean(true)]);
    }

    #[test]
    fn contexts_share_one_table() {
        let table = PrimitiveTable::standard();
        let config = VmConfig::default();
        let mut a = Interpreter::new(&table, &config).unwrap();
        let mut b = Interpreter::new(&table, &config).unwrap();
        a.push(Value::Integer(1)).unwrap();
        a.push(Value::Integer(2)).unwrap();
        b.push(Value::Integer(10)).unwrap();
        b.push(Value::Integer(5)).unwrap();
        assert_eq!(a.call_primitive(2), Ok(Value::Integer(-1)));
        assert_eq!(b.call_primitive(10), Ok(Value::Integer(2)));
        assert!(std::ptr::eq(a.table(), b.table()));
        a.stack_mut().clear();
        assert!(a.stack().is_empty());
    }
}
