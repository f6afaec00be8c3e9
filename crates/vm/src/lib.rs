//! Minitalk VM primitives: SmallInteger fast paths on the evaluation stack.
//!
//! The interpreter pushes a receiver and an argument, then asks for a
//! primitive by number. The primitive either replaces the two operands with
//! its result or fails without touching the stack, in which case the
//! interpreter sends the message the slow way.
//!
//! # Usage
//!
//! ```
//! use minitalk_common::Value;
//! use minitalk_vm::{Interpreter, PrimitiveTable, VmConfig};
//!
//! let table = PrimitiveTable::standard();
//! let mut interp = Interpreter::new(&table, &VmConfig::default()).unwrap();
//!
//! for n in [1, 2, 3, 4] {
//!     interp.push(Value::Integer(n)).unwrap();
//! }
//! assert_eq!(interp.call_primitive(1), Ok(Value::Integer(7)));
//! assert_eq!(
//!     interp.stack().as_slice(),
//!     &[Value::Integer(1), Value::Integer(2), Value::Integer(7)]
//! );
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod interpreter;
pub mod primitives;
pub mod stack;
pub mod table;

pub use config::VmConfig;
pub use dispatch::call_primitive;
pub use error::{ConfigError, Operand, PrimitiveFailure, StackError, TableError};
pub use interpreter::Interpreter;
pub use stack::{EvaluationStack, OperandStack};
pub use table::{PrimitiveDescriptor, PrimitiveFn, PrimitiveTable, PrimitiveTableBuilder};
