//! Runtime value representation for the Minitalk VM.
//!
//! Values are what live on the evaluation stack. Immediates (integers,
//! booleans, nil) are carried inline; everything else is an opaque handle
//! into the object memory, which this crate never dereferences.

use std::fmt;

/// Opaque reference to a heap object owned by the object memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectRef(u32);

impl ObjectRef {
    /// Wrap an object-table index.
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// The object-table index.
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// A value on the evaluation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// Machine integer. It is a SmallInteger only while it lies inside the
    /// active [`SmallIntegerRange`](crate::SmallIntegerRange); outside it
    /// stands in for a LargeInteger that primitives must not touch.
    Integer(i64),
    /// `true` or `false`.
    Boolean(bool),
    /// The `nil` object.
    Nil,
    /// Any heap-allocated object (strings, arrays, floats, ...).
    Object(ObjectRef),
}

impl Value {
    /// The integer payload, regardless of range.
    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            Value::Integer(n) => Some(n),
            _ => None,
        }
    }

    /// Name of the class the value reports, used in fallback log lines.
    pub fn class_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "Integer",
            Value::Boolean(true) => "True",
            Value::Boolean(false) => "False",
            Value::Nil => "UndefinedObject",
            Value::Object(_) => "Object",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

/// `printString`-style rendering.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Nil => f.write_str("nil"),
            Value::Object(r) => write!(f, "an Object(#{})", r.index()),
        }
    }
}
