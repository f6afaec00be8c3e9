//! The primitive dispatch table.
//!
//! A [`PrimitiveTable`] is built once when the VM starts and is read-only
//! afterwards. It routes a primitive number to a [`PrimitiveDescriptor`];
//! it never does arithmetic itself.

use std::collections::BTreeMap;
use std::fmt;

use log::debug;
use minitalk_common::{Primitive, SmallIntegerRange, Value, ALL_PRIMITIVES};

use crate::error::{PrimitiveFailure, TableError};
use crate::primitives;
use crate::stack::EvaluationStack;

/// Signature shared by every primitive implementation.
pub type PrimitiveFn =
    fn(&mut dyn EvaluationStack, &SmallIntegerRange) -> Result<Value, PrimitiveFailure>;

/// One table entry: which primitive, how many stack operands it consumes,
/// and the code that runs it.
#[derive(Clone, Copy)]
pub struct PrimitiveDescriptor {
    pub primitive: Primitive,
    pub arity: usize,
    pub implementation: PrimitiveFn,
}

impl fmt::Debug for PrimitiveDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimitiveDescriptor")
            .field("primitive", &self.primitive)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

impl PrimitiveDescriptor {
    /// The built-in implementation of `primitive`.
    pub fn standard(primitive: Primitive) -> Self {
        let implementation: PrimitiveFn = match primitive {
            Primitive::Add => primitives::add,
            Primitive::Subtract => primitives::subtract,
            Primitive::LessThan => primitives::less_than,
            Primitive::Divide => primitives::divide,
        };
        PrimitiveDescriptor {
            primitive,
            arity: primitive.arity(),
            implementation,
        }
    }

    pub fn number(&self) -> u16 {
        self.primitive.number()
    }
}

/// Immutable map from primitive number to descriptor.
#[derive(Debug, Clone)]
pub struct PrimitiveTable {
    entries: BTreeMap<Primitive, PrimitiveDescriptor>,
}

impl PrimitiveTable {
    /// Table with every built-in SmallInteger primitive.
    pub fn standard() -> Self {
        let mut builder = PrimitiveTableBuilder::default();
        for &primitive in &ALL_PRIMITIVES {
            builder.entries.insert(primitive, PrimitiveDescriptor::standard(primitive));
        }
        builder.build()
    }

    /// Start an empty table.
    pub fn builder() -> PrimitiveTableBuilder {
        PrimitiveTableBuilder::default()
    }

    /// Find the descriptor for `number`.
    ///
    /// # Errors
    ///
    /// `UnknownPrimitive` if `number` is unassigned or not registered here.
    pub fn lookup(&self, number: u16) -> Result<&PrimitiveDescriptor, PrimitiveFailure> {
        let primitive = Primitive::try_from(number)?;
        self.entries
            .get(&primitive)
            .ok_or(PrimitiveFailure::UnknownPrimitive { number })
    }

    pub fn has_primitive(&self, number: u16) -> bool {
        self.lookup(number).is_ok()
    }

    /// Registered primitive numbers, ascending.
    pub fn primitive_numbers(&self) -> Vec<u16> {
        self.entries.keys().map(|p| p.number()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PrimitiveTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Collects descriptors for a [`PrimitiveTable`].
#[derive(Debug, Default)]
pub struct PrimitiveTableBuilder {
    entries: BTreeMap<Primitive, PrimitiveDescriptor>,
}

impl PrimitiveTableBuilder {
    /// Add a descriptor.
    ///
    /// # Errors
    ///
    /// `DuplicatePrimitive` if the number is already taken, `ArityMismatch`
    /// if the descriptor disagrees with the primitive's calling convention.
    pub fn register(mut self, descriptor: PrimitiveDescriptor) -> Result<Self, TableError> {
        let number = descriptor.number();
        let expected = descriptor.primitive.arity();
        if descriptor.arity != expected {
            return Err(TableError::ArityMismatch {
                number,
                declared: descriptor.arity,
                expected,
            });
        }
        if self.entries.contains_key(&descriptor.primitive) {
            return Err(TableError::DuplicatePrimitive { number });
        }
        self.entries.insert(descriptor.primitive, descriptor);
        Ok(self)
    }

    /// Add the built-in implementation of `primitive`.
    pub fn register_standard(self, primitive: Primitive) -> Result<Self, TableError> {
        self.register(PrimitiveDescriptor::standard(primitive))
    }

    pub fn build(self) -> PrimitiveTable {
        let table = PrimitiveTable {
            entries: self.entries,
        };
        debug!("primitive table ready: {:?}", table.primitive_numbers());
        table
    }
}
