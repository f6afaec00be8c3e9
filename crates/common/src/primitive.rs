//! Primitive numbers shared with the compiler.
//!
//! These numbers are baked into compiled methods (`<primitive: N>`), so the
//! values are stable and must never be renumbered.

use std::fmt;

use crate::error::UnknownPrimitive;

/// Identifies a SmallInteger primitive.
///
/// The `#[repr(u16)]` attribute pins each variant to its primitive number.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Primitive {
    /// `SmallInteger >> +`
    Add = 1,
    /// `SmallInteger >> -`
    Subtract = 2,
    /// `SmallInteger >> <`
    LessThan = 3,
    /// `SmallInteger >> /`, truncating toward zero.
    Divide = 10,
}

/// All known primitives, in number order.
pub const ALL_PRIMITIVES: [Primitive; 4] = [
    Primitive::Add,
    Primitive::Subtract,
    Primitive::LessThan,
    Primitive::Divide,
];

impl TryFrom<u16> for Primitive {
    type Error = UnknownPrimitive;

    fn try_from(number: u16) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Primitive::Add),
            2 => Ok(Primitive::Subtract),
            3 => Ok(Primitive::LessThan),
            10 => Ok(Primitive::Divide),
            _ => Err(UnknownPrimitive(number)),
        }
    }
}

impl Primitive {
    /// The primitive number.
    pub const fn number(self) -> u16 {
        self as u16
    }

    /// Number of stack operands consumed, receiver included.
    pub const fn arity(self) -> usize {
        2
    }

    /// The binary selector this primitive backs.
    pub fn selector(self) -> &'static str {
        match self {
            Primitive::Add => "+",
            Primitive::Subtract => "-",
            Primitive::LessThan => "<",
            Primitive::Divide => "/",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Primitive::Add => "add",
            Primitive::Subtract => "subtract",
            Primitive::LessThan => "less-than",
            Primitive::Divide => "divide",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number(), self.name())
    }
}
