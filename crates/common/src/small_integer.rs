//! SmallInteger representation and range checks.
//!
//! A SmallInteger is the VM's immediate integer: a signed value that fits in
//! a fixed number of bits and therefore never needs a heap object. Anything
//! outside the range is a LargeInteger and belongs to the general send path.

use crate::value::Value;

/// Default SmallInteger width in bits (31-bit signed, [-2^30, 2^30 - 1]).
///
/// This is the only place the default width is written down; everything
/// else goes through [`SmallIntegerRange::DEFAULT`].
pub const SMALL_INTEGER_BITS: u32 = 31;

/// The signed range admitted as SmallInteger for a given bit width.
///
/// Widths are limited to `MIN_BITS..=MAX_BITS` so that `i64` always has room
/// for the sum, difference and quotient of two in-range values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SmallIntegerRange {
    bits: u32,
}

impl SmallIntegerRange {
    /// Smallest supported width.
    pub const MIN_BITS: u32 = 2;
    /// Largest supported width.
    pub const MAX_BITS: u32 = 63;

    /// The range for [`SMALL_INTEGER_BITS`].
    pub const DEFAULT: SmallIntegerRange = SmallIntegerRange {
        bits: SMALL_INTEGER_BITS,
    };

    /// Range for `bits`-bit signed integers, or `None` if the width is
    /// unsupported.
    pub const fn with_bits(bits: u32) -> Option<Self> {
        if bits < Self::MIN_BITS || bits > Self::MAX_BITS {
            None
        } else {
            Some(Self { bits })
        }
    }

    /// Width in bits.
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Most negative SmallInteger, `-2^(bits-1)`.
    pub const fn min(&self) -> i64 {
        -(1i64 << (self.bits - 1))
    }

    /// Most positive SmallInteger, `2^(bits-1) - 1`.
    pub const fn max(&self) -> i64 {
        (1i64 << (self.bits - 1)) - 1
    }

    /// Does a computed wide value fit back into the range?
    pub const fn fits(&self, wide: i64) -> bool {
        wide >= self.min() && wide <= self.max()
    }

    /// True iff `value` is an integer inside the range.
    pub fn is_valid(&self, value: &Value) -> bool {
        self.check(value).is_some()
    }

    /// View `value` as a SmallInteger, if it is one.
    pub fn check(&self, value: &Value) -> Option<SmallInteger> {
        value.as_integer().and_then(|n| self.narrow(n))
    }

    /// Narrow a wide result, failing if it left the range.
    pub fn narrow(&self, wide: i64) -> Option<SmallInteger> {
        if self.fits(wide) {
            Some(SmallInteger(wide))
        } else {
            None
        }
    }
}

impl Default for SmallIntegerRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// An integer already checked against a [`SmallIntegerRange`].
///
/// Only [`SmallIntegerRange::check`] and [`SmallIntegerRange::narrow`] build
/// these, so holding one means the range check has happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SmallInteger(i64);

impl SmallInteger {
    /// The integer value, widened to `i64`.
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<SmallInteger> for Value {
    fn from(n: SmallInteger) -> Self {
        Value::Integer(n.0)
    }
}
