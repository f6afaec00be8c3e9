//! Minitalk common types.
//!
//! This crate holds the value model the VM and its primitives agree on:
//!
//! - [`Value`]: what lives on the evaluation stack
//! - [`SmallInteger`] / [`SmallIntegerRange`]: the immediate integer and
//!   its range predicate
//! - [`Primitive`]: the numbered SmallInteger primitives
//! - [`UnknownPrimitive`]: decoding error for unassigned numbers
//!
//! # Dependencies
//!
//! This crate uses `thiserror` (compile-time proc-macro, zero runtime cost)
//! and has no other dependencies.

pub mod error;
pub mod primitive;
pub mod small_integer;
pub mod value;

// Re-export commonly used types at the crate root.
pub use error::UnknownPrimitive;
pub use primitive::{Primitive, ALL_PRIMITIVES};
pub use small_integer::{SmallInteger, SmallIntegerRange, SMALL_INTEGER_BITS};
pub use value::{ObjectRef, Value};

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy that generates a supported SmallInteger range.
    fn arb_range() -> impl Strategy<Value = SmallIntegerRange> {
        (SmallIntegerRange::MIN_BITS..=SmallIntegerRange::MAX_BITS)
            .prop_map(|bits| SmallIntegerRange::with_bits(bits).unwrap())
    }

    proptest! {
        /// `fits` and `narrow` agree for every wide value.
        #[test]
        fn narrow_agrees_with_fits(range in arb_range(), wide in any::<i64>()) {
            prop_assert_eq!(range.narrow(wide).is_some(), range.fits(wide));
        }

        /// The range is symmetric around -1/2: max == -min - 1.
        #[test]
        fn range_is_twos_complement(range in arb_range()) {
            prop_assert_eq!(range.max(), -range.min() - 1);
        }

        /// Extremes of any range can be added, subtracted and divided in i64.
        #[test]
        fn i64_is_strictly_wider(range in arb_range()) {
            prop_assert!(range.max().checked_add(range.max()).is_some());
            prop_assert!(range.min().checked_add(range.min()).is_some());
            prop_assert!(range.max().checked_sub(range.min()).is_some());
            prop_assert!(range.min().checked_sub(range.max()).is_some());
            prop_assert!(range.min().checked_div(-1).is_some());
        }

        /// Any u16 either decodes to a primitive carrying that number or is unknown.
        #[test]
        fn primitive_decode(number in any::<u16>()) {
            match Primitive::try_from(number) {
                Ok(primitive) => prop_assert_eq!(primitive.number(), number),
                Err(UnknownPrimitive(n)) => prop_assert_eq!(n, number),
            }
        }
    }
}
