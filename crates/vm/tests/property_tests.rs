//! Algebraic laws of the SmallInteger primitives, checked with proptest.

use minitalk_common::{ObjectRef, SmallIntegerRange, Value};
use minitalk_vm::{Interpreter, PrimitiveFailure, PrimitiveTable, VmConfig};
use proptest::prelude::*;

const ADD: u16 = 1;
const SUB: u16 = 2;
const LT: u16 = 3;
const DIV: u16 = 10;

const RANGE: SmallIntegerRange = SmallIntegerRange::DEFAULT;

/// Any SmallInteger in the default range.
fn small_int() -> impl Strategy<Value = i64> {
    RANGE.min()..=RANGE.max()
}

/// Any stack value, SmallInteger or not.
fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        small_int().prop_map(Value::Integer),
        any::<i64>().prop_map(Value::Integer),
        any::<bool>().prop_map(Value::Boolean),
        Just(Value::Nil),
        any::<u32>().prop_map(|i| Value::Object(ObjectRef::new(i))),
    ]
}

fn call(values: &[Value], number: u16) -> (Result<Value, PrimitiveFailure>, Vec<Value>) {
    let table = PrimitiveTable::standard();
    let mut interp = Interpreter::new(&table, &VmConfig::default()).unwrap();
    for &v in values {
        interp.push(v).unwrap();
    }
    let result = interp.call_primitive(number);
    (result, interp.stack().as_slice().to_vec())
}

fn binary(number: u16, a: i64, b: i64) -> Result<Value, PrimitiveFailure> {
    call(&[Value::Integer(a), Value::Integer(b)], number).0
}

fn lt(a: i64, b: i64) -> bool {
    binary(LT, a, b) == Ok(Value::Boolean(true))
}

proptest! {
    /// add agrees with mathematical addition whenever the sum is in range,
    /// and is commutative.
    #[test]
    fn add_is_sum_and_commutative(a in small_int(), b in small_int()) {
        let sum = a + b;
        let ab = binary(ADD, a, b);
        prop_assert_eq!(&ab, &binary(ADD, b, a));
        if RANGE.fits(sum) {
            prop_assert_eq!(ab, Ok(Value::Integer(sum)));
        } else {
            let is_overflow = matches!(ab, Err(PrimitiveFailure::Overflow { .. }));
            prop_assert!(is_overflow);
        }
    }

    /// Zero is the identity for add and subtract.
    #[test]
    fn zero_is_identity(n in small_int()) {
        prop_assert_eq!(binary(ADD, n, 0), Ok(Value::Integer(n)));
        prop_assert_eq!(binary(SUB, n, 0), Ok(Value::Integer(n)));
    }

    /// subtract undoes add when both stay in range.
    #[test]
    fn subtract_inverts_add(a in small_int(), b in small_int()) {
        if let Ok(Value::Integer(sum)) = binary(ADD, a, b) {
            prop_assert_eq!(binary(SUB, sum, b), Ok(Value::Integer(a)));
        }
    }

    /// less-than matches integer comparison, is irreflexive and transitive.
    #[test]
    fn less_than_is_a_strict_order(a in small_int(), b in small_int(), c in small_int()) {
        prop_assert_eq!(lt(a, b), a < b);
        prop_assert!(!lt(a, a));
        if lt(a, b) && lt(b, c) {
            prop_assert!(lt(a, c));
        }
    }

    /// divide truncates toward zero and never answers for a zero divisor.
    #[test]
    fn divide_truncates_toward_zero(a in small_int(), b in small_int()) {
        let result = binary(DIV, a, b);
        if b == 0 {
            prop_assert_eq!(result, Err(PrimitiveFailure::DivisionByZero));
        } else if a == RANGE.min() && b == -1 {
            let is_overflow = matches!(result, Err(PrimitiveFailure::Overflow { .. }));
            prop_assert!(is_overflow);
        } else {
            let q = a / b;
            prop_assert_eq!(result, Ok(Value::Integer(q)));
            prop_assert!(q.abs() * b.abs() <= a.abs());
            prop_assert!(q == 0 || (q < 0) == ((a < 0) != (b < 0)));
        }
    }

    /// Success is S ++ [result]; failure is S ++ [receiver, argument].
    #[test]
    fn stack_discipline(
        prefix in prop::collection::vec(any_value(), 0..8),
        receiver in any_value(),
        argument in any_value(),
        number in prop::sample::select(vec![ADD, SUB, LT, DIV])
    ) {
        let mut values = prefix.clone();
        values.push(receiver);
        values.push(argument);

        let (result, stack) = call(&values, number);
        match result {
            Ok(value) => {
                let mut expected = prefix;
                expected.push(value);
                prop_assert_eq!(stack, expected);
            }
            Err(failure) => {
                prop_assert!(failure.is_fallback());
                prop_assert_eq!(stack, values);
            }
        }
    }

    /// Arithmetic results are always SmallIntegers.
    #[test]
    fn results_stay_in_range(
        a in small_int(),
        b in small_int(),
        number in prop::sample::select(vec![ADD, SUB, DIV])
    ) {
        if let Ok(value) = binary(number, a, b) {
            prop_assert!(RANGE.is_valid(&value));
        }
    }
}
