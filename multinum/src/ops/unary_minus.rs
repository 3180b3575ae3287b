//! Unary minus operation.
//!
//! Negates its argument elementwise; boolean values and strings are
//! converted to a numeric value in the preferred representation first.
//! Unlike unary plus, negation changes the value, so the immutable
//! representations return fresh instances here.

use std::rc::Rc;

use once_cell::sync::Lazy;

use super::{coerced_number, preferred_numeric};
use crate::collection::deep_map;
use crate::dispatch::Operation;
use crate::error::{DispatchError, DispatchResult};
use crate::types::TypeTag;
use crate::value::{new_unit_ref, Value};

fn minus_scalar(_op: &Operation, args: &[Value]) -> DispatchResult<Value> {
    match &args[0] {
        Value::Number(n) => Ok(Value::Number(-n)),
        Value::Complex(c) => Ok(Value::Complex(Rc::new(c.neg()))),
        Value::BigNumber(b) => Ok(Value::BigNumber(Rc::new(b.neg()))),
        Value::Fraction(r) => Ok(Value::Fraction(Rc::new(r.neg()))),
        other => Err(DispatchError::no_matching_signature(
            "unaryMinus",
            vec![other.tag()],
        )),
    }
}

fn minus_unit(_op: &Operation, args: &[Value]) -> DispatchResult<Value> {
    match &args[0] {
        Value::Unit(u) => Ok(Value::Unit(new_unit_ref(u.borrow().negated()))),
        other => Err(DispatchError::no_matching_signature(
            "unaryMinus",
            vec![other.tag()],
        )),
    }
}

/// Deep map the collection with the operation itself; zero is a fixed
/// point of negation, so zeros are skipped.
fn minus_collection(op: &Operation, args: &[Value]) -> DispatchResult<Value> {
    deep_map(&args[0], &|v| op.call1(v), true)
}

fn minus_coerce(_op: &Operation, args: &[Value]) -> DispatchResult<Value> {
    match coerced_number(&args[0]) {
        Some(n) => Ok(preferred_numeric(-n)),
        None => Err(DispatchError::no_matching_signature(
            "unaryMinus",
            vec![args[0].tag()],
        )),
    }
}

/// Build the unary minus operation. Called once; use [`UNARY_MINUS`] or
/// [`unary_minus`] instead of rebuilding per call.
pub fn create_unary_minus() -> Operation {
    Operation::new("unaryMinus")
        .unary(
            &[
                TypeTag::Number,
                TypeTag::Complex,
                TypeTag::BigNumber,
                TypeTag::Fraction,
            ],
            minus_scalar,
        )
        .unary(&[TypeTag::Unit], minus_unit)
        .unary(&[TypeTag::Array, TypeTag::Matrix], minus_collection)
        .unary(&[TypeTag::Boolean, TypeTag::Str], minus_coerce)
        .with_latex("-\\left(${args[0]}\\right)")
}

/// The unary minus operation singleton.
pub static UNARY_MINUS: Lazy<Operation> = Lazy::new(create_unary_minus);

/// Unary minus. See the module docs for the behavior per tag.
pub fn unary_minus(x: &Value) -> DispatchResult<Value> {
    UNARY_MINUS.call1(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{BigNumber, Fraction};

    #[test]
    fn test_negate_scalars() {
        assert_eq!(unary_minus(&Value::Number(3.5)).unwrap(), Value::Number(-3.5));
        assert_eq!(
            unary_minus(&Value::complex(1.0, -2.0)).unwrap(),
            Value::complex(-1.0, 2.0)
        );
        assert_eq!(
            unary_minus(&Value::fraction(1, 3)).unwrap(),
            Value::fraction(-1, 3)
        );
    }

    #[test]
    fn test_negate_bignumber() {
        let out = unary_minus(&Value::bignumber(2.5)).unwrap();
        match out {
            Value::BigNumber(b) => assert_eq!(*b, BigNumber::from_f64(-2.5)),
            other => panic!("expected BigNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_negate_returns_fresh_instance() {
        let v = Value::fraction(1, 2);
        let out = unary_minus(&v).unwrap();
        match (&v, &out) {
            (Value::Fraction(a), Value::Fraction(b)) => {
                assert!(!Rc::ptr_eq(a, b));
                assert_eq!(**b, Fraction::from_integers(-1, 2));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_negate_unit_copies() {
        let v = Value::unit(5.0, "cm");
        let out = unary_minus(&v).unwrap();
        assert_eq!(out, Value::unit(-5.0, "cm"));
        // the input is untouched
        assert_eq!(v, Value::unit(5.0, "cm"));
    }

    #[test]
    fn test_negate_array() {
        let input = Value::Array(vec![
            Value::Number(1.0),
            Value::Number(0.0),
            Value::Array(vec![Value::Number(-2.0)]),
        ]);
        let expected = Value::Array(vec![
            Value::Number(-1.0),
            Value::Number(0.0),
            Value::Array(vec![Value::Number(2.0)]),
        ]);
        assert_eq!(unary_minus(&input).unwrap(), expected);
    }

    #[test]
    fn test_no_signature_for_null() {
        assert!(unary_minus(&Value::Null).is_err());
    }
}
