//! Unary plus operation.
//!
//! Boolean values and strings are converted to a numeric value in the
//! preferred representation; numeric values are returned as is. For
//! arrays and matrices the operation is evaluated elementwise.
//!
//! This operation is the composition template for the whole catalog:
//! every elementwise operation registers the same branch structure.

use once_cell::sync::Lazy;

use super::{coerced_number, preferred_numeric};
use crate::collection::deep_map;
use crate::dispatch::Operation;
use crate::error::{DispatchError, DispatchResult};
use crate::types::TypeTag;
use crate::value::{new_unit_ref, Value};

/// Native numbers are returned unchanged.
fn plus_number(_op: &Operation, args: &[Value]) -> DispatchResult<Value> {
    match &args[0] {
        Value::Number(n) => Ok(Value::Number(*n)),
        other => Err(DispatchError::no_matching_signature(
            "unaryPlus",
            vec![other.tag()],
        )),
    }
}

/// Complex numbers, BigNumbers and Fractions are immutable: return the
/// same instance, no defensive copy.
fn plus_immutable(_op: &Operation, args: &[Value]) -> DispatchResult<Value> {
    match &args[0] {
        v @ (Value::Complex(_) | Value::BigNumber(_) | Value::Fraction(_)) => Ok(v.clone()),
        other => Err(DispatchError::no_matching_signature(
            "unaryPlus",
            vec![other.tag()],
        )),
    }
}

/// Units are mutable: return an independent copy so the result cannot
/// alias the input.
fn plus_unit(_op: &Operation, args: &[Value]) -> DispatchResult<Value> {
    match &args[0] {
        Value::Unit(u) => Ok(Value::Unit(new_unit_ref(u.borrow().clone()))),
        other => Err(DispatchError::no_matching_signature(
            "unaryPlus",
            vec![other.tag()],
        )),
    }
}

/// Deep map the collection with the operation itself; zero is a fixed
/// point of unary plus, so zeros are skipped.
fn plus_collection(op: &Operation, args: &[Value]) -> DispatchResult<Value> {
    deep_map(&args[0], &|v| op.call1(v), true)
}

/// Convert to a number in the preferred representation, read from the
/// global configuration at call time.
fn plus_coerce(_op: &Operation, args: &[Value]) -> DispatchResult<Value> {
    match coerced_number(&args[0]) {
        Some(n) => Ok(preferred_numeric(n)),
        None => Err(DispatchError::no_matching_signature(
            "unaryPlus",
            vec![args[0].tag()],
        )),
    }
}

/// Build the unary plus operation. Called once; use [`UNARY_PLUS`] or
/// [`unary_plus`] instead of rebuilding per call.
pub fn create_unary_plus() -> Operation {
    Operation::new("unaryPlus")
        .unary(&[TypeTag::Number], plus_number)
        .unary(
            &[TypeTag::Complex, TypeTag::BigNumber, TypeTag::Fraction],
            plus_immutable,
        )
        .unary(&[TypeTag::Unit], plus_unit)
        .unary(&[TypeTag::Array, TypeTag::Matrix], plus_collection)
        .unary(&[TypeTag::Boolean, TypeTag::Str], plus_coerce)
        .with_latex("+\\left(${args[0]}\\right)")
}

/// The unary plus operation singleton.
pub static UNARY_PLUS: Lazy<Operation> = Lazy::new(create_unary_plus);

/// Unary plus. See the module docs for the behavior per tag.
///
/// # Example
/// ```
/// use multinum::{unary_plus, Value};
///
/// assert_eq!(unary_plus(&Value::Number(3.5)).unwrap(), Value::Number(3.5));
/// assert_eq!(unary_plus(&Value::Bool(true)).unwrap(), Value::Number(1.0));
/// ```
pub fn unary_plus(x: &Value) -> DispatchResult<Value> {
    UNARY_PLUS.call1(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_identity() {
        assert_eq!(unary_plus(&Value::Number(3.5)).unwrap(), Value::Number(3.5));
        assert_eq!(unary_plus(&Value::Number(-1.0)).unwrap(), Value::Number(-1.0));
    }

    #[test]
    fn test_null_has_no_signature() {
        let err = unary_plus(&Value::Null).unwrap_err();
        assert_eq!(
            err.to_string(),
            "MethodError: no method matching unaryPlus(::null)"
        );
    }

    #[test]
    fn test_latex_metadata() {
        assert_eq!(UNARY_PLUS.latex(), Some("+\\left(${args[0]}\\right)"));
    }
}
