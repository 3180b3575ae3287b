//! Recursive, shape-preserving collection mapping.
//!
//! `deep_map` is the traversal substrate behind every elementwise
//! operation: it applies a scalar function to every leaf of a nested
//! `Array` or the row-major data of a `Matrix`, producing a fresh
//! collection of identical shape. The input is never mutated.
//!
//! The `skip_zeros` flag is a performance hint, not a semantic switch:
//! the caller asserts that the function is a fixed point at the native
//! number zero, letting the mapper hand zeros through without invoking
//! the function. Results must be observationally identical either way;
//! debug builds verify the fixed-point claim on entry. The invariant is
//! caller-enforced for any non-native zero representations reachable in
//! the collection.

use crate::error::DispatchResult;
use crate::value::Value;

/// Apply `f` to every scalar element of `x`, recursing through nested
/// collections and preserving shape exactly. A non-collection input is
/// mapped directly.
///
/// Traversal is in natural element order (nesting order for arrays,
/// row-major for matrices); the first element error aborts the
/// traversal and propagates unchanged.
pub fn deep_map<F>(x: &Value, f: &F, skip_zeros: bool) -> DispatchResult<Value>
where
    F: Fn(&Value) -> DispatchResult<Value>,
{
    debug_assert!(
        !skip_zeros || matches!(f(&Value::Number(0.0)), Ok(v) if v.as_number() == Some(0.0)),
        "skip_zeros requires f to be a fixed point at the native zero"
    );
    map_element(x, f, skip_zeros)
}

fn map_element<F>(x: &Value, f: &F, skip_zeros: bool) -> DispatchResult<Value>
where
    F: Fn(&Value) -> DispatchResult<Value>,
{
    match x {
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(map_element(item, f, skip_zeros)?);
            }
            Ok(Value::Array(out))
        }
        Value::Matrix(m) => {
            let mut out = Vec::with_capacity(m.element_count());
            for item in m.data() {
                out.push(map_element(item, f, skip_zeros)?);
            }
            Ok(Value::Matrix(m.with_data(out)))
        }
        scalar if skip_zeros && scalar.is_zero() => Ok(scalar.clone()),
        scalar => f(scalar),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DispatchError;
    use crate::value::Matrix;

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    fn double(v: &Value) -> DispatchResult<Value> {
        match v {
            Value::Number(n) => Ok(num(n * 2.0)),
            other => Err(DispatchError::no_matching_signature(
                "double",
                vec![other.tag()],
            )),
        }
    }

    #[test]
    fn test_map_scalar() {
        assert_eq!(deep_map(&num(2.0), &double, false).unwrap(), num(4.0));
    }

    #[test]
    fn test_map_nested_array_preserves_shape() {
        let input = Value::Array(vec![
            num(1.0),
            Value::Array(vec![num(2.0), Value::Array(vec![num(3.0)])]),
        ]);
        let expected = Value::Array(vec![
            num(2.0),
            Value::Array(vec![num(4.0), Value::Array(vec![num(6.0)])]),
        ]);
        assert_eq!(deep_map(&input, &double, false).unwrap(), expected);
    }

    #[test]
    fn test_map_matrix_keeps_shape() {
        let m = Matrix::from_rows(vec![vec![num(1.0), num(2.0)], vec![num(3.0), num(4.0)]]);
        let out = deep_map(&Value::Matrix(m), &double, false).unwrap();
        match out {
            Value::Matrix(res) => {
                assert_eq!(res.shape(), &[2, 2]);
                assert_eq!(res.get(&[1, 1]), Some(&num(8.0)));
            }
            other => panic!("expected Matrix, got {:?}", other),
        }
    }

    #[test]
    fn test_input_not_mutated() {
        let input = Value::Array(vec![num(1.0), num(2.0)]);
        let copy = input.clone();
        let _ = deep_map(&input, &double, false).unwrap();
        assert_eq!(input, copy);
    }

    #[test]
    fn test_skip_zeros_same_result() {
        // identity on zero, doubling elsewhere: both paths agree on zeros
        let input = Value::Array(vec![num(0.0), num(1.0), Value::Array(vec![num(2.0), num(0.0)])]);
        let plain = deep_map(&input, &double, false).unwrap();
        let skipped = deep_map(&input, &double, true).unwrap();
        assert_eq!(plain, skipped);
    }

    #[test]
    fn test_error_propagates_unchanged() {
        let input = Value::Array(vec![num(1.0), Value::Null, num(3.0)]);
        let err = deep_map(&input, &double, false).unwrap_err();
        assert_eq!(
            err,
            DispatchError::no_matching_signature("double", vec![crate::types::TypeTag::Null])
        );
    }
}
