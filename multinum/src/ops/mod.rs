//! Elementwise operation catalog.
//!
//! Each operation instantiates the same template: an [`Operation`]
//! built once inside a `Lazy` static, with one signature per supported
//! tag, an `Array | Matrix` branch recursing through
//! [`deep_map`](crate::collection::deep_map), and a `boolean | string`
//! branch that consults the global numeric preference at call time.

use crate::config::{get_number_kind, NumberKind};
use crate::value::Value;

mod unary_minus;
mod unary_plus;

pub use unary_minus::{create_unary_minus, unary_minus, UNARY_MINUS};
pub use unary_plus::{create_unary_plus, unary_plus, UNARY_PLUS};

/// Numeric value of an ambiguous scalar input: `true`/`false` become
/// `1`/`0`; strings parse as native floats, with blank strings reading
/// as `0` and unparseable text as NaN.
pub(crate) fn coerced_number(x: &Value) -> Option<f64> {
    match x {
        Value::Bool(true) => Some(1.0),
        Value::Bool(false) => Some(0.0),
        Value::Str(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                Some(trimmed.parse::<f64>().unwrap_or(f64::NAN))
            }
        }
        _ => None,
    }
}

/// Wrap a coerced numeric value in the currently preferred
/// representation. Read at the moment of coercion, never cached.
pub(crate) fn preferred_numeric(n: f64) -> Value {
    match get_number_kind() {
        NumberKind::BigNumber => Value::bignumber(n),
        NumberKind::Number => Value::Number(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerced_number_booleans() {
        assert_eq!(coerced_number(&Value::Bool(true)), Some(1.0));
        assert_eq!(coerced_number(&Value::Bool(false)), Some(0.0));
    }

    #[test]
    fn test_coerced_number_strings() {
        assert_eq!(coerced_number(&Value::from("3.5")), Some(3.5));
        assert_eq!(coerced_number(&Value::from("  -2 ")), Some(-2.0));
        assert_eq!(coerced_number(&Value::from("")), Some(0.0));
        assert_eq!(coerced_number(&Value::from("   ")), Some(0.0));
        assert!(coerced_number(&Value::from("abc")).unwrap().is_nan());
    }

    #[test]
    fn test_coerced_number_rejects_others() {
        assert_eq!(coerced_number(&Value::Number(1.0)), None);
        assert_eq!(coerced_number(&Value::Null), None);
    }
}
