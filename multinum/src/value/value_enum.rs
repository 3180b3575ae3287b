//! Value - the dynamic runtime value type.
//!
//! This module contains:
//! - `Value`: the enum representing every supported runtime value
//! - tag resolution (`Value::tag`), equality, and display

use std::fmt;
use std::rc::Rc;

use super::{new_unit_ref, BigNumber, Complex, Fraction, Matrix, Unit, UnitRef};
use crate::types::TypeTag;

/// Dynamic value over all supported numeric representations.
///
/// The immutable scalar representations sit behind `Rc` so operations
/// can return the same instance without copying; cloning a `Value` is
/// always cheap for them. `Array` owns its elements directly - the
/// collection mapper produces fresh arrays and never mutates its input,
/// so no sharing is needed.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Native 64-bit floating point
    Number(f64),
    /// Arbitrary-precision decimal (immutable, shared)
    BigNumber(Rc<BigNumber>),
    /// Exact rational fraction (immutable, shared)
    Fraction(Rc<Fraction>),
    /// Complex number (immutable, shared)
    Complex(Rc<Complex>),
    /// Physical unit with magnitude (mutable, shared)
    Unit(UnitRef),
    /// Nested array collection
    Array(Vec<Value>),
    /// Matrix collection
    Matrix(Matrix),
    /// Boolean
    Bool(bool),
    /// String
    Str(String),
    /// Null value
    Null,
}

impl Value {
    /// Resolve this value's dispatch tag. Total: every variant carries
    /// exactly one tag.
    pub fn tag(&self) -> TypeTag {
        match self {
            Value::Number(_) => TypeTag::Number,
            Value::BigNumber(_) => TypeTag::BigNumber,
            Value::Fraction(_) => TypeTag::Fraction,
            Value::Complex(_) => TypeTag::Complex,
            Value::Unit(_) => TypeTag::Unit,
            Value::Array(_) => TypeTag::Array,
            Value::Matrix(_) => TypeTag::Matrix,
            Value::Bool(_) => TypeTag::Boolean,
            Value::Str(_) => TypeTag::Str,
            Value::Null => TypeTag::Null,
        }
    }

    /// Canonical name of this value's tag.
    pub fn type_name(&self) -> &'static str {
        self.tag().name()
    }

    /// Native zero test used by the deep_map identity-skip fast path.
    ///
    /// True only for the native `number` zero. The other representations
    /// deliberately return false: the skip optimization is keyed to the
    /// one representation the caller's fixed-point assertion covers.
    pub fn is_zero(&self) -> bool {
        matches!(self, Value::Number(n) if *n == 0.0)
    }

    /// Try to extract as a native number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Construct a shared BigNumber value from a native float.
    pub fn bignumber(value: f64) -> Value {
        Value::BigNumber(Rc::new(BigNumber::from_f64(value)))
    }

    /// Construct a shared Fraction value.
    pub fn fraction(num: i64, den: i64) -> Value {
        Value::Fraction(Rc::new(Fraction::from_integers(num, den)))
    }

    /// Construct a shared Complex value.
    pub fn complex(re: f64, im: f64) -> Value {
        Value::Complex(Rc::new(Complex::new(re, im)))
    }

    /// Construct a shared Unit value.
    pub fn unit<S: Into<String>>(value: f64, unit: S) -> Value {
        Value::Unit(new_unit_ref(Unit::new(value, unit)))
    }
}

// ========== From implementations ==========

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<Matrix> for Value {
    fn from(v: Matrix) -> Self {
        Value::Matrix(v)
    }
}

// ========== Display implementation ==========

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::BigNumber(b) => write!(f, "{}", b),
            Value::Fraction(r) => write!(f, "{}", r),
            Value::Complex(c) => write!(f, "{}", c),
            Value::Unit(u) => write!(f, "{}", u.borrow()),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            Value::Matrix(m) => write!(f, "{}", m),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Null => write!(f, "null"),
        }
    }
}
