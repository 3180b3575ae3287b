//! Type tags for runtime dispatch.
//!
//! Every runtime [`Value`](crate::value::Value) resolves to exactly one
//! `TypeTag`. Tags form a flat enumerable set; the only grouping on top
//! of it is the explicit "matrix-like" pairing of `Array` and `Matrix`
//! (see [`TypeTag::is_collection`]), which operations express through
//! signature alternation rather than a tag hierarchy.
//!
//! Canonical tag names follow the conventions of the surrounding
//! library: lowercase for language-level categories (`number`,
//! `boolean`, `string`, `null`), capitalized for the dedicated
//! representation types (`BigNumber`, `Fraction`, `Complex`, `Unit`,
//! `Array`, `Matrix`).

use serde::{Deserialize, Serialize};

use crate::error::{DispatchError, DispatchResult};
use crate::value::Value;


/// Dispatch category of a runtime value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    /// Native 64-bit floating point (`number`)
    #[serde(rename = "number")]
    Number,
    /// Arbitrary-precision decimal (`BigNumber`)
    BigNumber,
    /// Exact rational fraction (`Fraction`)
    Fraction,
    /// Complex number (`Complex`)
    Complex,
    /// Physical unit with magnitude (`Unit`)
    Unit,
    /// Nested array collection (`Array`)
    Array,
    /// Matrix collection (`Matrix`)
    Matrix,
    /// Boolean (`boolean`)
    #[serde(rename = "boolean")]
    Boolean,
    /// String (`string`)
    #[serde(rename = "string")]
    Str,
    /// Null value (`null`)
    #[serde(rename = "null")]
    Null,
}

impl TypeTag {
    /// Canonical name of this tag, as used in signatures and errors.
    pub fn name(&self) -> &'static str {
        match self {
            TypeTag::Number => "number",
            TypeTag::BigNumber => "BigNumber",
            TypeTag::Fraction => "Fraction",
            TypeTag::Complex => "Complex",
            TypeTag::Unit => "Unit",
            TypeTag::Array => "Array",
            TypeTag::Matrix => "Matrix",
            TypeTag::Boolean => "boolean",
            TypeTag::Str => "string",
            TypeTag::Null => "null",
        }
    }

    /// Resolve a canonical tag name back to its tag.
    ///
    /// This is the one place the value universe is open-ended: signature
    /// text may name a category the library defines no tag for, which
    /// fails with [`DispatchError::UnsupportedType`].
    pub fn from_name(name: &str) -> DispatchResult<TypeTag> {
        match name {
            "number" => Ok(TypeTag::Number),
            "BigNumber" => Ok(TypeTag::BigNumber),
            "Fraction" => Ok(TypeTag::Fraction),
            "Complex" => Ok(TypeTag::Complex),
            "Unit" => Ok(TypeTag::Unit),
            "Array" => Ok(TypeTag::Array),
            "Matrix" => Ok(TypeTag::Matrix),
            "boolean" => Ok(TypeTag::Boolean),
            "string" => Ok(TypeTag::Str),
            "null" => Ok(TypeTag::Null),
            other => Err(DispatchError::unsupported_type(other)),
        }
    }

    /// The "matrix-like" grouping: true for `Array` and `Matrix` only.
    ///
    /// Operations that treat both collection kinds with one branch
    /// register the alternation `Array | Matrix`; this predicate is the
    /// shared definition of which tags that covers.
    pub fn is_collection(&self) -> bool {
        matches!(self, TypeTag::Array | TypeTag::Matrix)
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Resolve the type tag of a runtime value.
///
/// Deterministic and total over the `Value` universe: every variant
/// carries exactly one tag. No side effects.
pub fn type_of(value: &Value) -> TypeTag {
    value.tag()
}
