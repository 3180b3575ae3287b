//! multinum - multi-representation numeric dispatch core.
//!
//! This crate provides the substrate that every elementwise numeric
//! operation in the library is built on:
//!
//! - `Value` enum for dynamic typing over heterogeneous numeric
//!   representations (native floats, arbitrary-precision decimals,
//!   exact fractions, complex numbers, physical units, nested
//!   collections)
//! - `TypeTag` resolver mapping every runtime value to its dispatch
//!   category
//! - `Operation` for runtime multiple dispatch over type tags
//! - `deep_map` for recursive, shape-preserving collection traversal
//! - process-wide numeric-preference configuration read at call time
//! - `DispatchError` for error handling
//!
//! Operations such as [`ops::unary_plus`] compose these pieces: one
//! implementation branch per supported tag, a collection branch that
//! recurses through `deep_map`, and a coercion branch that consults the
//! global configuration.

// Prevent accidental debug output in library code.
#![deny(clippy::print_stderr)]
#![deny(clippy::print_stdout)]

pub mod collection;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod ops;
pub mod types;
pub mod value;

/// Prelude module for convenient imports
///
/// # Example
/// ```
/// use multinum::prelude::*;
/// ```
pub mod prelude {
    pub use super::collection::deep_map;
    pub use super::config::{get_number_kind, set_number_kind, Config, NumberKind};
    pub use super::dispatch::{Operation, Signature};
    pub use super::error::{DispatchError, DispatchResult};
    pub use super::ops::{unary_minus, unary_plus};
    pub use super::types::{type_of, TypeTag};
    pub use super::value::Value;
}

pub use prelude::*;
