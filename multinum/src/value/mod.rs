//! Runtime values for the dispatch core.
//!
//! # Module Organization
//!
//! - `value_enum.rs`: the `Value` enum, tag resolution, equality, display
//! - `bignumber.rs`: arbitrary-precision decimal (astro-float backed)
//! - `fraction.rs`: exact rational fraction (num-bigint backed)
//! - `complex.rs`: complex number
//! - `unit.rs`: physical unit with magnitude (the one mutable representation)
//! - `matrix.rs`: matrix collection (shape + row-major storage)
//!
//! The immutable representations (`BigNumber`, `Fraction`, `Complex`)
//! are held behind `Rc`, so identity-preserving operations can return
//! the same instance rather than a defensive copy. `Unit` is mutable and
//! shared through `Rc<RefCell<_>>`; anything that must prevent aliasing
//! allocates a fresh reference.

mod bignumber;
mod complex;
mod fraction;
mod matrix;
mod unit;
mod value_enum;

pub use bignumber::BigNumber;
pub use complex::Complex;
pub use fraction::Fraction;
pub use matrix::Matrix;
pub use unit::{new_unit_ref, Unit, UnitRef};
pub use value_enum::Value;

// Re-export BigFloat and its rounding modes for use in other modules
pub use astro_float::BigFloat as RustBigFloat;
pub use astro_float::RoundingMode as BigFloatRoundingMode;
