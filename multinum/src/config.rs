//! Process-wide numeric configuration.
//!
//! Coercion branches read this state at the moment of coercion, never at
//! operation-construction time: two calls to the same operation
//! separated by a configuration change observe different preferences.
//! Nothing in the crate writes the configuration on its own; operations
//! only read it, so concurrent reads need no locking.

use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

use crate::value::BigFloatRoundingMode;

/// Preferred concrete representation for ambiguous scalar input
/// (booleans, strings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NumberKind {
    /// Native 64-bit floating point
    #[default]
    #[serde(rename = "number")]
    Number,
    /// Arbitrary-precision decimal
    #[serde(rename = "BigNumber")]
    BigNumber,
}

impl NumberKind {
    fn to_u8(self) -> u8 {
        match self {
            NumberKind::Number => 0,
            NumberKind::BigNumber => 1,
        }
    }

    fn from_u8(v: u8) -> NumberKind {
        match v {
            1 => NumberKind::BigNumber,
            _ => NumberKind::Number,
        }
    }
}

/// Mutable global preferred number kind.
/// Uses std::sync::atomic for thread-safe access.
static NUMBER_KIND_GLOBAL: AtomicU8 = AtomicU8::new(0); // Default: Number

/// Get the currently preferred numeric representation.
pub fn get_number_kind() -> NumberKind {
    NumberKind::from_u8(NUMBER_KIND_GLOBAL.load(Ordering::SeqCst))
}

/// Set the preferred numeric representation.
/// Returns the previous kind.
pub fn set_number_kind(kind: NumberKind) -> NumberKind {
    NumberKind::from_u8(NUMBER_KIND_GLOBAL.swap(kind.to_u8(), Ordering::SeqCst))
}

/// Default precision for new BigNumber values (in bits).
/// This is the initial value; it can be changed via set_bignumber_precision.
pub const BIGNUMBER_DEFAULT_PRECISION: usize = 256;

/// Mutable global precision for BigNumber construction.
/// Uses std::sync::atomic for thread-safe access.
static BIGNUMBER_PRECISION_GLOBAL: AtomicUsize = AtomicUsize::new(BIGNUMBER_DEFAULT_PRECISION);

/// Get the current default precision for BigNumber (in bits).
pub fn get_bignumber_precision() -> usize {
    BIGNUMBER_PRECISION_GLOBAL.load(Ordering::SeqCst)
}

/// Set the default precision for BigNumber (in bits).
/// Returns the previous precision.
pub fn set_bignumber_precision(precision: usize) -> usize {
    BIGNUMBER_PRECISION_GLOBAL.swap(precision, Ordering::SeqCst)
}

/// Mutable global rounding mode for BigNumber construction.
/// Uses std::sync::atomic for thread-safe access.
static BIGNUMBER_ROUNDING_GLOBAL: AtomicU8 = AtomicU8::new(0); // Default: ToEven (round nearest)

/// Get the current rounding mode for BigNumber construction.
/// Returns the mode as a u8: 0=ToEven, 1=ToZero, 2=Up, 3=Down, 4=FromZero, 5=ToOdd
pub fn get_bignumber_rounding_mode() -> u8 {
    BIGNUMBER_ROUNDING_GLOBAL.load(Ordering::SeqCst)
}

/// Set the rounding mode for BigNumber construction.
/// Returns the previous mode.
pub fn set_bignumber_rounding_mode(mode: u8) -> u8 {
    BIGNUMBER_ROUNDING_GLOBAL.swap(mode, Ordering::SeqCst)
}

/// Convert a rounding mode u8 to BigFloatRoundingMode.
pub fn u8_to_rounding_mode(mode: u8) -> BigFloatRoundingMode {
    match mode {
        0 => BigFloatRoundingMode::ToEven,
        1 => BigFloatRoundingMode::ToZero,
        2 => BigFloatRoundingMode::Up,
        3 => BigFloatRoundingMode::Down,
        4 => BigFloatRoundingMode::FromZero,
        5 => BigFloatRoundingMode::ToOdd,
        _ => BigFloatRoundingMode::ToEven, // Default
    }
}

/// Get the current BigNumber rounding mode as BigFloatRoundingMode.
pub fn get_bignumber_rounding() -> BigFloatRoundingMode {
    u8_to_rounding_mode(get_bignumber_rounding_mode())
}

/// Snapshot of the global configuration, for bulk read/write and
/// serialization. The snapshot is plain data; operations never hold one
/// (they read the globals directly so changes are visible immediately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Preferred numeric representation for coercions
    pub number: NumberKind,
    /// BigNumber construction precision in bits
    pub precision: usize,
}

impl Config {
    /// Read the current global configuration.
    pub fn current() -> Config {
        Config {
            number: get_number_kind(),
            precision: get_bignumber_precision(),
        }
    }

    /// Write this snapshot back to the global configuration.
    /// Returns the previous configuration.
    pub fn apply(&self) -> Config {
        Config {
            number: set_number_kind(self.number),
            precision: set_bignumber_precision(self.precision),
        }
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            number: NumberKind::default(),
            precision: BIGNUMBER_DEFAULT_PRECISION,
        }
    }
}
