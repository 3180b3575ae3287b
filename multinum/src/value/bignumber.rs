//! Arbitrary-precision decimal representation.

use std::fmt;

use super::RustBigFloat;
use crate::config::{get_bignumber_precision, get_bignumber_rounding};

/// Arbitrary-precision decimal number.
///
/// Immutable: operations that leave the value unchanged return the same
/// instance (via `Rc` in [`Value`](super::Value)), and operations that
/// change it allocate a new one. Construction reads the global precision
/// and rounding mode at call time, so `set_bignumber_precision` and
/// `set_bignumber_rounding_mode` affect the next constructed value, not
/// existing ones.
#[derive(Debug, Clone, PartialEq)]
pub struct BigNumber(RustBigFloat);

impl BigNumber {
    /// Create a BigNumber from a native float at the configured precision.
    pub fn from_f64(value: f64) -> BigNumber {
        BigNumber(RustBigFloat::from_f64(value, get_bignumber_precision()))
    }

    /// Parse a decimal string at the configured precision and rounding
    /// mode. Returns `None` for text that is not a number (astro-float
    /// signals that with NaN, so a literal "nan" still parses).
    pub fn parse(text: &str) -> Option<BigNumber> {
        let mut consts = astro_float::Consts::new().ok()?;
        let parsed = RustBigFloat::parse(
            text,
            astro_float::Radix::Dec,
            get_bignumber_precision(),
            get_bignumber_rounding(),
            &mut consts,
        );
        if parsed.is_nan() && !text.to_lowercase().contains("nan") {
            return None;
        }
        Some(BigNumber(parsed))
    }

    /// Wrap an existing BigFloat.
    pub fn from_bigfloat(value: RustBigFloat) -> BigNumber {
        BigNumber(value)
    }

    /// Precision of the underlying BigFloat in bits. `None` for NaN and
    /// the infinities, which carry no mantissa.
    pub fn precision(&self) -> Option<usize> {
        self.0.precision()
    }

    /// The negated value, as a new instance.
    pub fn neg(&self) -> BigNumber {
        BigNumber(self.0.neg())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_nan(&self) -> bool {
        self.0.is_nan()
    }

    /// Access the underlying BigFloat.
    pub fn inner(&self) -> &RustBigFloat {
        &self.0
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_f64_equality() {
        assert_eq!(BigNumber::from_f64(3.5), BigNumber::from_f64(3.5));
        assert_ne!(BigNumber::from_f64(3.5), BigNumber::from_f64(-3.5));
    }

    #[test]
    fn test_zero_and_neg() {
        assert!(BigNumber::from_f64(0.0).is_zero());
        assert!(!BigNumber::from_f64(1.0).is_zero());
        assert_eq!(BigNumber::from_f64(1.5).neg(), BigNumber::from_f64(-1.5));
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(BigNumber::parse("3.5"), Some(BigNumber::from_f64(3.5)));
        assert_eq!(BigNumber::parse("-2"), Some(BigNumber::from_f64(-2.0)));
        assert!(BigNumber::parse("abc").is_none());
        // a literal NaN is a number, not a parse failure
        assert!(BigNumber::parse("NaN").is_some_and(|b| b.is_nan()));
    }

    #[test]
    fn test_precision_accessor() {
        assert_eq!(BigNumber::from_f64(1.5).precision(), Some(256));
        assert_eq!(BigNumber::from_f64(f64::NAN).precision(), None);
    }

    #[test]
    fn test_nan() {
        assert!(BigNumber::from_f64(f64::NAN).is_nan());
        assert!(!BigNumber::from_f64(0.0).is_nan());
    }
}
