//! Exact rational fraction representation.

use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

/// Exact rational number, stored in lowest terms with the sign on the
/// numerator and a positive denominator. Immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fraction {
    num: BigInt,
    den: BigInt,
}

impl Fraction {
    /// Create a fraction, normalizing to canonical form.
    ///
    /// The denominator must be nonzero.
    pub fn new(num: BigInt, den: BigInt) -> Fraction {
        debug_assert!(!den.is_zero(), "fraction denominator must be nonzero");
        let (mut num, mut den) = if den.is_negative() {
            (-num, -den)
        } else {
            (num, den)
        };
        let g = num.gcd(&den);
        if !g.is_zero() {
            num /= &g;
            den /= &g;
        }
        Fraction { num, den }
    }

    /// Create a fraction from machine integers.
    pub fn from_integers(num: i64, den: i64) -> Fraction {
        Fraction::new(BigInt::from(num), BigInt::from(den))
    }

    pub fn numerator(&self) -> &BigInt {
        &self.num
    }

    pub fn denominator(&self) -> &BigInt {
        &self.den
    }

    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    /// The negated value, as a new instance.
    pub fn neg(&self) -> Fraction {
        Fraction {
            num: -&self.num,
            den: self.den.clone(),
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}
