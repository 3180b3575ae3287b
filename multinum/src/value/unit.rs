//! Physical unit representation.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A magnitude paired with a unit name (e.g. `5 cm`).
///
/// Unlike the other scalar representations, units are mutable: callers
/// may adjust the magnitude in place through a shared [`UnitRef`].
/// Operations that return a unit unchanged must therefore hand back an
/// independent copy, never the input reference, or the caller could
/// observe later mutations through the "result".
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    /// Magnitude in the given unit
    pub value: f64,
    /// Unit name (e.g. "cm", "kg")
    pub unit: String,
}

impl Unit {
    pub fn new<S: Into<String>>(value: f64, unit: S) -> Unit {
        Unit {
            value,
            unit: unit.into(),
        }
    }

    /// A copy with the magnitude negated.
    pub fn negated(&self) -> Unit {
        Unit {
            value: -self.value,
            unit: self.unit.clone(),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Shared, mutable unit reference.
pub type UnitRef = Rc<RefCell<Unit>>;

pub fn new_unit_ref(unit: Unit) -> UnitRef {
    Rc::new(RefCell::new(unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Unit::new(5.0, "cm").to_string(), "5 cm");
    }

    #[test]
    fn test_negated_is_independent() {
        let u = Unit::new(2.5, "kg");
        let n = u.negated();
        assert_eq!(n.value, -2.5);
        assert_eq!(n.unit, "kg");
        assert_eq!(u.value, 2.5);
    }

    #[test]
    fn test_ref_mutation() {
        let r = new_unit_ref(Unit::new(1.0, "m"));
        r.borrow_mut().value = 2.0;
        assert_eq!(r.borrow().value, 2.0);
    }
}
