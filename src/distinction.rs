//! Δ, the distinction. Every branch in this crate goes through `distinguish`.

use crate::error::{ArithmeticError, Result};
use crate::numeral::Numeral;

/// The two structural cases of a numeral. `Base` is `Z`; `Inductive` is `S(n)` and hands back
/// a borrow of `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distinction<'a> {
    Base,
    Inductive(&'a Numeral),
}

/// Splits `n` into its zero case or its successor case.
///
/// ```
/// # use delta_sigma::{distinguish, zero, successor, Distinction};
/// assert_eq!(distinguish(&zero()), Distinction::Base);
/// assert_eq!(distinguish(&successor(zero())), Distinction::Inductive(&zero()));
/// ```
pub fn distinguish(n: &Numeral) -> Distinction<'_> {
    match *n {
        Numeral::Zero => Distinction::Base,
        Numeral::Successor(ref pred) => Distinction::Inductive(&**pred),
    }
}

/// True iff `n` is `Z`.
pub fn is_zero(n: &Numeral) -> bool {
    distinguish(n) == Distinction::Base
}

/// Unwraps one successor. Taking the predecessor of `Z` is an `Underflow`.
pub fn predecessor(n: Numeral) -> Result<Numeral> {
    n.into_predecessor()
}

/// Walks a numeral from the outermost successor down to `Z`, inclusive.
pub struct Levels<'a> {
    next: Option<&'a Numeral>,
}

impl<'a> Iterator for Levels<'a> {
    type Item = &'a Numeral;

    fn next(&mut self) -> Option<&'a Numeral> {
        let current = self.next?;
        self.next = match distinguish(current) {
            Distinction::Base => None,
            Distinction::Inductive(pred) => Some(pred),
        };
        Some(current)
    }
}

impl Numeral {
    pub fn distinguish(&self) -> Distinction<'_> {
        distinguish(self)
    }

    pub fn is_zero(&self) -> bool {
        is_zero(self)
    }

    /// Borrowing predecessor.
    pub fn predecessor(&self) -> Result<&Numeral> {
        match distinguish(self) {
            Distinction::Base => Err(ArithmeticError::Underflow),
            Distinction::Inductive(pred) => Ok(pred),
        }
    }

    /// Consuming predecessor.
    pub fn into_predecessor(mut self) -> Result<Numeral> {
        if self.is_zero() {
            return Err(ArithmeticError::Underflow);
        }
        Ok(self.take_child())
    }

    /// Every level of this numeral, itself first and `Z` last.
    pub fn levels(&self) -> Levels<'_> {
        Levels { next: Some(self) }
    }
}
