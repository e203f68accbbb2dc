//! Σ, the connection, and the arithmetic built out of it.
//!
//! Both `add` and `multiply` are defined by recursion on their second argument, but run as
//! loops with an accumulator: one successor (or one addition) per level peeled off the right.

use std::ops;

use tracing::trace;

use crate::distinction::{distinguish, Distinction};
use crate::numeral::{successor, zero, Numeral};

/// Joins a pair into one value with `op`.
pub fn connect<T, F>(pair: (T, T), op: F) -> T
where
    F: FnOnce(T, T) -> T,
{
    let (lhs, rhs) = pair;
    op(lhs, rhs)
}

/// `a + Z = a`, `a + S(b) = S(a + b)`.
///
/// ```
/// # use delta_sigma::{add, from_count};
/// let sum = add(from_count(2).unwrap(), &from_count(3).unwrap());
/// assert_eq!(sum, from_count(5).unwrap());
/// ```
pub fn add(a: Numeral, b: &Numeral) -> Numeral {
    let mut sum = a;
    let mut rest = b;
    let mut depth = 0usize;
    while let Distinction::Inductive(pred) = distinguish(rest) {
        trace!(depth, "add: inductive case, applying successor");
        sum = successor(sum);
        rest = pred;
        depth += 1;
    }
    trace!(depth, "add: base case");
    sum
}

/// `a * Z = Z`, `a * S(b) = a + a * b`.
pub fn multiply(a: &Numeral, b: &Numeral) -> Numeral {
    let mut product = zero();
    let mut rest = b;
    let mut depth = 0usize;
    while let Distinction::Inductive(pred) = distinguish(rest) {
        trace!(depth, "multiply: inductive case, adding the left factor");
        // a + a * b, accumulated as a * b + a.
        product = add(product, a);
        rest = pred;
        depth += 1;
    }
    trace!(depth, "multiply: base case");
    product
}

/// `Z` is even, `S(Z)` is odd, `S(S(n))` is as even as `n`.
pub fn is_even(n: &Numeral) -> bool {
    let mut rest = n;
    loop {
        match distinguish(rest) {
            Distinction::Base => return true,
            Distinction::Inductive(pred) => match distinguish(pred) {
                Distinction::Base => return false,
                Distinction::Inductive(pred) => rest = pred,
            },
        }
    }
}

impl Numeral {
    pub fn is_even(&self) -> bool {
        is_even(self)
    }
}

impl ops::Add for Numeral {
    type Output = Numeral;

    fn add(self, rhs: Numeral) -> Numeral {
        connect((self, rhs), |lhs, rhs| add(lhs, &rhs))
    }
}

impl<'a> ops::Add<&'a Numeral> for Numeral {
    type Output = Numeral;

    fn add(self, rhs: &'a Numeral) -> Numeral {
        add(self, rhs)
    }
}

impl<'a, 'b> ops::Add<&'b Numeral> for &'a Numeral {
    type Output = Numeral;

    fn add(self, rhs: &'b Numeral) -> Numeral {
        add(self.clone(), rhs)
    }
}

impl ops::Mul for Numeral {
    type Output = Numeral;

    fn mul(self, rhs: Numeral) -> Numeral {
        connect((self, rhs), |lhs, rhs| multiply(&lhs, &rhs))
    }
}

impl<'a, 'b> ops::Mul<&'b Numeral> for &'a Numeral {
    type Output = Numeral;

    fn mul(self, rhs: &'b Numeral) -> Numeral {
        multiply(self, rhs)
    }
}
