//! # `delta_sigma` - Peano arithmetic out of two primitives.
//!
//! This crate builds the natural numbers, addition, and multiplication out of exactly two
//! operations: a *distinction* (Δ), which tells the zero case of a numeral apart from the successor
//! case, and a *connection* (Σ), which joins things back together - for numerals, that's the
//! successor itself. Everything else is recursion on structure.
//!
//! # Numerals
//!
//! Let's start with the data. A `Numeral` is either `Z`, or `S` of some other numeral:
//!
//! ```rust
//! # #[macro_use] extern crate delta_sigma;
//! # use delta_sigma::{from_count, successor, zero};
//! # fn main() {
//! let three = successor(successor(successor(zero())));
//! assert_eq!(three.to_string(), "S(S(S(Z)))");
//! assert_eq!(three, from_count(3).unwrap());
//! assert_eq!(three, numeral!((S (S (S Z)))));
//! assert_eq!(three.reify(), 3);
//! # }
//! ```
//!
//! There are three ways in: wrap `zero()` with `successor` by hand, ask `from_count` for `k`
//! successors, or write the structure down with the `numeral!` macro. `from_count` takes an `i64`,
//! and will hand you an `ArithmeticError::InvalidArgument` if you give it something negative - there
//! is no numeral for `-1`. Going back out, `reify` counts the `S`es.
//!
//! # Distinction
//!
//! `distinguish` is how the rest of the crate looks inside a numeral. It hands back
//! `Distinction::Base` for `Z` and `Distinction::Inductive(n)` for `S(n)`, and every other operation
//! (`is_zero`, `predecessor`, `add`, `multiply`, `is_even`, even `==`) is written in terms of it.
//!
//! ```rust
//! # use delta_sigma::{distinguish, from_count, predecessor, zero, ArithmeticError, Distinction};
//! let two = from_count(2).unwrap();
//! match distinguish(&two) {
//!     Distinction::Base => unreachable!(),
//!     Distinction::Inductive(one) => assert_eq!(one.reify(), 1),
//! }
//! assert_eq!(predecessor(zero()), Err(ArithmeticError::Underflow));
//! ```
//!
//! Note that the predecessor of `Z` is an error (`Underflow`), not `Z`. There's nothing below zero
//! in the naturals.
//!
//! # Connection
//!
//! Addition recurses on its right-hand side:
//!
//! ```text
//! a + Z    => a
//! a + S(b) => S(a + b)
//! ```
//!
//! and multiplication is addition iterated the same way:
//!
//! ```text
//! a * Z    => Z
//! a * S(b) => a + (a * b)
//! ```
//!
//! ```rust
//! # use delta_sigma::{add, from_count, multiply};
//! let (two, three) = (from_count(2).unwrap(), from_count(3).unwrap());
//! assert_eq!(multiply(&two, &three), from_count(6).unwrap());
//! assert_eq!(add(two, &three), from_count(5).unwrap());
//! ```
//!
//! The definitions are recursive but the implementations aren't: each one peels the right-hand
//! side a level at a time in a loop, so stack use doesn't grow with the size of the numbers. The
//! same goes for dropping, cloning and comparing numerals. If you want to watch the reduction happen,
//! every step is emitted as a `tracing` event at `TRACE` level.
//!
//! `+` and `*` work too, on owned numerals and on references.

pub mod connection;
pub mod distinction;
pub mod error;
pub mod numeral;

pub use connection::{add, connect, is_even, multiply};
pub use distinction::{distinguish, is_zero, predecessor, Distinction, Levels};
pub use error::{ArithmeticError, Result};
pub use numeral::{from_count, successor, zero, Numeral};


/// Writes a numeral down structurally, in a little LISP-y notation: `Z` is zero, and `(S n)` is
/// the successor of `n`.
///
/// ```
/// # #[macro_use]
/// # extern crate delta_sigma;
/// # fn main() {
/// assert_eq!(numeral!(Z).reify(), 0);
/// assert_eq!(numeral!((S (S Z))).to_string(), "S(S(Z))");
/// # }
/// ```
#[macro_export]
macro_rules! numeral {
    (Z) => {
        $crate::zero()
    };
    ((S $inner:tt)) => {
        $crate::successor($crate::numeral!($inner))
    };
}
