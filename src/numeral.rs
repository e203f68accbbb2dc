use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use tracing::debug;

use crate::distinction::{distinguish, Distinction};
use crate::error::{ArithmeticError, Result};

/// A natural number, written out as a chain of successors ending in zero.
///
/// Each `Successor` owns exactly one child, so a numeral is always a finite, unshared chain.
/// Equality, ordering, hashing, cloning and dropping all walk that chain with a loop rather
/// than recursing into it, so very deep numerals are fine as long as the heap holds out.
pub enum Numeral {
    Zero,
    Successor(Box<Numeral>),
}

/// `Z`.
pub fn zero() -> Numeral {
    Numeral::Zero
}

/// Wraps `n` one level deeper: `n` becomes `S(n)`.
pub fn successor(n: Numeral) -> Numeral {
    Numeral::Successor(Box::new(n))
}

/// Applies `successor` to `Z` exactly `count` times.
///
/// ```
/// # use delta_sigma::{from_count, ArithmeticError};
/// assert_eq!(from_count(3).unwrap().to_string(), "S(S(S(Z)))");
/// assert_eq!(from_count(-1), Err(ArithmeticError::InvalidArgument { count: -1 }));
/// ```
pub fn from_count(count: i64) -> Result<Numeral> {
    match usize::try_from(count) {
        Ok(levels) => Ok(Numeral::from(levels)),
        Err(_) => {
            debug!(count, "refusing to build a numeral from a count outside usize");
            Err(ArithmeticError::InvalidArgument { count })
        }
    }
}

impl Numeral {
    /// Collapses the numeral into the machine integer it denotes.
    pub fn reify(&self) -> usize {
        self.levels().skip(1).count()
    }

    // Detaches the child of a successor, leaving `Z` in its place.
    pub(crate) fn take_child(&mut self) -> Numeral {
        match *self {
            Numeral::Zero => Numeral::Zero,
            Numeral::Successor(ref mut child) => mem::replace(&mut **child, Numeral::Zero),
        }
    }
}

impl Drop for Numeral {
    fn drop(&mut self) {
        // `Z` owns nothing; only a successor chain needs unlinking.
        if let Numeral::Successor(ref mut child) = *self {
            let mut next = mem::replace(&mut **child, Numeral::Zero);
            while let Numeral::Successor(ref mut child) = next {
                let below = mem::replace(&mut **child, Numeral::Zero);
                next = below;
            }
        }
    }
}

impl Default for Numeral {
    fn default() -> Numeral {
        Numeral::Zero
    }
}

impl Clone for Numeral {
    fn clone(&self) -> Numeral {
        Numeral::from(self.reify())
    }
}

impl From<usize> for Numeral {
    fn from(count: usize) -> Numeral {
        (0..count).fold(zero(), |n, _| successor(n))
    }
}

impl<'a> From<&'a Numeral> for usize {
    fn from(n: &'a Numeral) -> usize {
        n.reify()
    }
}

impl TryFrom<i64> for Numeral {
    type Error = ArithmeticError;

    fn try_from(count: i64) -> Result<Numeral> {
        from_count(count)
    }
}

impl Ord for Numeral {
    fn cmp(&self, other: &Numeral) -> Ordering {
        let (mut lhs, mut rhs) = (self, other);
        loop {
            match (distinguish(lhs), distinguish(rhs)) {
                (Distinction::Base, Distinction::Base) => return Ordering::Equal,
                (Distinction::Base, Distinction::Inductive(_)) => return Ordering::Less,
                (Distinction::Inductive(_), Distinction::Base) => return Ordering::Greater,
                (Distinction::Inductive(l), Distinction::Inductive(r)) => {
                    lhs = l;
                    rhs = r;
                }
            }
        }
    }
}

impl PartialOrd for Numeral {
    fn partial_cmp(&self, other: &Numeral) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Numeral {
    fn eq(&self, other: &Numeral) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Numeral {}

impl Hash for Numeral {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.reify().hash(state);
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let depth = self.reify();
        for _ in 0..depth {
            f.write_str("S(")?;
        }
        f.write_str("Z")?;
        for _ in 0..depth {
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn counts_reify_back() {
        for k in 0..32 {
            assert_eq!(from_count(k).unwrap().reify(), k as usize);
        }
    }

    #[test]
    fn negative_counts_are_rejected() {
        assert_eq!(from_count(-1), Err(ArithmeticError::InvalidArgument { count: -1 }));
        assert_eq!(Numeral::try_from(-7i64), Err(ArithmeticError::InvalidArgument { count: -7 }));
    }

    #[test]
    fn renders_structurally() {
        assert_eq!(zero().to_string(), "Z");
        assert_eq!(successor(zero()).to_string(), "S(Z)");
        assert_eq!(format!("{:?}", Numeral::from(2usize)), "S(S(Z))");
    }

    #[test]
    fn equality_is_depth() {
        assert_eq!(Numeral::from(4usize), successor(successor(Numeral::from(2usize))));
        assert_ne!(Numeral::from(4usize), Numeral::from(5usize));
        assert!(Numeral::from(3usize) < Numeral::from(4usize));
        assert!(Numeral::from(9usize) > zero());

        let set: HashSet<Numeral> = vec![Numeral::from(1usize), Numeral::from(1usize), zero()].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn shallow_numerals_drop_cleanly() {
        drop(zero());
        drop(from_count(0).unwrap());
        drop(from_count(1).unwrap());
        drop(successor(successor(zero())));
        assert_eq!(from_count(1).unwrap().into_predecessor(), Ok(zero()));
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn counts_past_usize_are_rejected() {
        let count = i64::from(u32::max_value()) + 1;
        assert_eq!(from_count(count), Err(ArithmeticError::InvalidArgument { count }));
    }

    #[test]
    fn deep_numerals_do_not_blow_the_stack() {
        let deep = Numeral::from(1_000_000usize);
        let copy = deep.clone();
        assert_eq!(deep, copy);
        assert_eq!(usize::from(&copy), 1_000_000);
        drop(deep);
        drop(copy);
    }
}
