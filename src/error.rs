use thiserror::Error;

/// Everything that can go wrong while building or taking apart a `Numeral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum ArithmeticError {
    /// A numeral was requested from a negative count. Natural numbers stop at zero.
    #[error("cannot build a numeral from negative count {count}")]
    InvalidArgument { count: i64 },
    /// The predecessor of `Z` was requested.
    #[error("zero has no predecessor")]
    Underflow,
}

/// Shorthand for results carrying an `ArithmeticError`.
pub type Result<T> = ::std::result::Result<T, ArithmeticError>;
