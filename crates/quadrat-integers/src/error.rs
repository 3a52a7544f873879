//! Error type for exact number construction.

use thiserror::Error;

/// Errors raised while constructing a [`Rational`](crate::Rational).
///
/// Construction either succeeds with a normalized value or fails outright;
/// there is no partially built rational.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RationalError {
    /// A zero denominator was supplied.
    #[error("denominator cannot be zero")]
    DivisionByZero,

    /// A NaN or infinite float has no rational counterpart.
    #[error("cannot convert non-finite value {0} to a rational")]
    NonFinite(f64),

    /// `from_f64_approx` was asked for denominators bounded by zero.
    #[error("maximum denominator must be at least 1")]
    ZeroDenominatorBound,

    /// The text is not an integer or a `numerator/denominator` literal.
    #[error("invalid rational literal {0:?}")]
    InvalidLiteral(String),
}
