//! Input numbers: exact rationals or plain floats.

use num_traits::{One, Zero};
use quadrat_integers::{Rational, RationalError};
use std::fmt;
use std::str::FromStr;

use crate::error::IntegrateError;

/// A coefficient or bound as supplied by the caller.
///
/// Integers and fractions are `Exact`; anything typed as a float is `Real`.
/// A request is evaluated exactly only when all of its operands are exact.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    /// An exact rational (integers included).
    Exact(Rational),
    /// A floating-point number.
    Real(f64),
}

impl Operand {
    /// Returns the rational if this operand is exact.
    pub fn as_exact(&self) -> Option<&Rational> {
        match self {
            Operand::Exact(r) => Some(r),
            Operand::Real(_) => None,
        }
    }

    /// Returns true if this operand is exact.
    pub fn is_exact(&self) -> bool {
        matches!(self, Operand::Exact(_))
    }

    /// The rational the operand denotes; floats convert bit for bit.
    ///
    /// # Errors
    ///
    /// Fails with [`RationalError::NonFinite`] for NaN and infinities.
    pub fn to_rational(&self) -> Result<Rational, RationalError> {
        match self {
            Operand::Exact(r) => Ok(r.clone()),
            Operand::Real(x) => Rational::from_f64_exact(*x),
        }
    }

    /// Floating-point view of the operand.
    pub fn to_f64(&self) -> f64 {
        match self {
            Operand::Exact(r) => r.to_f64(),
            Operand::Real(x) => *x,
        }
    }

    /// Exact operands are always finite.
    pub fn is_finite(&self) -> bool {
        match self {
            Operand::Exact(_) => true,
            Operand::Real(x) => x.is_finite(),
        }
    }

    /// True for exact or floating-point zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Operand::Exact(r) => r.is_zero(),
            Operand::Real(x) => *x == 0.0,
        }
    }

    /// True for exactly one.
    pub fn is_one(&self) -> bool {
        match self {
            Operand::Exact(r) => r.is_one(),
            Operand::Real(x) => *x == 1.0,
        }
    }

    /// True when strictly below zero.
    pub fn is_negative(&self) -> bool {
        match self {
            Operand::Exact(r) => r.is_negative(),
            Operand::Real(x) => *x < 0.0,
        }
    }

    /// Absolute value, keeping the kind.
    pub fn abs(&self) -> Self {
        match self {
            Operand::Exact(r) => Operand::Exact(r.abs()),
            Operand::Real(x) => Operand::Real(x.abs()),
        }
    }
}

impl From<Rational> for Operand {
    fn from(value: Rational) -> Self {
        Operand::Exact(value)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Exact(Rational::from(value))
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Exact(Rational::from(value))
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Real(value)
    }
}

impl FromStr for Operand {
    type Err = IntegrateError;

    /// `"3"` and `"-3/4"` parse exactly; `"0.75"` or `"1e-3"` parse as reals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(exact) = s.parse::<Rational>() {
            return Ok(Operand::Exact(exact));
        }
        match s.trim().parse::<f64>() {
            Ok(x) if x.is_finite() => Ok(Operand::Real(x)),
            _ => Err(IntegrateError::InvalidOperand(s.to_string())),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Exact(r) => write!(f, "{r}"),
            Operand::Real(x) => write!(f, "{x}"),
        }
    }
}
