//! Results tagged with how much they can be trusted.

use std::fmt;

use crate::{QuadraticSurd, Rational, RationalError};

/// A rational result that remembers whether it is exact.
///
/// `Exact` values came out of rational arithmetic alone. `Approximate` values
/// passed through floating point (or through an irrational intermediate) and
/// were rounded to the nearest fraction under `max_denominator`; `source` is
/// the float they were rounded from.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The value is exact.
    Exact(Rational),
    /// Best rational approximation of a floating-point value.
    Approximate {
        /// The approximating fraction.
        value: Rational,
        /// Floating-point view of the quantity before rounding. Saturates to
        /// ±∞ for magnitudes outside the `f64` range.
        source: f64,
        /// Denominator bound used for the approximation.
        max_denominator: u64,
    },
}

impl Value {
    /// Wraps an exact rational.
    #[must_use]
    pub fn exact(value: Rational) -> Self {
        Value::Exact(value)
    }

    /// Approximates `source` by the best fraction with denominator at most
    /// `max_denominator`.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`Rational::from_f64_approx`].
    pub fn approximate(source: f64, max_denominator: u64) -> Result<Self, RationalError> {
        Ok(Value::Approximate {
            value: Rational::from_f64_approx(source, max_denominator)?,
            source,
            max_denominator,
        })
    }

    /// Rounds an exact rational to the best fraction with denominator at most
    /// `max_denominator`, tagging the result approximate.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::ZeroDenominatorBound`] when `max_denominator`
    /// is zero.
    pub fn from_rational_approx(
        exact: &Rational,
        max_denominator: u64,
    ) -> Result<Self, RationalError> {
        Ok(Value::Approximate {
            value: exact.approximate(max_denominator)?,
            source: exact.to_f64(),
            max_denominator,
        })
    }

    /// Exact when the surd is rational, approximated otherwise.
    ///
    /// Irrational surds are rounded in exact arithmetic, so arbitrarily large
    /// values are handled.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::ZeroDenominatorBound`] when `max_denominator`
    /// is zero.
    pub fn from_surd(surd: &QuadraticSurd, max_denominator: u64) -> Result<Self, RationalError> {
        if let Some(value) = surd.as_rational() {
            return Ok(Value::Exact(value.clone()));
        }
        let value = surd.approximate(max_denominator)?;
        let source = surd.to_f64();
        Ok(Value::Approximate {
            source: if source.is_nan() { value.to_f64() } else { source },
            value,
            max_denominator,
        })
    }

    /// The rational carried by either variant.
    #[must_use]
    pub fn rational(&self) -> &Rational {
        match self {
            Value::Exact(value) | Value::Approximate { value, .. } => value,
        }
    }

    /// Returns the value if it is exact.
    #[must_use]
    pub fn as_exact(&self) -> Option<&Rational> {
        match self {
            Value::Exact(value) => Some(value),
            Value::Approximate { .. } => None,
        }
    }

    /// Returns true for [`Value::Exact`].
    #[must_use]
    pub fn is_exact(&self) -> bool {
        matches!(self, Value::Exact(_))
    }

    /// Floating-point view: the source float for approximations, the
    /// rational's nearest `f64` for exact values.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            Value::Exact(value) => value.to_f64(),
            Value::Approximate { source, .. } => *source,
        }
    }

    /// Absolute value, keeping the tag.
    #[must_use]
    pub fn abs(&self) -> Self {
        match self {
            Value::Exact(value) => Value::Exact(value.abs()),
            Value::Approximate {
                value,
                source,
                max_denominator,
            } => Value::Approximate {
                value: value.abs(),
                source: source.abs(),
                max_denominator: *max_denominator,
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Exact(value) => write!(f, "{value}"),
            Value::Approximate { value, .. } => write!(f, "≈{value}"),
        }
    }
}
