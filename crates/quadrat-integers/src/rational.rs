//! Arbitrary precision rational numbers.
//!
//! Exact rational arithmetic plus the two conversions the area engine needs
//! at its edges: parsing user literals and approximating `f64` results.
//!
//! Rationals are always stored in lowest terms with a positive denominator,
//! so equal values have equal representations and print identically.

use dashu::base::{Abs, Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::{Integer, RationalError};

/// Default denominator bound for [`Rational::from_f64_approx`].
///
/// Large enough to recover the fractions that show up when integrating small
/// quadratics, small enough to hide the noise floating-point error leaves in
/// the low bits.
pub const DEFAULT_MAX_DENOMINATOR: u64 = 100_000;

/// An arbitrary precision rational number.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// The sign is moved onto the numerator and the fraction is reduced.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the denominator is zero.
    pub fn new(numerator: Integer, denominator: Integer) -> Result<Self, RationalError> {
        if denominator.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        let numerator = if denominator.is_negative() {
            -numerator
        } else {
            numerator
        };
        Ok(Self(RBig::from_parts(
            numerator.into_inner(),
            denominator.into_inner().unsigned_abs(),
        )))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the denominator is zero.
    pub fn from_i64(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self(RBig::from(n.into_inner()))
    }

    /// Converts a finite `f64` to the rational it encodes, bit for bit.
    ///
    /// `0.1` becomes `3602879701896397/36028797018963968`, not `1/10`; use
    /// [`from_f64_approx`](Self::from_f64_approx) for the readable form.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::NonFinite`] for NaN and infinities.
    pub fn from_f64_exact(value: f64) -> Result<Self, RationalError> {
        if !value.is_finite() {
            return Err(RationalError::NonFinite(value));
        }

        let bits = value.to_bits();
        let negative = bits >> 63 == 1;
        let biased_exponent = i32::try_from((bits >> 52) & 0x7ff).unwrap_or(0);
        let fraction = bits & 0x000f_ffff_ffff_ffff;

        let (mantissa, exponent) = if biased_exponent == 0 {
            (fraction, -1074)
        } else {
            (fraction | (1 << 52), biased_exponent - 1075)
        };

        let mantissa = Integer::from(mantissa);
        let magnitude = if exponent >= 0 {
            Self::from_integer(mantissa * Integer::power_of_two(exponent.unsigned_abs() as usize))
        } else {
            Self::new(mantissa, Integer::power_of_two(exponent.unsigned_abs() as usize))?
        };

        Ok(if negative { -magnitude } else { magnitude })
    }

    /// Returns the closest rational to `value` whose denominator does not
    /// exceed `max_denominator`.
    ///
    /// This is a lossy conversion meant for display: the result is the best
    /// approximation under the bound, not the value the float encodes.
    /// Callers that need to keep track of that should wrap the result in
    /// [`Value::Approximate`](crate::Value::Approximate).
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::NonFinite`] for NaN and infinities and
    /// [`RationalError::ZeroDenominatorBound`] when `max_denominator` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use quadrat_integers::Rational;
    ///
    /// let third = Rational::from_f64_approx(0.333_333_3, 10_000).unwrap();
    /// assert_eq!(third.to_string(), "1/3");
    /// ```
    pub fn from_f64_approx(value: f64, max_denominator: u64) -> Result<Self, RationalError> {
        if max_denominator == 0 {
            return Err(RationalError::ZeroDenominatorBound);
        }
        Self::from_f64_exact(value)?.approximate(max_denominator)
    }

    /// Best approximation of `self` with denominator at most `max_denominator`.
    ///
    /// Values whose denominator already fits are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::ZeroDenominatorBound`] when `max_denominator`
    /// is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use quadrat_integers::Rational;
    ///
    /// let x: Rational = "314159/100000".parse().unwrap();
    /// assert_eq!(x.approximate(100).unwrap().to_string(), "311/99");
    /// ```
    pub fn approximate(&self, max_denominator: u64) -> Result<Self, RationalError> {
        if max_denominator == 0 {
            return Err(RationalError::ZeroDenominatorBound);
        }
        Ok(self.limit_denominator(&Integer::from(max_denominator)))
    }

    /// Walks the continued fraction expansion until the next convergent would
    /// exceed the bound, then picks between the last convergent and the best
    /// semiconvergent. Ties go to the convergent. `max_denominator` is positive.
    fn limit_denominator(&self, max_denominator: &Integer) -> Self {

        let denominator = self.denominator();
        if &denominator <= max_denominator {
            return self.clone();
        }

        let mut n = self.numerator().abs();
        let mut d = denominator.clone();
        let (mut p0, mut q0) = (Integer::zero(), Integer::one());
        let (mut p1, mut q1) = (Integer::one(), Integer::zero());

        // d never reaches zero here: the final convergent is self, whose
        // denominator is already known to exceed the bound.
        loop {
            let a = &n / &d;
            let q2 = &q0 + &(&a * &q1);
            if &q2 > max_denominator {
                break;
            }
            let p2 = &p0 + &(&a * &p1);
            p0 = std::mem::replace(&mut p1, p2);
            q0 = std::mem::replace(&mut q1, q2);
            let r = &n - &(&a * &d);
            n = std::mem::replace(&mut d, r);
        }

        let k = (max_denominator - &q0) / &q1;
        let semi_q = &q0 + &(&k * &q1);
        let two = Integer::new(2);
        let magnitude = if &(&(&two * &d) * &semi_q) <= &denominator {
            Self::from_parts_unchecked(p1, q1)
        } else {
            Self::from_parts_unchecked(&p0 + &(&k * &p1), semi_q)
        };

        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    fn from_parts_unchecked(numerator: Integer, denominator: Integer) -> Self {
        Self(RBig::from_parts(
            numerator.into_inner(),
            denominator.into_inner().unsigned_abs(),
        ))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        Integer::from(self.0.numerator().clone())
    }

    /// Returns the denominator (always positive).
    #[must_use]
    pub fn denominator(&self) -> Integer {
        Integer::from(dashu::integer::IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the rational is zero.
    pub fn recip(&self) -> Result<Self, RationalError> {
        if self.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self(self.0.clone().inv()))
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Computes self^exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Returns the exact square root if `self` is the square of a rational.
    #[must_use]
    pub fn sqrt_exact(&self) -> Option<Self> {
        if self.is_negative() {
            return None;
        }
        // Lowest terms: a square iff numerator and denominator both are.
        let numerator = self.numerator().sqrt_exact()?;
        let denominator = self.denominator().sqrt_exact()?;
        Some(Self::from_parts_unchecked(numerator, denominator))
    }

    /// Nearest `f64` approximation.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let (num, num_exp) = self.numerator().to_f64_parts();
        let (den, den_exp) = self.denominator().to_f64_parts();
        (num / den) * 2f64.powi(num_exp - den_exp)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({})", self.0)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The numerator carries the sign, so "-3/4" never becomes "3/-4".
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    /// Parses `"7"`, `"-7"` or `"-3/4"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RationalError::InvalidLiteral(s.to_string());
        let parse = |part: &str| Integer::from_str_radix(part.trim(), 10).map_err(|_| invalid());

        match s.split_once('/') {
            Some((numerator, denominator)) => Self::new(parse(numerator)?, parse(denominator)?),
            None => Ok(Self::from_integer(parse(s)?)),
        }
    }
}

/// Forwards a binary operator to `RBig` for owned and borrowed operands.
///
/// Division by a zero rational panics; use [`Rational::recip`] to check first.
macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                Rational(self.0.$method(rhs.0))
            }
        }

        impl $trait<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                Rational(self.0.$method(&rhs.0))
            }
        }

        impl $trait for &Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                Rational((&self.0).$method(&rhs.0))
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational(-&self.0)
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::new(i64::from(n)))
    }
}
