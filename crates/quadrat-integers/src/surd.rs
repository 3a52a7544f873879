//! Quadratic surds `p + q√k` over the rationals.
//!
//! The roots of `ax² + bx + c` with rational coefficients live in `Q(√D)`,
//! where `D` is the discriminant. Evaluating the antiderivative at such a root
//! stays inside the same field, so sums of segment areas can be carried out
//! exactly and only rounded once at the very end.
//!
//! All surds taking part in one computation must share the radicand `k`;
//! plain rationals (`q = 0`) combine with anything.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::{Integer, Rational, RationalError};

/// A number of the form `rational + coefficient·√radicand`.
///
/// Invariants: `radicand` is non-negative and not the square of a rational;
/// when `coefficient` is zero the radicand is normalized to zero as well, so
/// rational values have a single representation.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct QuadraticSurd {
    rational: Rational,
    coefficient: Rational,
    radicand: Rational,
}

impl QuadraticSurd {
    /// Builds `rational + coefficient·√radicand`, folding the root into the
    /// rational part when `radicand` is a perfect square.
    ///
    /// # Panics
    ///
    /// Panics if `radicand` is negative.
    #[must_use]
    pub fn new(rational: Rational, coefficient: Rational, radicand: Rational) -> Self {
        assert!(!radicand.is_negative(), "radicand must be non-negative");

        if coefficient.is_zero() {
            return Self::from_rational(rational);
        }
        if let Some(root) = radicand.sqrt_exact() {
            return Self::from_rational(rational + coefficient * root);
        }
        Self {
            rational,
            coefficient,
            radicand,
        }
    }

    /// `√radicand`, exact when the radicand is a square.
    ///
    /// # Panics
    ///
    /// Panics if `radicand` is negative.
    #[must_use]
    pub fn sqrt(radicand: Rational) -> Self {
        Self::new(Rational::zero(), Rational::one(), radicand)
    }

    /// Embeds a rational.
    #[must_use]
    pub fn from_rational(value: Rational) -> Self {
        Self {
            rational: value,
            coefficient: Rational::zero(),
            radicand: Rational::zero(),
        }
    }

    /// The rational part `p`.
    #[must_use]
    pub fn rational_part(&self) -> &Rational {
        &self.rational
    }

    /// The coefficient `q` of the root.
    #[must_use]
    pub fn surd_coefficient(&self) -> &Rational {
        &self.coefficient
    }

    /// The radicand `k` (zero for rational values).
    #[must_use]
    pub fn radicand(&self) -> &Rational {
        &self.radicand
    }

    /// Returns the value as a rational if it has no surd part.
    #[must_use]
    pub fn as_rational(&self) -> Option<&Rational> {
        if self.coefficient.is_zero() {
            Some(&self.rational)
        } else {
            None
        }
    }

    /// Returns true if the value is rational.
    #[must_use]
    pub fn is_rational(&self) -> bool {
        self.coefficient.is_zero()
    }

    /// Exact sign: -1, 0, or 1.
    ///
    /// When the two parts disagree in sign, `p²` and `q²k` decide which one
    /// dominates; no floating point is involved.
    #[must_use]
    pub fn signum(&self) -> i8 {
        let p = self.rational.signum();
        let q = self.coefficient.signum();
        if q == 0 || p == q {
            return p;
        }
        if p == 0 {
            return q;
        }

        let p_squared = self.rational.pow(2);
        let q_squared_k = self.coefficient.pow(2) * &self.radicand;
        match p_squared.cmp(&q_squared_k) {
            Ordering::Greater => p,
            Ordering::Less => q,
            Ordering::Equal => 0,
        }
    }

    /// Returns true if the value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.signum() < 0
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    /// Multiplies by a rational.
    #[must_use]
    pub fn scale(&self, factor: &Rational) -> Self {
        Self::new(
            &self.rational * factor,
            &self.coefficient * factor,
            self.radicand.clone(),
        )
    }

    /// Best rational approximation with denominator at most `max_denominator`.
    ///
    /// `√k` is bracketed with an integer square root far finer than the
    /// bound, so the rounding never passes through `f64` and works at any
    /// magnitude.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::ZeroDenominatorBound`] when `max_denominator`
    /// is zero.
    pub fn approximate(&self, max_denominator: u64) -> Result<Rational, RationalError> {
        if self.is_rational() {
            return self.rational.approximate(max_denominator);
        }

        // √(n/d) = √(n·d)/d. Scaling by 4^m first leaves an error below
        // |q|/2^m in q·√k, i.e. under 1/(bound²·2^64).
        let bound_bits = Integer::from(max_denominator).bit_len();
        let shift = self.coefficient.numerator().bit_len() + 2 * bound_bits + 64;
        let scale = Integer::power_of_two(shift);
        let n = self.radicand.numerator();
        let d = self.radicand.denominator();

        // The radicand is non-negative, so the root always exists.
        let root = (&(&n * &d) * &(&scale * &scale))
            .isqrt()
            .unwrap_or_default();
        let sqrt_k = Rational::new(root, &d * &scale)?;
        (&self.rational + &(&self.coefficient * &sqrt_k)).approximate(max_denominator)
    }

    /// Nearest `f64` approximation; saturates to ±∞ beyond the `f64` range.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.rational.to_f64() + self.coefficient.to_f64() * self.radicand.to_f64().sqrt()
    }

    /// Returns true if both operands can be combined without leaving `Q(√k)`.
    #[must_use]
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.is_rational() || other.is_rational() || self.radicand == other.radicand
    }

    fn shared_radicand(&self, other: &Self) -> Rational {
        assert!(
            self.is_compatible(other),
            "cannot combine √{} with √{}",
            self.radicand,
            other.radicand
        );
        if self.is_rational() {
            other.radicand.clone()
        } else {
            self.radicand.clone()
        }
    }
}

impl From<Rational> for QuadraticSurd {
    fn from(value: Rational) -> Self {
        Self::from_rational(value)
    }
}

impl Zero for QuadraticSurd {
    fn zero() -> Self {
        Self::from_rational(Rational::zero())
    }

    fn is_zero(&self) -> bool {
        self.coefficient.is_zero() && self.rational.is_zero()
    }
}

/// # Panics
///
/// Panics if both operands carry surd parts with different radicands.
impl Add for &QuadraticSurd {
    type Output = QuadraticSurd;

    fn add(self, rhs: Self) -> Self::Output {
        let radicand = self.shared_radicand(rhs);
        QuadraticSurd::new(
            &self.rational + &rhs.rational,
            &self.coefficient + &rhs.coefficient,
            radicand,
        )
    }
}

impl Add for QuadraticSurd {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Sub for &QuadraticSurd {
    type Output = QuadraticSurd;

    fn sub(self, rhs: Self) -> Self::Output {
        self + &(-rhs)
    }
}

impl Sub for QuadraticSurd {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

/// `(p₁ + q₁√k)(p₂ + q₂√k) = p₁p₂ + q₁q₂k + (p₁q₂ + p₂q₁)√k`
impl Mul for &QuadraticSurd {
    type Output = QuadraticSurd;

    fn mul(self, rhs: Self) -> Self::Output {
        let radicand = self.shared_radicand(rhs);
        let rational =
            &self.rational * &rhs.rational + &(&self.coefficient * &rhs.coefficient) * &radicand;
        let coefficient =
            &self.rational * &rhs.coefficient + &self.coefficient * &rhs.rational;
        QuadraticSurd::new(rational, coefficient, radicand)
    }
}

impl Mul for QuadraticSurd {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Neg for &QuadraticSurd {
    type Output = QuadraticSurd;

    fn neg(self) -> Self::Output {
        QuadraticSurd {
            rational: -&self.rational,
            coefficient: -&self.coefficient,
            radicand: self.radicand.clone(),
        }
    }
}

impl Neg for QuadraticSurd {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

/// Surds with different radicands are incomparable.
impl PartialOrd for QuadraticSurd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.is_compatible(other) {
            return None;
        }
        Some((self - other).signum().cmp(&0))
    }
}

impl fmt::Debug for QuadraticSurd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuadraticSurd({self})")
    }
}

impl fmt::Display for QuadraticSurd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_rational() {
            return write!(f, "{}", self.rational);
        }

        let magnitude = self.coefficient.abs();
        let root = if magnitude.is_one() {
            format!("√({})", self.radicand)
        } else {
            format!("{magnitude}·√({})", self.radicand)
        };

        match (self.rational.is_zero(), self.coefficient.is_negative()) {
            (true, false) => write!(f, "{root}"),
            (true, true) => write!(f, "-{root}"),
            (false, false) => write!(f, "{} + {root}", self.rational),
            (false, true) => write!(f, "{} - {root}", self.rational),
        }
    }
}
