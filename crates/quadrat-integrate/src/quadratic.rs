//! The integrand `f(x) = ax² + bx + c`.

use num_traits::Zero;
use quadrat_integers::{Rational, RationalError};
use std::fmt;

use crate::operand::Operand;

/// Coefficients of `f(x) = ax² + bx + c` as supplied by the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadraticCoefficients {
    /// Coefficient of x².
    pub a: Operand,
    /// Coefficient of x.
    pub b: Operand,
    /// Constant term.
    pub c: Operand,
}

impl QuadraticCoefficients {
    /// Creates the polynomial `ax² + bx + c`.
    pub fn new(a: impl Into<Operand>, b: impl Into<Operand>, c: impl Into<Operand>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            c: c.into(),
        }
    }

    /// Exact form, available when all three coefficients are exact.
    pub fn exact(&self) -> Option<ExactQuadratic> {
        Some(ExactQuadratic {
            a: self.a.as_exact()?.clone(),
            b: self.b.as_exact()?.clone(),
            c: self.c.as_exact()?.clone(),
        })
    }

    /// The rational quadratic the operands encode, floats taken bit for bit.
    ///
    /// # Errors
    ///
    /// Fails with [`RationalError::NonFinite`] for NaN or infinite operands.
    pub fn widen(&self) -> Result<ExactQuadratic, RationalError> {
        Ok(ExactQuadratic {
            a: self.a.to_rational()?,
            b: self.b.to_rational()?,
            c: self.c.to_rational()?,
        })
    }

    /// Floating-point form.
    pub fn real(&self) -> RealQuadratic {
        RealQuadratic {
            a: self.a.to_f64(),
            b: self.b.to_f64(),
            c: self.c.to_f64(),
        }
    }
}

/// Renders as a polynomial, e.g. `x^2 - 1`, `-3x + 1/2`, `5`.
impl fmt::Display for QuadraticCoefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms = [(&self.a, "x^2"), (&self.b, "x"), (&self.c, "")];
        let mut first = true;

        for (coeff, power) in terms {
            if coeff.is_zero() {
                continue;
            }
            match (first, coeff.is_negative()) {
                (true, true) => write!(f, "-")?,
                (true, false) => {}
                (false, true) => write!(f, " - ")?,
                (false, false) => write!(f, " + ")?,
            }
            let magnitude = coeff.abs();
            if power.is_empty() || !magnitude.is_one() {
                write!(f, "{magnitude}")?;
            }
            write!(f, "{power}")?;
            first = false;
        }

        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}

/// A quadratic with exact rational coefficients.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExactQuadratic {
    /// Coefficient of x².
    pub a: Rational,
    /// Coefficient of x.
    pub b: Rational,
    /// Constant term.
    pub c: Rational,
}

impl ExactQuadratic {
    /// Evaluates `f(x)`.
    pub fn eval(&self, x: &Rational) -> Rational {
        (&self.a * x + &self.b) * x + &self.c
    }

    /// Discriminant `b² - 4ac`.
    pub fn discriminant(&self) -> Rational {
        self.b.pow(2) - Rational::from(4) * &self.a * &self.c
    }

    /// True when `a = b = 0`.
    pub fn is_constant(&self) -> bool {
        self.a.is_zero() && self.b.is_zero()
    }
}

/// A quadratic with floating-point coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RealQuadratic {
    /// Coefficient of x².
    pub a: f64,
    /// Coefficient of x.
    pub b: f64,
    /// Constant term.
    pub c: f64,
}

impl RealQuadratic {
    /// Evaluates `f(x)`.
    pub fn eval(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

}
