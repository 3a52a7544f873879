//! Antiderivative of a quadratic using the power rule.
//!
//! For f(x) = c + bx + ax², the antiderivative with zero constant term is:
//!
//! F(x) = cx + (b/2)x² + (a/3)x³

use num_traits::Zero;
use quadrat_integers::{QuadraticSurd, Rational};

use crate::quadratic::ExactQuadratic;

/// Exact antiderivative `F` of a quadratic, normalized so that `F(0) = 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Antiderivative {
    /// Coefficients in ascending powers: `[0, c, b/2, a/3]`.
    coeffs: [Rational; 4],
}

impl Antiderivative {
    /// Integrates `f` term by term.
    ///
    /// # Example
    ///
    /// ```
    /// use quadrat_integrate::{Antiderivative, QuadraticCoefficients};
    /// use quadrat_integers::Rational;
    ///
    /// // ∫(3x² + 2x + 1)dx = x³ + x² + x
    /// let f = QuadraticCoefficients::new(3, 2, 1).exact().unwrap();
    /// let big_f = Antiderivative::of(&f);
    /// assert_eq!(big_f.coeff(3), Rational::from(1));
    /// assert_eq!(big_f.eval(&Rational::from(2)), Rational::from(14));
    /// ```
    pub fn of(f: &ExactQuadratic) -> Self {
        let mut coeffs: [Rational; 4] = Default::default();

        // Each coefficient aₖ becomes aₖ/(k+1) at position k+1
        for (k, coeff) in [&f.c, &f.b, &f.a].into_iter().enumerate() {
            let divisor = Rational::from(k as i64 + 1);
            coeffs[k + 1] = coeff / &divisor;
        }

        Self { coeffs }
    }

    /// Coefficient of `x^power` (zero above degree 3).
    pub fn coeff(&self, power: usize) -> Rational {
        self.coeffs.get(power).cloned().unwrap_or_else(Rational::zero)
    }

    /// Evaluates `F(x)` by Horner's rule.
    pub fn eval(&self, x: &Rational) -> Rational {
        self.coeffs
            .iter()
            .rev()
            .fold(Rational::zero(), |acc, coeff| acc * x + coeff)
    }

    /// Evaluates `F(x)` at a quadratic surd, staying inside `Q(√k)`.
    pub fn eval_surd(&self, x: &QuadraticSurd) -> QuadraticSurd {
        self.coeffs.iter().rev().fold(QuadraticSurd::zero(), |acc, coeff| {
            &(&acc * x) + &QuadraticSurd::from(coeff.clone())
        })
    }

    /// `F(end) - F(start)`.
    pub fn definite(&self, start: &Rational, end: &Rational) -> Rational {
        self.eval(end) - self.eval(start)
    }

    /// Differentiates back to `[c, b, a]`.
    pub fn derivative(&self) -> [Rational; 3] {
        [
            self.coeffs[1].clone(),
            &self.coeffs[2] * &Rational::from(2),
            &self.coeffs[3] * &Rational::from(3),
        ]
    }
}
