//! Real roots of `ax² + bx + c`.
//!
//! Two solvers share one result type:
//!
//! - [`exact_roots`] works over the rationals. Irrational roots come back as
//!   quadratic surds `-b/2a ± √(D/4a²)`, so later comparisons and
//!   antiderivative evaluations stay exact. "Zero" means exactly zero.
//! - [`real_roots`] works in `f64`. A leading coefficient with
//!   `|a| <= leading_tolerance` is treated as zero and the linear branch is
//!   taken. The same tolerance guards `b` in that branch.
//!
//! The tolerance is a real trade-off: too loose and a genuinely flat parabola
//! loses its far root; too tight and rounding noise in `a` produces a root
//! near `-b/a`, far outside any realistic interval.

use log::trace;
use num_traits::Zero;
use quadrat_integers::{QuadraticSurd, Rational};

use crate::quadratic::{ExactQuadratic, RealQuadratic};

/// Classification of the real zero set of a polynomial of degree ≤ 2.
#[derive(Clone, Debug, PartialEq)]
pub enum RealRoots<T> {
    /// `a = b = 0`. A non-zero constant never crosses the axis; the zero
    /// polynomial vanishes everywhere, which is reported the same way since
    /// it contributes no sign change either.
    Constant,
    /// `a = 0`, `b ≠ 0`: the single root `-c/b`.
    Linear(T),
    /// Negative discriminant: no real roots.
    Complex,
    /// Zero discriminant: one root of multiplicity two.
    Double(T),
    /// Two distinct roots, in ascending order.
    Distinct(T, T),
}

impl<T> RealRoots<T> {
    /// The distinct real roots, ascending.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            RealRoots::Constant | RealRoots::Complex => Vec::new(),
            RealRoots::Linear(r) | RealRoots::Double(r) => vec![r],
            RealRoots::Distinct(r1, r2) => vec![r1, r2],
        }
    }

    /// Number of distinct real roots.
    pub fn count(&self) -> usize {
        match self {
            RealRoots::Constant | RealRoots::Complex => 0,
            RealRoots::Linear(_) | RealRoots::Double(_) => 1,
            RealRoots::Distinct(_, _) => 2,
        }
    }

    /// True when the polynomial was handled by the linear or constant branch.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, RealRoots::Constant | RealRoots::Linear(_))
    }
}

/// Exact real roots of a rational quadratic.
///
/// # Example
///
/// ```
/// use quadrat_integrate::{exact_roots, QuadraticCoefficients, RealRoots};
/// use quadrat_integers::{QuadraticSurd, Rational};
///
/// // x² - 2 = 0  =>  x = ±√2
/// let f = QuadraticCoefficients::new(1, 0, -2).exact().unwrap();
/// let root_two = QuadraticSurd::sqrt(Rational::from(2));
/// assert_eq!(exact_roots(&f), RealRoots::Distinct(-root_two.clone(), root_two));
/// ```
pub fn exact_roots(f: &ExactQuadratic) -> RealRoots<QuadraticSurd> {
    if f.a.is_zero() {
        if f.b.is_zero() {
            return RealRoots::Constant;
        }
        return RealRoots::Linear(QuadraticSurd::from(-(&f.c / &f.b)));
    }

    let discriminant = f.discriminant();
    if discriminant.is_negative() {
        return RealRoots::Complex;
    }

    let two_a = Rational::from(2) * &f.a;
    let vertex = QuadraticSurd::from(-(&f.b / &two_a));
    if discriminant.is_zero() {
        return RealRoots::Double(vertex);
    }

    // √D / |2a| = √(D / 4a²); the ± makes the sign of a irrelevant.
    let half_width = QuadraticSurd::sqrt(discriminant / two_a.pow(2));
    trace!("exact roots: {vertex} ± {half_width}");
    RealRoots::Distinct(&vertex - &half_width, &vertex + &half_width)
}

/// Floating-point real roots.
///
/// Uses `q = -(b + sign(b)·√D) / 2` with roots `q/a` and `c/q`, which avoids
/// the cancellation the textbook formula suffers when `b² ≫ 4ac`.
pub fn real_roots(f: &RealQuadratic, leading_tolerance: f64) -> RealRoots<f64> {
    if f.a.abs() <= leading_tolerance {
        if f.b.abs() <= leading_tolerance {
            return RealRoots::Constant;
        }
        return RealRoots::Linear(-f.c / f.b);
    }

    let discriminant = f.b * f.b - 4.0 * f.a * f.c;
    if discriminant < 0.0 {
        return RealRoots::Complex;
    }
    if discriminant == 0.0 {
        return RealRoots::Double(-f.b / (2.0 * f.a));
    }

    // f64::signum(0.0) is 1.0, so q ≠ 0 whenever D > 0.
    let q = -0.5 * (f.b + f.b.signum() * discriminant.sqrt());
    let (r1, r2) = (q / f.a, f.c / q);
    trace!("real roots: {r1}, {r2}");
    if r1 <= r2 {
        RealRoots::Distinct(r1, r2)
    } else {
        RealRoots::Distinct(r2, r1)
    }
}
