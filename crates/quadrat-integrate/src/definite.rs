//! Definite integrals and enclosed areas.
//!
//! Two modes are supported:
//!
//! - **Signed**: `F(x_end) - F(x_start)`. Area below the axis counts
//!   negative and reversing the bounds flips the sign.
//! - **Absolute area**: the interval is cut at every interior real root, each
//!   piece is integrated on its own and the magnitudes are summed. This is
//!   not `|F(x_end) - F(x_start)|`, which lets lobes above and below the axis
//!   cancel. The result does not depend on the direction of the bounds.
//!
//! All-exact requests are evaluated with rationals (and quadratic surds at
//! irrational roots). Any `f64` operand sends the request down the
//! floating-point path, and every value it reports is tagged approximate.

use log::{debug, trace};
use num_traits::Zero;
use quadrat_integers::{QuadraticSurd, Rational, Value};

use crate::antiderivative::Antiderivative;
use crate::error::IntegrateError;
use crate::operand::Operand;
use crate::options::IntegrationOptions;
use crate::partition::{partition, Segment};
use crate::quadratic::{ExactQuadratic, QuadraticCoefficients, RealQuadratic};
use crate::roots::{exact_roots, real_roots};

/// What to compute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntegrationMode {
    /// The signed definite integral.
    Signed,
    /// The total area between the curve and the x-axis.
    AbsoluteArea,
}

/// A single integration problem.
#[derive(Clone, Debug, PartialEq)]
pub struct IntegrationRequest {
    /// The integrand.
    pub coefficients: QuadraticCoefficients,
    /// Lower limit as written; may exceed `x_end`.
    pub x_start: Operand,
    /// Upper limit as written.
    pub x_end: Operand,
    /// Signed integral or total area.
    pub mode: IntegrationMode,
}

impl IntegrationRequest {
    /// Creates a request.
    pub fn new(
        coefficients: QuadraticCoefficients,
        x_start: impl Into<Operand>,
        x_end: impl Into<Operand>,
        mode: IntegrationMode,
    ) -> Self {
        Self {
            coefficients,
            x_start: x_start.into(),
            x_end: x_end.into(),
            mode,
        }
    }

    /// Shorthand for a [`IntegrationMode::Signed`] request.
    pub fn signed(
        coefficients: QuadraticCoefficients,
        x_start: impl Into<Operand>,
        x_end: impl Into<Operand>,
    ) -> Self {
        Self::new(coefficients, x_start, x_end, IntegrationMode::Signed)
    }

    /// Shorthand for an [`IntegrationMode::AbsoluteArea`] request.
    pub fn absolute_area(
        coefficients: QuadraticCoefficients,
        x_start: impl Into<Operand>,
        x_end: impl Into<Operand>,
    ) -> Self {
        Self::new(coefficients, x_start, x_end, IntegrationMode::AbsoluteArea)
    }

    /// True when the request will be evaluated exactly.
    pub fn is_exact(&self) -> bool {
        self.coefficients.exact().is_some() && self.x_start.is_exact() && self.x_end.is_exact()
    }

    /// Rejects NaN and infinite operands.
    ///
    /// The engine itself assumes finite input; callers taking numbers from
    /// users should run this first.
    pub fn validate(&self) -> Result<(), IntegrateError> {
        let fields = [
            ("a", &self.coefficients.a),
            ("b", &self.coefficients.b),
            ("c", &self.coefficients.c),
            ("x_start", &self.x_start),
            ("x_end", &self.x_end),
        ];
        match fields.into_iter().find(|(_, operand)| !operand.is_finite()) {
            Some((field, _)) => Err(IntegrateError::NonFiniteInput { field }),
            None => Ok(()),
        }
    }
}

/// One step of the computation, kept for display and auditing.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentTrace {
    /// The sub-interval. In signed mode this is `[x_start, x_end]` as given.
    pub segment: Segment<Value>,
    /// `F(segment.start)`.
    pub antiderivative_start: Value,
    /// `F(segment.end)`.
    pub antiderivative_end: Value,
    /// `F(end) - F(start)`.
    pub signed: Value,
    /// `|F(end) - F(start)|`.
    pub magnitude: Value,
}

/// The outcome of [`integrate`].
#[derive(Clone, Debug, PartialEq)]
pub struct IntegrationResult {
    /// The signed integral or the total area, depending on `mode`.
    pub value: Value,
    /// The mode that produced `value`.
    pub mode: IntegrationMode,
    /// Per-segment trace, ascending in absolute mode.
    pub segments: Vec<SegmentTrace>,
    /// Exact total when it involves a square root. `value` then holds its
    /// best rational approximation.
    pub closed_form: Option<QuadraticSurd>,
}

impl IntegrationResult {
    /// True when `value` is exact.
    pub fn is_exact(&self) -> bool {
        self.value.is_exact()
    }
}

/// Integrates with default [`IntegrationOptions`].
///
/// # Example
///
/// ```
/// use quadrat_integrate::{integrate, IntegrationRequest, QuadraticCoefficients};
///
/// let f = QuadraticCoefficients::new(1, 0, -1);
///
/// let signed = integrate(&IntegrationRequest::signed(f.clone(), -2, 2)).unwrap();
/// assert_eq!(signed.value.to_string(), "4/3");
///
/// let area = integrate(&IntegrationRequest::absolute_area(f, 2, -2)).unwrap();
/// assert_eq!(area.value.to_string(), "4");
/// ```
pub fn integrate(request: &IntegrationRequest) -> Result<IntegrationResult, IntegrateError> {
    integrate_with_options(request, &IntegrationOptions::default())
}

/// Integrates with explicit options.
///
/// # Errors
///
/// Fails on invalid options, and with [`IntegrateError::Rational`] when an
/// operand is NaN or infinite. Finite input of any magnitude succeeds.
pub fn integrate_with_options(
    request: &IntegrationRequest,
    options: &IntegrationOptions,
) -> Result<IntegrationResult, IntegrateError> {
    options.validate()?;

    let exact_bounds = request.x_start.as_exact().zip(request.x_end.as_exact());
    match (request.coefficients.exact(), exact_bounds) {
        (Some(f), Some((start, end))) => {
            debug!("integrating {} exactly over [{start}, {end}]", request.coefficients);
            ExactEngine::new(&f, options).run(start, end, request.mode)
        }
        _ => {
            debug!(
                "integrating {} in floating point over [{}, {}]",
                request.coefficients, request.x_start, request.x_end
            );
            RealEngine::new(&request.coefficients, options)?.run(
                request.x_start.to_rational()?,
                request.x_end.to_rational()?,
                request.mode,
            )
        }
    }
}

struct ExactEngine<'a> {
    f: &'a ExactQuadratic,
    big_f: Antiderivative,
    max_denominator: u64,
}

impl<'a> ExactEngine<'a> {
    fn new(f: &'a ExactQuadratic, options: &IntegrationOptions) -> Self {
        Self {
            f,
            big_f: Antiderivative::of(f),
            max_denominator: options.max_denominator,
        }
    }

    fn run(
        &self,
        start: &Rational,
        end: &Rational,
        mode: IntegrationMode,
    ) -> Result<IntegrationResult, IntegrateError> {
        match mode {
            IntegrationMode::Signed => Ok(self.signed(start, end)),
            IntegrationMode::AbsoluteArea => self.absolute_area(start, end),
        }
    }

    fn signed(&self, start: &Rational, end: &Rational) -> IntegrationResult {
        let f_start = self.big_f.eval(start);
        let f_end = self.big_f.eval(end);
        let signed = &f_end - &f_start;

        let trace = SegmentTrace {
            segment: Segment::new(Value::exact(start.clone()), Value::exact(end.clone())),
            antiderivative_start: Value::exact(f_start),
            antiderivative_end: Value::exact(f_end),
            signed: Value::exact(signed.clone()),
            magnitude: Value::exact(signed.abs()),
        };

        IntegrationResult {
            value: Value::exact(signed),
            mode: IntegrationMode::Signed,
            segments: vec![trace],
            closed_form: None,
        }
    }

    fn absolute_area(
        &self,
        start: &Rational,
        end: &Rational,
    ) -> Result<IntegrationResult, IntegrateError> {
        let (lower, upper) = if start <= end { (start, end) } else { (end, start) };

        let roots = exact_roots(self.f);
        debug!("{} distinct real root(s): {roots:?}", roots.count());

        let segments = partition(
            QuadraticSurd::from(lower.clone()),
            QuadraticSurd::from(upper.clone()),
            roots.into_vec(),
        );

        let mut total = QuadraticSurd::zero();
        let mut traces = Vec::with_capacity(segments.len());
        for segment in &segments {
            let f_start = self.big_f.eval_surd(&segment.start);
            let f_end = self.big_f.eval_surd(&segment.end);
            let signed = &f_end - &f_start;
            let magnitude = signed.abs();
            trace!(
                "segment [{}, {}]: {signed} -> {magnitude}",
                segment.start,
                segment.end
            );
            total = &total + &magnitude;

            traces.push(SegmentTrace {
                segment: self.values_of(segment)?,
                antiderivative_start: self.value_of(&f_start)?,
                antiderivative_end: self.value_of(&f_end)?,
                signed: self.value_of(&signed)?,
                magnitude: self.value_of(&magnitude)?,
            });
        }

        Ok(IntegrationResult {
            value: self.value_of(&total)?,
            mode: IntegrationMode::AbsoluteArea,
            segments: traces,
            closed_form: (!total.is_rational()).then_some(total),
        })
    }

    fn value_of(&self, surd: &QuadraticSurd) -> Result<Value, IntegrateError> {
        Ok(Value::from_surd(surd, self.max_denominator)?)
    }

    fn values_of(&self, segment: &Segment<QuadraticSurd>) -> Result<Segment<Value>, IntegrateError> {
        Ok(Segment::new(
            self.value_of(&segment.start)?,
            self.value_of(&segment.end)?,
        ))
    }
}

/// Floating-point inputs: roots are located in `f64` so the leading
/// coefficient tolerance applies, while the antiderivative is evaluated on
/// the exact rationals the floats encode. Every reported value is rounded
/// once, from that exact result.
struct RealEngine {
    f: RealQuadratic,
    big_f: Antiderivative,
    leading_tolerance: f64,
    max_denominator: u64,
}

impl RealEngine {
    fn new(
        coefficients: &QuadraticCoefficients,
        options: &IntegrationOptions,
    ) -> Result<Self, IntegrateError> {
        Ok(Self {
            f: coefficients.real(),
            big_f: Antiderivative::of(&coefficients.widen()?),
            leading_tolerance: options.leading_tolerance,
            max_denominator: options.max_denominator,
        })
    }

    fn run(
        &self,
        start: Rational,
        end: Rational,
        mode: IntegrationMode,
    ) -> Result<IntegrationResult, IntegrateError> {
        let segments = match mode {
            IntegrationMode::Signed => vec![Segment::new(start, end)],
            IntegrationMode::AbsoluteArea => {
                let (lower, upper) = if start <= end { (start, end) } else { (end, start) };
                let roots = real_roots(&self.f, self.leading_tolerance);
                debug!("{} distinct real root(s): {roots:?}", roots.count());
                // A root that overflowed cannot lie inside a finite interval.
                let roots = roots
                    .into_vec()
                    .into_iter()
                    .filter(|r| r.is_finite())
                    .map(Rational::from_f64_exact)
                    .collect::<Result<Vec<_>, _>>()?;
                partition(lower, upper, roots)
            }
        };

        let mut total = Rational::zero();
        let mut traces = Vec::with_capacity(segments.len());
        for segment in &segments {
            let f_start = self.big_f.eval(&segment.start);
            let f_end = self.big_f.eval(&segment.end);
            let signed = &f_end - &f_start;
            let magnitude = signed.abs();
            trace!(
                "segment [{}, {}]: {}",
                segment.start.to_f64(),
                segment.end.to_f64(),
                signed.to_f64()
            );

            total = match mode {
                IntegrationMode::Signed => total + &signed,
                IntegrationMode::AbsoluteArea => total + &magnitude,
            };

            traces.push(SegmentTrace {
                segment: Segment::new(self.value_of(&segment.start)?, self.value_of(&segment.end)?),
                antiderivative_start: self.value_of(&f_start)?,
                antiderivative_end: self.value_of(&f_end)?,
                signed: self.value_of(&signed)?,
                magnitude: self.value_of(&magnitude)?,
            });
        }

        Ok(IntegrationResult {
            value: self.value_of(&total)?,
            mode,
            segments: traces,
            closed_form: None,
        })
    }

    fn value_of(&self, x: &Rational) -> Result<Value, IntegrateError> {
        Ok(Value::from_rational_approx(x, self.max_denominator)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadrat_integers::RationalError;

    fn q(num: i64, den: i64) -> Rational {
        Rational::from_i64(num, den).unwrap()
    }

    fn poly(a: i64, b: i64, c: i64) -> QuadraticCoefficients {
        QuadraticCoefficients::new(a, b, c)
    }

    fn exact_value(result: &IntegrationResult) -> Rational {
        result.value.as_exact().cloned().expect("exact result")
    }

    fn segment_bounds(result: &IntegrationResult) -> Vec<(Rational, Rational)> {
        result
            .segments
            .iter()
            .map(|t| (t.segment.start.rational().clone(), t.segment.end.rational().clone()))
            .collect()
    }

    #[test]
    fn test_area_splits_at_both_roots() {
        let result = integrate(&IntegrationRequest::absolute_area(poly(1, 0, -1), -2, 2)).unwrap();

        assert_eq!(
            segment_bounds(&result),
            vec![(q(-2, 1), q(-1, 1)), (q(-1, 1), q(1, 1)), (q(1, 1), q(2, 1))]
        );
        let signed: Vec<Rational> = result
            .segments
            .iter()
            .map(|t| t.signed.rational().clone())
            .collect();
        assert_eq!(signed, vec![q(4, 3), q(-4, 3), q(4, 3)]);
        assert!(result.segments.iter().all(|t| t.magnitude.rational() == &q(4, 3)));
        assert_eq!(exact_value(&result), q(4, 1));
        assert!(result.closed_form.is_none());
    }

    #[test]
    fn test_signed_integral_cancels_lobes() {
        let result = integrate(&IntegrationRequest::signed(poly(1, 0, -1), -2, 2)).unwrap();
        assert_eq!(exact_value(&result), q(4, 3));

        let trace = &result.segments[0];
        assert_eq!(trace.antiderivative_end, Value::exact(q(2, 3)));
        assert_eq!(trace.antiderivative_start, Value::exact(q(-2, 3)));
    }

    #[test]
    fn test_constant_function_both_modes() {
        for mode in [IntegrationMode::Signed, IntegrationMode::AbsoluteArea] {
            let result = integrate(&IntegrationRequest::new(poly(0, 0, 5), 0, 3, mode)).unwrap();
            assert_eq!(exact_value(&result), q(15, 1));
            assert_eq!(result.segments.len(), 1);
        }
    }

    #[test]
    fn test_reversed_bounds() {
        let forward = integrate(&IntegrationRequest::absolute_area(poly(1, 0, -1), -2, 2)).unwrap();
        let backward = integrate(&IntegrationRequest::absolute_area(poly(1, 0, -1), 2, -2)).unwrap();
        assert_eq!(forward.value, backward.value);
        assert_eq!(segment_bounds(&forward), segment_bounds(&backward));

        let forward = integrate(&IntegrationRequest::signed(poly(1, 0, -1), -2, 2)).unwrap();
        let backward = integrate(&IntegrationRequest::signed(poly(1, 0, -1), 2, -2)).unwrap();
        assert_eq!(exact_value(&backward), -exact_value(&forward));
        // The trace keeps the caller's order in signed mode.
        assert_eq!(backward.segments[0].segment.start, Value::exact(q(2, 1)));
    }

    #[test]
    fn test_root_at_endpoint_adds_no_segment() {
        // x² - 1 on [1, 3]: the root at 1 is the boundary itself.
        let result = integrate(&IntegrationRequest::absolute_area(poly(1, 0, -1), 1, 3)).unwrap();
        assert_eq!(result.segments.len(), 1);
        // F(3) - F(1) = (9 - 3) - (1/3 - 1) = 20/3
        assert_eq!(exact_value(&result), q(20, 3));
    }

    #[test]
    fn test_linear_area() {
        // |x| on [-1, 2] = 1/2 + 2
        let result = integrate(&IntegrationRequest::absolute_area(poly(0, 1, 0), -1, 2)).unwrap();
        assert_eq!(result.segments.len(), 2);
        assert_eq!(exact_value(&result), q(5, 2));
    }

    #[test]
    fn test_zero_function() {
        let result = integrate(&IntegrationRequest::absolute_area(poly(0, 0, 0), -4, 9)).unwrap();
        assert_eq!(result.segments.len(), 1);
        assert_eq!(exact_value(&result), q(0, 1));
    }

    #[test]
    fn test_double_root_does_not_change_sign() {
        // (x - 1)² ≥ 0, so the area equals the signed integral.
        let f = poly(1, -2, 1);
        let area = integrate(&IntegrationRequest::absolute_area(f.clone(), 0, 3)).unwrap();
        let signed = integrate(&IntegrationRequest::signed(f, 0, 3)).unwrap();
        assert_eq!(area.segments.len(), 2);
        assert_eq!(exact_value(&area), exact_value(&signed));
        assert_eq!(exact_value(&area), q(3, 1));
    }

    #[test]
    fn test_rational_coefficients_and_bounds() {
        // ∫_{1/2}^{3/2} (x/2) dx = (9/16 - 1/16) / 2 = 1/2
        let f = QuadraticCoefficients::new(0, q(1, 2), 0);
        let result = integrate(&IntegrationRequest::signed(f, q(1, 2), q(3, 2))).unwrap();
        assert_eq!(exact_value(&result), q(1, 2));
    }

    #[test]
    fn test_irrational_roots_keep_closed_form() {
        // |x² - 2| on [-2, 2], cut at ±√2 and rounded once at the end.
        let result = integrate(&IntegrationRequest::absolute_area(poly(1, 0, -2), -2, 2)).unwrap();
        assert_eq!(result.segments.len(), 3);
        assert!(!result.is_exact());

        let closed = result.closed_form.clone().expect("surd total");
        assert_eq!(closed.radicand(), &q(2, 1));
        // Area = 16√2/3 - 8/3
        assert_eq!(closed.rational_part(), &q(-8, 3));
        assert_eq!(closed.surd_coefficient(), &q(16, 3));

        let expected = 16.0 * 2f64.sqrt() / 3.0 - 8.0 / 3.0;
        assert!((result.value.to_f64() - expected).abs() < 1e-12);
        assert!((result.value.rational().to_f64() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_float_path_is_approximate() {
        let f = QuadraticCoefficients::new(1.0, 0.0, -1.0);
        let result = integrate(&IntegrationRequest::absolute_area(f, -2.0, 2.0)).unwrap();
        assert!(!result.is_exact());
        assert_eq!(result.value.rational(), &q(4, 1));
        assert_eq!(result.segments.len(), 3);
    }

    #[test]
    fn test_mixed_operands_use_float_path() {
        let request = IntegrationRequest::signed(poly(1, 0, -1), -2, 2.0);
        assert!(!request.is_exact());
        let result = integrate(&request).unwrap();
        assert_eq!(result.value.rational(), &q(4, 3));
        assert!(!result.is_exact());
    }

    #[test]
    fn test_flat_parabola_tolerance() {
        // 0.001x² + x on [-1500, 10]: roots at -1000 and 0.
        let f = QuadraticCoefficients::new(1e-3, 1.0, 0.0);
        let request = IntegrationRequest::absolute_area(f, -1500.0, 10.0);

        let precise = integrate(&request).unwrap();
        assert_eq!(precise.segments.len(), 3);

        let loose = IntegrationOptions::default().with_leading_tolerance(1e-2);
        let misread = integrate_with_options(&request, &loose).unwrap();
        assert_eq!(misread.segments.len(), 2);
        assert_ne!(precise.value, misread.value);
    }

    fn ten_to_110() -> Rational {
        format!("1{}", "0".repeat(110)).parse().unwrap()
    }

    #[test]
    fn test_huge_bounds_with_irrational_root() {
        // |x² - 2| on [0, B]: F(x) = x³/3 - 2x, area = B³/3 - 2B + 8√2/3.
        let big = ten_to_110();
        let result =
            integrate(&IntegrationRequest::absolute_area(poly(1, 0, -2), 0, big.clone())).unwrap();
        assert_eq!(result.segments.len(), 2);
        assert!(!result.is_exact());

        let rational_part = big.pow(3) / Rational::from(3) - Rational::from(2) * &big;
        let closed = result.closed_form.clone().expect("surd total");
        assert_eq!(closed.rational_part(), &rational_part);
        assert_eq!(closed.surd_coefficient(), &q(8, 3));
        assert_eq!(closed.radicand(), &q(2, 1));

        // 8√2/3 ≈ 3.7712
        let tail = result.value.rational() - &rational_part;
        assert!(tail > q(377, 100) && tail < q(378, 100));
    }

    #[test]
    fn test_huge_bounds_with_rational_roots() {
        // |x² - 1| on [-B, B] = 2B³/3 - 2B + 8/3
        let big = ten_to_110();
        let result =
            integrate(&IntegrationRequest::absolute_area(poly(1, 0, -1), -big.clone(), big.clone()))
                .unwrap();
        let expected = q(2, 3) * big.pow(3) - q(2, 1) * &big + q(8, 3);
        assert_eq!(result.segments.len(), 3);
        assert_eq!(exact_value(&result), expected);
    }

    #[test]
    fn test_huge_float_bounds() {
        let x = Rational::from_f64_exact(1e110).unwrap();

        let f = QuadraticCoefficients::new(1.0, 0.0, 0.0);
        let signed = integrate(&IntegrationRequest::signed(f, 0.0, 1e110)).unwrap();
        assert!(!signed.is_exact());
        assert_eq!(signed.value.rational(), &(x.pow(3) / Rational::from(3)));

        let f = QuadraticCoefficients::new(1.0, 0.0, -1.0);
        let area = integrate(&IntegrationRequest::absolute_area(f, -1e110, 1e110)).unwrap();
        assert_eq!(area.segments.len(), 3);
        let expected = q(2, 3) * x.pow(3) - q(2, 1) * &x + q(8, 3);
        assert_eq!(area.value.rational(), &expected);
    }

    #[test]
    fn test_validate() {
        let request = IntegrationRequest::signed(poly(1, 0, 0), f64::NAN, 1);
        assert_eq!(
            request.validate(),
            Err(IntegrateError::NonFiniteInput { field: "x_start" })
        );
        assert!(IntegrationRequest::signed(poly(1, 0, 0), 0, 1).validate().is_ok());
    }

    #[test]
    fn test_non_finite_input_surfaces_as_error() {
        let request = IntegrationRequest::signed(poly(1, 0, 0), 0, f64::INFINITY);
        assert!(matches!(
            integrate(&request),
            Err(IntegrateError::Rational(RationalError::NonFinite(_)))
        ));
    }

    #[test]
    fn test_invalid_options() {
        let request = IntegrationRequest::signed(poly(1, 0, 0), 0, 1);
        let options = IntegrationOptions::default().with_max_denominator(0);
        assert!(integrate_with_options(&request, &options).is_err());
    }
}
