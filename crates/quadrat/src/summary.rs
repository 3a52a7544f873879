//! Plain-text reports of an integration.

use quadrat_integers::Value;
use quadrat_integrate::{IntegrationMode, IntegrationRequest, IntegrationResult, SegmentTrace};

/// Renders the integrand, the per-segment trace and the final value.
///
/// ```
/// use quadrat::prelude::*;
/// use quadrat::summary::render;
///
/// let request = IntegrationRequest::signed(QuadraticCoefficients::new(1, 0, -1), -2, 2);
/// let result = integrate(&request).unwrap();
/// assert_eq!(
///     render(&request, &result),
///     "Signed integral of f(x) = x^2 - 1 from -2 to 2\n\
///      \x20 F(2) - F(-2) = 2/3 - (-2/3) = 4/3\n\
///      Result: 4/3"
/// );
/// ```
pub fn render(request: &IntegrationRequest, result: &IntegrationResult) -> String {
    let f = &request.coefficients;
    let mut lines = Vec::with_capacity(result.segments.len() + 3);

    match result.mode {
        IntegrationMode::Signed => {
            lines.push(format!(
                "Signed integral of f(x) = {f} from {} to {}",
                request.x_start, request.x_end
            ));
            lines.extend(result.segments.iter().map(|t| format!("  {}", difference(t))));
            lines.push(format!("Result: {}", result.value));
        }
        IntegrationMode::AbsoluteArea => {
            lines.push(format!(
                "Area between f(x) = {f} and the x-axis from {} to {}",
                request.x_start, request.x_end
            ));
            lines.extend(result.segments.iter().map(|t| {
                format!(
                    "  [{}, {}]: {}, area {}",
                    t.segment.start,
                    t.segment.end,
                    difference(t),
                    t.magnitude
                )
            }));
            lines.push(format!("Total area: {}", result.value));
        }
    }

    if let Some(closed_form) = &result.closed_form {
        lines.push(format!("Exact: {closed_form}"));
    }

    lines.join("\n")
}

/// `F(end) - F(start) = F_end - F_start = signed`
fn difference(trace: &SegmentTrace) -> String {
    format!(
        "F({}) - F({}) = {} - {} = {}",
        trace.segment.end,
        trace.segment.start,
        trace.antiderivative_end,
        parenthesized(&trace.antiderivative_start),
        trace.signed
    )
}

fn parenthesized(value: &Value) -> String {
    if value.rational().is_negative() {
        format!("({value})")
    } else {
        value.to_string()
    }
}
