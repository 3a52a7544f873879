//! Property-based tests for the integration engine.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;
    use quadrat_integers::Rational;

    use crate::{integrate, IntegrationMode, IntegrationRequest, QuadraticCoefficients};

    fn small_int() -> impl Strategy<Value = i64> {
        -20i64..=20i64
    }

    // Bounds with denominators up to 4 so roots can fall on either side.
    fn bound() -> impl Strategy<Value = Rational> {
        (-40i64..=40i64, 1i64..=4i64).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    fn coefficients() -> impl Strategy<Value = QuadraticCoefficients> {
        (small_int(), small_int(), small_int()).prop_map(|(a, b, c)| QuadraticCoefficients::new(a, b, c))
    }

    fn area(f: &QuadraticCoefficients, x1: &Rational, x2: &Rational) -> crate::IntegrationResult {
        integrate(&IntegrationRequest::absolute_area(f.clone(), x1.clone(), x2.clone())).unwrap()
    }

    fn signed(f: &QuadraticCoefficients, x1: &Rational, x2: &Rational) -> Rational {
        integrate(&IntegrationRequest::signed(f.clone(), x1.clone(), x2.clone()))
            .unwrap()
            .value
            .as_exact()
            .cloned()
            .unwrap()
    }

    proptest! {
        #[test]
        fn area_ignores_bound_direction(f in coefficients(), x1 in bound(), x2 in bound()) {
            let forward = area(&f, &x1, &x2);
            let backward = area(&f, &x2, &x1);
            prop_assert_eq!(forward.value, backward.value);
            prop_assert_eq!(forward.closed_form, backward.closed_form);
        }

        #[test]
        fn signed_integral_flips_with_bounds(f in coefficients(), x1 in bound(), x2 in bound()) {
            prop_assert_eq!(signed(&f, &x1, &x2), -signed(&f, &x2, &x1));
        }

        #[test]
        fn area_dominates_signed_integral(f in coefficients(), x1 in bound(), x2 in bound()) {
            let total = area(&f, &x1, &x2);
            let net = signed(&f, &x1, &x2).abs().to_f64();
            prop_assert!(total.value.to_f64() >= net - 1e-9);
        }

        #[test]
        fn single_segment_area_is_abs_signed(f in coefficients(), x1 in bound(), x2 in bound()) {
            let total = area(&f, &x1, &x2);
            if total.segments.len() == 1 {
                prop_assert_eq!(total.value.as_exact().cloned(), Some(signed(&f, &x1, &x2).abs()));
            }
        }

        #[test]
        fn constant_area_is_height_times_width(c in small_int(), x1 in bound(), x2 in bound()) {
            let f = QuadraticCoefficients::new(0, 0, c);
            let expected = (Rational::from(c) * (&x2 - &x1)).abs();
            prop_assert_eq!(area(&f, &x1, &x2).value.as_exact().cloned(), Some(expected));
        }

        #[test]
        fn segments_tile_the_interval(f in coefficients(), x1 in bound(), x2 in bound()) {
            let total = area(&f, &x1, &x2);
            let (lower, upper) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };

            let first = &total.segments[0];
            let last = &total.segments[total.segments.len() - 1];
            prop_assert_eq!(first.segment.start.rational(), &lower);
            prop_assert_eq!(last.segment.end.rational(), &upper);
            prop_assert!(total.segments.len() <= 3);

            for pair in total.segments.windows(2) {
                prop_assert_eq!(&pair[0].segment.end, &pair[1].segment.start);
                prop_assert!(pair[0].segment.start.to_f64() < pair[0].segment.end.to_f64());
            }
        }

        #[test]
        fn no_sign_change_within_a_segment(f in coefficients(), x1 in bound(), x2 in bound()) {
            let total = area(&f, &x1, &x2);
            let real = f.real();
            for trace in &total.segments {
                let (s, e) = (trace.segment.start.to_f64(), trace.segment.end.to_f64());
                let mid = real.eval(0.5 * (s + e));
                let signed = trace.signed.to_f64();
                if !signed.is_zero() && mid.abs() > 1e-9 {
                    prop_assert_eq!(mid.signum(), signed.signum());
                }
            }
        }

        #[test]
        fn float_path_agrees_with_exact_path(
            (a, b, c) in (small_int(), small_int(), small_int()),
            x1 in bound(),
            x2 in bound()
        ) {
            let exact = QuadraticCoefficients::new(a, b, c);
            let real = QuadraticCoefficients::new(a as f64, b as f64, c as f64);

            for mode in [IntegrationMode::Signed, IntegrationMode::AbsoluteArea] {
                let e = integrate(&IntegrationRequest::new(exact.clone(), x1.clone(), x2.clone(), mode)).unwrap();
                let r = integrate(&IntegrationRequest::new(real.clone(), x1.to_f64(), x2.to_f64(), mode)).unwrap();
                prop_assert!(!r.is_exact());
                let scale = e.value.to_f64().abs().max(1.0);
                prop_assert!((e.value.to_f64() - r.value.to_f64()).abs() <= 1e-9 * scale);
            }
        }
    }
}
