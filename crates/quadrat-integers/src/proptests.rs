//! Property-based tests for exact arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, QuadraticSurd, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn q(num: i64, den: i64) -> Rational {
        Rational::from_i64(num, den).unwrap()
    }

    proptest! {
        // Normal form

        #[test]
        fn rational_reduction_is_idempotent(num in small_int(), den in non_zero_int()) {
            let once = q(num, den);
            let twice = Rational::new(once.numerator(), once.denominator()).unwrap();
            prop_assert_eq!(&once, &twice);
            prop_assert!(once.denominator().signum() > 0);
        }

        #[test]
        fn rational_is_in_lowest_terms(num in small_int(), den in non_zero_int()) {
            let r = q(num, den);
            if r.is_zero() {
                prop_assert!(r.denominator().is_one());
            } else {
                prop_assert!(r.numerator().gcd(&r.denominator()).is_one());
            }
        }

        #[test]
        fn rational_add_matches_manual_fraction(
            n1 in small_int(),
            d1 in non_zero_int(),
            n2 in small_int(),
            d2 in non_zero_int()
        ) {
            let sum = q(n1, d1) + q(n2, d2);
            let manual = q(n1 * d2 + n2 * d1, d1 * d2);
            prop_assert_eq!(sum, manual);
        }

        #[test]
        fn rational_display_has_no_negative_denominator(num in small_int(), den in non_zero_int()) {
            let shown = q(num, den).to_string();
            prop_assert!(!shown.contains("/-"));
            prop_assert_eq!(shown.parse::<Rational>().unwrap(), q(num, den));
        }

        // Field axioms

        #[test]
        fn rational_add_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = q(num_a, den_a);
            let b = q(num_b, den_b);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn rational_distributive(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = q(num_a, den_a);
            let b = q(num_b, den_b);
            let c = q(num_c, den_c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = q(num, den);
            let inv = a.recip().unwrap();
            prop_assert!((a * inv).is_one());
        }

        // Approximation

        #[test]
        fn approx_recovers_small_fractions(num in small_int(), den in 1i64..=1000i64) {
            // Distinct fractions with denominators ≤ 1000 are ≥ 1e-6 apart,
            // far more than f64 rounding moves them.
            #[allow(clippy::cast_precision_loss)]
            let value = num as f64 / den as f64;
            let approx = Rational::from_f64_approx(value, 1000).unwrap();
            prop_assert_eq!(approx, q(num, den));
        }

        #[test]
        fn approx_respects_bound(value in -1.0e6f64..1.0e6f64, bound in 1u64..100_000u64) {
            let approx = Rational::from_f64_approx(value, bound).unwrap();
            prop_assert!(approx.denominator() <= Integer::from(bound));
        }

        #[test]
        fn approx_is_at_least_as_close_as_rounding(value in -1.0e3f64..1.0e3f64, bound in 1u64..1000u64) {
            // Rounding to the nearest multiple of 1/bound is one admissible candidate.
            let approx = Rational::from_f64_approx(value, bound).unwrap();
            let exact = Rational::from_f64_exact(value).unwrap();
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            let rounded = q((value * bound as f64).round() as i64, i64::try_from(bound).unwrap());
            prop_assert!((&approx - &exact).abs() <= (&rounded - &exact).abs());
        }

        // Surds

        #[test]
        fn surd_signum_matches_float(p in small_int(), c in non_zero_int(), k in 2i64..50i64) {
            let s = QuadraticSurd::new(q(p, 7), q(c, 3), Rational::from(k));
            let approx = s.to_f64();
            if approx.abs() > 1e-9 {
                prop_assert_eq!(f64::from(s.signum()), approx.signum());
            }
        }

        #[test]
        fn surd_difference_of_squares(p in small_int(), c in non_zero_int(), k in 2i64..50i64) {
            // (p + c√k)(p - c√k) = p² - c²k
            let plus = QuadraticSurd::new(Rational::from(p), Rational::from(c), Rational::from(k));
            let minus = QuadraticSurd::new(Rational::from(p), Rational::from(-c), Rational::from(k));
            let expected = Rational::from(p * p - c * c * k);
            let product = &plus * &minus;
            prop_assert_eq!(product.as_rational(), Some(&expected));
        }
    }
}
