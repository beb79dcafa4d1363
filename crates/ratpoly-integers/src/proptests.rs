//! Property-based tests for rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::integer::gcd;
    use crate::Rational;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    // Finite rationals and NaN, weighted towards finite values
    fn any_rational() -> impl Strategy<Value = Rational> {
        prop_oneof![
            9 => (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d)),
            1 => Just(Rational::NAN),
        ]
    }

    proptest! {
        // Canonical form

        #[test]
        fn make_is_lowest_terms(n in small_int(), d in non_zero_int()) {
            let r = Rational::new(n, d);
            let numer = r.numer().unwrap();
            let denom = r.denom().unwrap();
            prop_assert!(denom > 0);
            prop_assert_eq!(gcd(numer.into(), denom.into()), 1);
        }

        #[test]
        fn make_approximates_quotient(n in small_int(), d in non_zero_int()) {
            #[allow(clippy::cast_precision_loss)]
            let expected = n as f64 / d as f64;
            prop_assert!((Rational::new(n, d).approx() - expected).abs() < 1e-12);
        }

        #[test]
        fn text_round_trip(n in small_int(), d in non_zero_int()) {
            let r = Rational::new(n, d);
            prop_assert_eq!(r.to_string().parse::<Rational>(), Ok(r));
        }

        // NaN behaviour

        #[test]
        fn nan_absorbs(x in any_rational()) {
            let nan = Rational::NAN;
            prop_assert!((nan + x).is_nan());
            prop_assert!((x + nan).is_nan());
            prop_assert!((nan - x).is_nan());
            prop_assert!((x * nan).is_nan());
            prop_assert!((nan / x).is_nan());
            prop_assert!((x / nan).is_nan());
            prop_assert!((-nan).is_nan());
        }

        #[test]
        fn nan_is_maximal(x in any_rational()) {
            prop_assert!(Rational::NAN >= x);
            prop_assert_eq!(Rational::NAN == x, x.is_nan());
        }

        #[test]
        fn ordering_matches_approx(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::new(num_a, den_a);
            let b = Rational::new(num_b, den_b);
            prop_assert_eq!(a.cmp(&b), a.approx().partial_cmp(&b.approx()).unwrap());
        }

        // Rational field axioms

        #[test]
        fn rational_add_commutative(a in any_rational(), b in any_rational()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn rational_mul_commutative(a in any_rational(), b in any_rational()) {
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn rational_distributive(a in any_rational(), b in any_rational(), c in any_rational()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn rational_additive_inverse(a in any_rational()) {
            let sum = a + (-a);
            prop_assert_eq!(sum.is_zero(), !a.is_nan());
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::new(num, den);
            prop_assert!((a * a.recip()).is_one());
        }

        #[test]
        fn sub_is_add_negate(a in any_rational(), b in any_rational()) {
            prop_assert_eq!(a - b, a + (-b));
        }
    }
}
