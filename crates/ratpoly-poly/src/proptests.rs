//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use ratpoly_integers::Rational;

    use crate::sparse::is_canonical;
    use crate::{Polynomial, Term};

    // Strategy for generating small rational coefficients
    fn small_coeff() -> impl Strategy<Value = Rational> {
        (-20i64..20i64, 1i64..6i64).prop_map(|(n, d)| Rational::new(n, d))
    }

    // Strategy for generating small polynomials (degree 0-5), terms in any order
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec((small_coeff(), 0u32..=5u32), 0..=5).prop_map(|terms| {
            Polynomial::from_terms(terms.into_iter().map(|(c, e)| Term::new(c, e)))
        })
    }

    // Strategy for generating non-zero polynomials
    fn nonzero_poly() -> impl Strategy<Value = Polynomial> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    fn canonical(p: &Polynomial) -> bool {
        p.is_nan() || is_canonical(p.terms())
    }

    proptest! {
        // Representation invariant

        #[test]
        fn ops_preserve_invariant(a in small_poly(), b in nonzero_poly()) {
            prop_assert!(canonical(&a));
            prop_assert!(canonical(&a.add(&b)));
            prop_assert!(canonical(&a.sub(&b)));
            prop_assert!(canonical(&a.mul(&b)));
            prop_assert!(canonical(&a.div(&b)));
            prop_assert!(canonical(&a.differentiate()));
            prop_assert!(canonical(&a.anti_differentiate(Rational::new(1, 3))));
        }

        #[test]
        fn text_round_trip(a in small_poly(), b in small_poly()) {
            let p = a.mul(&b).add(&a.differentiate());
            prop_assert_eq!(p.to_string().parse::<Polynomial>(), Ok(p));
        }

        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
            prop_assert!(a.sub(&a).is_zero());
        }

        #[test]
        fn poly_mul_identity(a in small_poly()) {
            let one = Polynomial::monomial(1, 0);
            prop_assert_eq!(a.mul(&one), a.clone());
            prop_assert_eq!(one.mul(&a), a);
        }

        // NaN absorption

        #[test]
        fn nan_absorbs(a in small_poly()) {
            let nan = Polynomial::nan();
            prop_assert!(a.add(&nan).is_nan());
            prop_assert!(nan.sub(&a).is_nan());
            prop_assert!(a.mul(&nan).is_nan());
            prop_assert!(a.div(&nan).is_nan());
            prop_assert!(nan.div(&a).is_nan());
            prop_assert!(a.div(&Polynomial::zero()).is_nan());
        }

        // Division

        #[test]
        fn division_identity(a in small_poly(), b in nonzero_poly()) {
            // a = q*b + r with deg(r) < deg(b) or r = 0
            let (q, r) = a.div_rem(&b);
            prop_assert_eq!(q.mul(&b).add(&r), a.clone());
            prop_assert!(r.is_zero() || r.degree() < b.degree());
            prop_assert!(q.degree() <= a.degree());
            prop_assert_eq!(a.div(&b), q);
        }

        #[test]
        fn exact_division(a in small_poly(), b in nonzero_poly()) {
            prop_assert_eq!(a.mul(&b).div(&b), a);
        }

        // Calculus

        #[test]
        fn derivative_inverts_antiderivative(a in small_poly(), c in small_coeff()) {
            prop_assert_eq!(a.anti_differentiate(c).differentiate(), a);
        }

        #[test]
        fn derivative_product_rule(a in small_poly(), b in small_poly()) {
            let left = a.mul(&b).differentiate();
            let right = a.differentiate().mul(&b).add(&a.mul(&b.differentiate()));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn eval_add(a in small_poly(), b in small_poly(), x in -3i32..3i32) {
            let x = f64::from(x);
            let sum = a.add(&b).eval(x);
            prop_assert!((sum - (a.eval(x) + b.eval(x))).abs() < 1e-6);
        }

        #[test]
        fn integrate_is_antisymmetric(a in small_poly(), lo in -3i32..3i32, hi in -3i32..3i32) {
            let (lo, hi) = (f64::from(lo), f64::from(hi));
            prop_assert!((a.integrate(lo, hi) + a.integrate(hi, lo)).abs() < 1e-6);
        }
    }
}
