//! Formal differentiation and integration.

use num_traits::Zero;
use ratpoly_integers::Rational;

use crate::sparse::Polynomial;
use crate::term::Term;

impl Polynomial {
    /// Computes the formal derivative.
    ///
    /// Each term `a*x^b` with `b > 0` becomes `(a*b)*x^(b-1)`; constants
    /// vanish.
    #[must_use]
    pub fn differentiate(&self) -> Self {
        if self.is_nan() {
            return Self::nan();
        }

        let terms = self
            .terms()
            .iter()
            .filter(|t| t.exponent() > 0)
            .map(|t| Term::new(t.coeff() * Rational::from(t.exponent()), t.exponent() - 1))
            .collect();
        Self::from_sorted(terms)
    }

    /// Computes the antiderivative with the given constant of integration.
    ///
    /// Each term `a*x^b` becomes `a/(b+1)*x^(b+1)`. Returns NaN if `self` or
    /// `constant` is NaN.
    #[must_use]
    pub fn anti_differentiate(&self, constant: Rational) -> Self {
        if self.is_nan() || constant.is_nan() {
            return Self::nan();
        }

        let mut terms = Vec::with_capacity(self.len() + 1);
        for t in self.terms() {
            let Some(e) = t.exponent().checked_add(1) else {
                return Self::nan();
            };
            terms.push(Term::new(t.coeff() / Rational::from(e), e));
        }
        if !constant.is_zero() {
            terms.push(Term::new(constant, 0));
        }
        Self::from_sorted(terms)
    }

    /// Computes the definite integral from `lower` to `upper`.
    ///
    /// `lower` may exceed `upper`, giving a signed result. NaN integrates to
    /// [`f64::NAN`].
    #[must_use]
    pub fn integrate(&self, lower: f64, upper: f64) -> f64 {
        if self.is_nan() {
            return f64::NAN;
        }
        let antiderivative = self.anti_differentiate(Rational::ZERO);
        antiderivative.eval(upper) - antiderivative.eval(lower)
    }
}
