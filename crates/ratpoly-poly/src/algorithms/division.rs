//! Truncating polynomial long division.
//!
//! Given `u` and `v != 0` there are unique `q`, `r` with `u = q*v + r` and
//! `deg(r) < deg(v)`. Division returns `q` only; the remainder is discarded.

use tracing::debug;

use crate::sparse::{merge_insert, mul_term, Polynomial};
use crate::term::Term;

impl Polynomial {
    /// Truncating division: the quotient of `self / divisor`.
    ///
    /// Returns NaN if either operand is NaN or `divisor` is zero, and zero if
    /// `self` is zero.
    ///
    /// For example `(x^3-2*x+3) / (3*x^2) = 1/3*x`, discarding the remainder
    /// `-2*x+3`, and `(x^2+2*x+15) / (2*x^3) = 0`.
    #[must_use]
    pub fn div(&self, divisor: &Self) -> Self {
        self.div_rem(divisor).0
    }

    /// Schoolbook long division returning `(quotient, remainder)`.
    pub(crate) fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        if self.is_nan() || divisor.is_nan() || divisor.is_zero() {
            return (Self::nan(), Self::nan());
        }
        if self.is_zero() {
            return (Self::zero(), Self::zero());
        }

        let d = divisor.terms();
        let (d_exp, d_coeff) = (d[0].exponent(), d[0].coeff());

        let mut quotient = Vec::new();
        let mut remainder = self.terms().to_vec();

        while let Some(&lead) = remainder.first() {
            if lead.exponent() < d_exp {
                break;
            }

            let step = Term::new(lead.coeff() / d_coeff, lead.exponent() - d_exp);
            let Some(product) = mul_term(d, &step) else {
                debug!(exponent = step.exponent(), "exponent overflow in division");
                return (Self::nan(), Self::nan());
            };
            merge_insert(&mut quotient, step);
            for term in product {
                merge_insert(&mut remainder, term.negate());
            }

            // The leading term cancels exactly unless a coefficient overflowed.
            if remainder
                .first()
                .is_some_and(|t| t.exponent() >= lead.exponent())
            {
                debug!(%lead, "leading term did not cancel, collapsing to NaN");
                return (Self::nan(), Self::nan());
            }
        }

        let remainder = Self::from_sorted(remainder);
        if remainder.is_nan() {
            return (Self::nan(), Self::nan());
        }
        (Self::from_sorted(quotient), remainder)
    }
}
