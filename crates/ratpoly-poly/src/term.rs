//! Polynomial terms.
//!
//! A term is a single monomial `c * x^e` with a rational coefficient.

use num_traits::One;
use ratpoly_integers::Rational;
use std::fmt;

/// A single monomial `coeff * x^exponent`.
///
/// Terms carry no invariant of their own; zero coefficients and ordering are
/// policed by [`Polynomial`](crate::Polynomial).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Term {
    coeff: Rational,
    exponent: u32,
}

impl Term {
    /// Creates the term `coeff * x^exponent`.
    #[must_use]
    pub const fn new(coeff: Rational, exponent: u32) -> Self {
        Self { coeff, exponent }
    }

    /// Returns the coefficient.
    #[must_use]
    pub fn coeff(&self) -> Rational {
        self.coeff
    }

    /// Returns the exponent.
    #[must_use]
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Returns true if the coefficient is NaN.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.coeff.is_nan()
    }

    /// Negates the coefficient. A NaN term stays NaN.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::new(-self.coeff, self.exponent)
    }

    /// Evaluates the term at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.coeff.approx() * x.powf(f64::from(self.exponent))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.coeff;
        if self.exponent == 0 {
            return write!(f, "{c}");
        }

        if c.is_one() {
            f.write_str("x")?;
        } else if (-c).is_one() {
            f.write_str("-x")?;
        } else {
            write!(f, "{c}*x")?;
        }

        if self.exponent > 1 {
            write!(f, "^{}", self.exponent)?;
        }
        Ok(())
    }
}
