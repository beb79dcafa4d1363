//! Sparse univariate polynomials.
//!
//! This module provides the canonical sparse representation and the ring
//! operations on it. Division and calculus live in [`crate::algorithms`].

use num_traits::Zero;
use ratpoly_integers::Rational;
use std::cmp::Ordering;
use std::fmt;

use crate::term::Term;

/// The single-term view of the NaN polynomial.
static NAN_TERMS: [Term; 1] = [Term::new(Rational::NAN, 0)];

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
enum Repr {
    /// Non-zero, non-NaN coefficients in strictly descending exponent order.
    Terms(Vec<Term>),
    NaN,
}

/// A sparse univariate polynomial with rational coefficients, or NaN.
///
/// Terms are stored in strictly descending exponent order with no zero
/// coefficients, so the zero polynomial has no terms and structural equality
/// is polynomial equality. Every operation returns a new value.
///
/// A polynomial with any NaN coefficient is NaN; the NaN polynomial is a
/// distinct variant and absorbs every arithmetic operation.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Polynomial {
    repr: Repr,
}

impl Polynomial {
    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            repr: Repr::Terms(Vec::new()),
        }
    }

    /// Creates the NaN polynomial.
    #[must_use]
    pub fn nan() -> Self {
        Self { repr: Repr::NaN }
    }

    /// Creates a polynomial from a single term.
    ///
    /// A zero coefficient gives the zero polynomial, a NaN coefficient the
    /// NaN polynomial.
    #[must_use]
    pub fn from_term(term: Term) -> Self {
        if term.coeff().is_zero() {
            Self::zero()
        } else {
            Self::from_sorted(vec![term])
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: Rational) -> Self {
        Self::from_term(Term::new(c, 0))
    }

    /// Creates the monomial `c * x^e`.
    #[must_use]
    pub fn monomial(c: i64, e: u32) -> Self {
        Self::from_term(Term::new(Rational::from(c), e))
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::monomial(1, 1)
    }

    /// Builds a polynomial from terms in any order, combining like terms.
    #[must_use]
    pub fn from_terms<I: IntoIterator<Item = Term>>(terms: I) -> Self {
        let mut result = Vec::new();
        for term in terms {
            merge_insert(&mut result, term);
        }
        Self::from_sorted(result)
    }

    /// Wraps a term vector that is already sorted, duplicate-free and free of
    /// zero coefficients. Any NaN coefficient turns the result into NaN.
    pub(crate) fn from_sorted(terms: Vec<Term>) -> Self {
        if terms.iter().any(Term::is_nan) {
            return Self::nan();
        }
        debug_assert!(is_canonical(&terms), "non-canonical terms: {terms:?}");
        Self {
            repr: Repr::Terms(terms),
        }
    }

    /// Returns true if this is the NaN polynomial.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        matches!(self.repr, Repr::NaN)
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(&self.repr, Repr::Terms(terms) if terms.is_empty())
    }

    /// Returns the terms in descending exponent order.
    ///
    /// The NaN polynomial is viewed as the single term `NaN * x^0`.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        match &self.repr {
            Repr::Terms(terms) => terms,
            Repr::NaN => &NAN_TERMS,
        }
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms().len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_zero()
    }

    /// Returns the leading term, or `None` for the zero polynomial.
    #[must_use]
    pub fn leading_term(&self) -> Option<&Term> {
        self.terms().first()
    }

    /// Returns the degree: the largest exponent, or 0 for the zero
    /// polynomial. NaN has no degree.
    #[must_use]
    pub fn degree(&self) -> Option<u32> {
        match &self.repr {
            Repr::Terms(terms) => Some(terms.first().map_or(0, Term::exponent)),
            Repr::NaN => None,
        }
    }

    /// Returns the coefficient of `x^e`, zero if there is no such term.
    /// Every coefficient of NaN is NaN.
    #[must_use]
    pub fn coeff(&self, e: u32) -> Rational {
        match &self.repr {
            Repr::Terms(terms) => terms
                .binary_search_by(|t| e.cmp(&t.exponent()))
                .map_or(Rational::ZERO, |i| terms[i].coeff()),
            Repr::NaN => Rational::NAN,
        }
    }

    /// Evaluates the polynomial at a point.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        match &self.repr {
            Repr::Terms(terms) => terms.iter().map(|t| t.eval(x)).sum(),
            Repr::NaN => f64::NAN,
        }
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        match &self.repr {
            Repr::Terms(terms) => Self::from_sorted(terms.iter().map(Term::negate).collect()),
            Repr::NaN => Self::nan(),
        }
    }

    /// Adds two polynomials with a single linear merge of their terms.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let (Repr::Terms(a), Repr::Terms(b)) = (&self.repr, &other.repr) else {
            return Self::nan();
        };

        let mut result = Vec::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            match a[i].exponent().cmp(&b[j].exponent()) {
                Ordering::Greater => {
                    result.push(a[i]);
                    i += 1;
                }
                Ordering::Less => {
                    result.push(b[j]);
                    j += 1;
                }
                Ordering::Equal => {
                    let sum = a[i].coeff() + b[j].coeff();
                    if !sum.is_zero() {
                        result.push(Term::new(sum, a[i].exponent()));
                    }
                    i += 1;
                    j += 1;
                }
            }
        }
        result.extend_from_slice(&a[i..]);
        result.extend_from_slice(&b[j..]);

        Self::from_sorted(result)
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials (schoolbook algorithm).
    ///
    /// Each term of `self` scales and shifts a copy of `other`, and every
    /// resulting term is merged into the accumulator.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let (Repr::Terms(a), Repr::Terms(b)) = (&self.repr, &other.repr) else {
            return Self::nan();
        };

        let mut result = Vec::new();
        for t in a {
            let Some(partial) = mul_term(b, t) else {
                return Self::nan();
            };
            for term in partial {
                merge_insert(&mut result, term);
            }
        }

        Self::from_sorted(result)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: Rational) -> Self {
        match &self.repr {
            Repr::Terms(terms) => Self::from_sorted(scale(terms, c)),
            Repr::NaN => Self::nan(),
        }
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Rational> for Polynomial {
    fn from(c: Rational) -> Self {
        Self::constant(c)
    }
}

impl From<Term> for Polynomial {
    fn from(term: Term) -> Self {
        Self::from_term(term)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms = match &self.repr {
            Repr::NaN => return f.write_str("NaN"),
            Repr::Terms(terms) if terms.is_empty() => return f.write_str("0"),
            Repr::Terms(terms) => terms,
        };

        for (i, term) in terms.iter().enumerate() {
            // Negative terms carry their own sign.
            if i > 0 && term.coeff().is_positive() {
                f.write_str("+")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

/// Multiplies every coefficient by `k`. Scaling by zero yields no terms.
pub(crate) fn scale(terms: &[Term], k: Rational) -> Vec<Term> {
    if k.is_zero() {
        return Vec::new();
    }
    terms
        .iter()
        .map(|t| Term::new(t.coeff() * k, t.exponent()))
        .collect()
}

/// Adds `d` to every exponent. Returns `None` if an exponent overflows.
pub(crate) fn shift_exponent(terms: &[Term], d: u32) -> Option<Vec<Term>> {
    terms
        .iter()
        .map(|t| Some(Term::new(t.coeff(), t.exponent().checked_add(d)?)))
        .collect()
}

/// Multiplies `terms` by the single term `t`.
pub(crate) fn mul_term(terms: &[Term], t: &Term) -> Option<Vec<Term>> {
    Some(scale(&shift_exponent(terms, t.exponent())?, t.coeff()))
}

/// Inserts `term` into a canonical term vector, combining it with any term
/// of equal exponent and dropping the entry if the sum is zero.
pub(crate) fn merge_insert(terms: &mut Vec<Term>, term: Term) {
    if term.coeff().is_zero() {
        return;
    }
    match terms.binary_search_by(|t| term.exponent().cmp(&t.exponent())) {
        Ok(i) => {
            let sum = terms[i].coeff() + term.coeff();
            if sum.is_zero() {
                terms.remove(i);
            } else {
                terms[i] = Term::new(sum, term.exponent());
            }
        }
        Err(i) => terms.insert(i, term),
    }
}

/// Checks the representation invariant: no zero coefficients and strictly
/// descending exponents.
pub(crate) fn is_canonical(terms: &[Term]) -> bool {
    terms.iter().all(|t| !t.coeff().is_zero())
        && terms.windows(2).all(|w| w[0].exponent() > w[1].exponent())
}
