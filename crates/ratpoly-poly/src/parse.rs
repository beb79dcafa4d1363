//! Parsing polynomials from text.
//!
//! The accepted grammar is the one produced by `Display`: terms of the form
//! `R`, `R*x`, `R*x^N`, `x` or `x^N` joined by `+` and `-`, where `R` is a
//! rational and `N` a non-negative integer. `"NaN"` is the NaN polynomial.

use ratpoly_integers::{ParseRationalError, Rational};
use std::str::FromStr;
use thiserror::Error;

use crate::sparse::Polynomial;
use crate::term::Term;

/// Errors produced when parsing a polynomial from text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParsePolyError {
    /// The input was empty.
    #[error("empty polynomial")]
    Empty,

    /// A sign was not followed by a term; holds the byte offset.
    #[error("missing term at byte {0}")]
    MissingTerm(usize),

    /// A term did not match `R`, `R*x^N` or `x^N`.
    #[error("invalid term {0:?}")]
    InvalidTerm(String),

    /// An exponent was not a non-negative integer that fits in `u32`.
    #[error("invalid exponent {0:?}")]
    InvalidExponent(String),

    /// A coefficient failed to parse as a rational.
    #[error("invalid coefficient: {0}")]
    Coefficient(#[from] ParseRationalError),
}

impl FromStr for Polynomial {
    type Err = ParsePolyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParsePolyError::Empty);
        }
        if s == "NaN" {
            return Ok(Self::nan());
        }

        let mut result = Self::zero();
        for (negative, offset, text) in split_signed(s) {
            if text.is_empty() {
                return Err(ParsePolyError::MissingTerm(offset));
            }
            let term = parse_term(text)?;
            let term = if negative { term.negate() } else { term };
            result = result.add(&Self::from_term(term));
        }
        Ok(result)
    }
}

/// Splits `s` on `+` and `-`, yielding `(negative, byte offset, term text)`.
///
/// A sign at the very start applies to the first term; every other sign
/// closes the preceding term.
fn split_signed(s: &str) -> Vec<(bool, usize, &str)> {
    let mut terms = Vec::new();
    let mut negative = false;
    let mut start = 0;

    for (i, ch) in s.char_indices() {
        if ch == '+' || ch == '-' {
            if i > 0 {
                terms.push((negative, start, &s[start..i]));
            }
            negative = ch == '-';
            start = i + 1;
        }
    }
    terms.push((negative, start, &s[start..]));
    terms
}

/// Parses one unsigned term.
fn parse_term(text: &str) -> Result<Term, ParsePolyError> {
    let (coeff, var) = match text.split_once('*') {
        Some((coeff, var)) => (coeff.parse::<Rational>()?, Some(var)),
        None if text.starts_with('x') => (Rational::ONE, Some(text)),
        None => (text.parse::<Rational>()?, None),
    };

    let exponent = match var {
        None => 0,
        Some("x") => 1,
        Some(var) => match var.strip_prefix("x^") {
            Some(exponent) => parse_exponent(exponent)?,
            None => return Err(ParsePolyError::InvalidTerm(text.to_owned())),
        },
    };

    Ok(Term::new(coeff, exponent))
}

fn parse_exponent(text: &str) -> Result<u32, ParsePolyError> {
    let invalid = || ParsePolyError::InvalidExponent(text.to_owned());
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    text.parse().map_err(|_| invalid())
}
