//! Fixed-width rational numbers with a not-a-number element.
//!
//! This module provides exact rational arithmetic for polynomial coefficients.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::num::ParseIntError;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use crate::integer::{self, Wide};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Repr {
    /// Reduced fraction, `denom > 0`.
    Finite { numer: i64, denom: i64 },
    NaN,
}

/// A rational number, or NaN.
///
/// Finite rationals are always stored in lowest terms with a positive
/// denominator, so structural equality is numeric equality. All NaN values
/// are the same value.
///
/// Ordering treats NaN as equal to itself and greater than every finite
/// rational.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational(Repr);

/// Errors produced when parsing a rational from text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseRationalError {
    /// The input was empty.
    #[error("empty rational")]
    Empty,

    /// A numerator or denominator was not a valid `i64`.
    #[error("invalid integer {text:?} in rational: {source}")]
    InvalidInteger {
        /// The offending text.
        text: String,
        /// The underlying integer parse failure.
        source: ParseIntError,
    },
}

impl Rational {
    /// Zero.
    pub const ZERO: Self = Self(Repr::Finite { numer: 0, denom: 1 });

    /// One.
    pub const ONE: Self = Self(Repr::Finite { numer: 1, denom: 1 });

    /// Not-a-number.
    pub const NAN: Self = Self(Repr::NaN);

    /// Creates a new rational `numer / denom`.
    ///
    /// A zero denominator produces NaN.
    #[must_use]
    pub fn new(numer: i64, denom: i64) -> Self {
        Self::from_wide(Wide::from(numer), Wide::from(denom))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub const fn from_integer(n: i64) -> Self {
        Self(Repr::Finite { numer: n, denom: 1 })
    }

    fn from_wide(numer: Wide, denom: Wide) -> Self {
        if denom == 0 {
            return Self::NAN;
        }
        match integer::reduce(numer, denom) {
            Some((numer, denom)) => Self(Repr::Finite { numer, denom }),
            None => {
                debug!(%numer, %denom, "rational out of i64 range, collapsing to NaN");
                Self::NAN
            }
        }
    }

    /// Returns true if this is NaN.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        matches!(self.0, Repr::NaN)
    }

    /// Returns true if this is strictly less than zero. NaN is not negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        *self < Self::ZERO
    }

    /// Returns true if this is strictly greater than zero. NaN is positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        *self > Self::ZERO
    }

    /// Returns true if this is a finite rational with denominator 1.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self.0, Repr::Finite { denom: 1, .. })
    }

    /// Returns the reduced numerator, or `None` for NaN.
    #[must_use]
    pub fn numer(&self) -> Option<i64> {
        match self.0 {
            Repr::Finite { numer, .. } => Some(numer),
            Repr::NaN => None,
        }
    }

    /// Returns the (positive) reduced denominator, or `None` for NaN.
    #[must_use]
    pub fn denom(&self) -> Option<i64> {
        match self.0 {
            Repr::Finite { denom, .. } => Some(denom),
            Repr::NaN => None,
        }
    }

    /// Approximates the value as a float. NaN maps to [`f64::NAN`].
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn approx(&self) -> f64 {
        match self.0 {
            Repr::Finite { numer, denom } => numer as f64 / denom as f64,
            Repr::NaN => f64::NAN,
        }
    }

    /// Returns the reciprocal (1/x). The reciprocal of zero is NaN.
    #[must_use]
    pub fn recip(&self) -> Self {
        Self::ONE / *self
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -*self
        } else {
            *self
        }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (Repr::NaN, Repr::NaN) => Ordering::Equal,
            (Repr::NaN, Repr::Finite { .. }) => Ordering::Greater,
            (Repr::Finite { .. }, Repr::NaN) => Ordering::Less,
            (Repr::Finite { numer: a, denom: b }, Repr::Finite { numer: c, denom: d }) => {
                // Denominators are positive, so the sign of a/b - c/d is the
                // sign of ad - cb.
                (Wide::from(a) * Wide::from(d)).cmp(&(Wide::from(c) * Wide::from(b)))
            }
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        matches!(self.0, Repr::Finite { numer: 0, .. })
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        *self == Self::ONE
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Repr::NaN => f.write_str("NaN"),
            Repr::Finite { numer, denom: 1 } => write!(f, "{numer}"),
            Repr::Finite { numer, denom } => write!(f, "{numer}/{denom}"),
        }
    }
}

fn parse_int(text: &str) -> Result<i64, ParseRationalError> {
    text.parse().map_err(|source| ParseRationalError::InvalidInteger {
        text: text.to_owned(),
        source,
    })
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    /// Parses `"NaN"`, `"N"` or `"N/M"`.
    ///
    /// `"N/0"` is accepted and produces NaN, like any zero denominator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseRationalError::Empty);
        }
        if s == "NaN" {
            return Ok(Self::NAN);
        }

        match s.split_once('/') {
            None => Ok(Self::from_integer(parse_int(s)?)),
            Some((numer, denom)) => Ok(Self::new(parse_int(numer)?, parse_int(denom)?)),
        }
    }
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self.0, rhs.0) {
            (Repr::Finite { numer: a, denom: b }, Repr::Finite { numer: c, denom: d }) => {
                let (a, b, c, d) = (Wide::from(a), Wide::from(b), Wide::from(c), Wide::from(d));
                Self::from_wide(a * d + c * b, b * d)
            }
            _ => Self::NAN,
        }
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        match (self.0, rhs.0) {
            (Repr::Finite { numer: a, denom: b }, Repr::Finite { numer: c, denom: d }) => {
                let (a, b, c, d) = (Wide::from(a), Wide::from(b), Wide::from(c), Wide::from(d));
                Self::from_wide(a * d - c * b, b * d)
            }
            _ => Self::NAN,
        }
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self.0, rhs.0) {
            (Repr::Finite { numer: a, denom: b }, Repr::Finite { numer: c, denom: d }) => {
                Self::from_wide(
                    Wide::from(a) * Wide::from(c),
                    Wide::from(b) * Wide::from(d),
                )
            }
            _ => Self::NAN,
        }
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        match (self.0, rhs.0) {
            // (a/b) / (c/d) = ad / bc; c = 0 gives a zero denominator.
            (Repr::Finite { numer: a, denom: b }, Repr::Finite { numer: c, denom: d }) => {
                Self::from_wide(
                    Wide::from(a) * Wide::from(d),
                    Wide::from(b) * Wide::from(c),
                )
            }
            _ => Self::NAN,
        }
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self.0 {
            Repr::Finite { numer, denom } => Self::from_wide(-Wide::from(numer), Wide::from(denom)),
            Repr::NaN => Self::NAN,
        }
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(i64::from(n))
    }
}

impl From<u32> for Rational {
    fn from(n: u32) -> Self {
        Self::from_integer(i64::from(n))
    }
}
