//! Fixed-width integer helpers.
//!
//! Fraction arithmetic on two `i64` rationals is carried out in [`Wide`] so
//! cross-multiplication cannot overflow. Results are reduced there and then
//! narrowed back to `i64`.

use num_integer::Integer as _;

/// Working width for intermediate fraction arithmetic.
pub type Wide = i128;

/// Computes the greatest common divisor.
///
/// The result is never negative, and `gcd(0, d) = |d|` so that `0/d`
/// reduces to `0/1`.
#[must_use]
pub fn gcd(a: Wide, b: Wide) -> Wide {
    a.gcd(&b)
}

/// Reduces `numer / denom` to lowest terms with a positive denominator and
/// narrows both parts to `i64`.
///
/// Returns `None` if `denom` is zero or if the reduced fraction does not fit
/// in an `i64`.
#[must_use]
pub fn reduce(numer: Wide, denom: Wide) -> Option<(i64, i64)> {
    if denom == 0 {
        return None;
    }

    let g = gcd(numer, denom);
    let (mut n, mut d) = (numer / g, denom / g);
    if d < 0 {
        n = -n;
        d = -d;
    }

    Some((narrow(n)?, narrow(d)?))
}

/// Narrows a working integer back to `i64`.
#[must_use]
pub fn narrow(value: Wide) -> Option<i64> {
    i64::try_from(value).ok()
}
