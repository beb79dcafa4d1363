//! # ratpoly-poly
//!
//! Exact single-variable polynomial arithmetic over the rationals.
//!
//! This crate provides:
//! - Sparse polynomials in canonical form (`Polynomial`)
//! - Ring operations, truncating long division and formal calculus
//! - A text format that round-trips through `Display` and `FromStr`
//!
//! ## Representation
//!
//! Terms are kept in strictly descending exponent order with no zero
//! coefficients. Every operation rebuilds this invariant before returning.
//! Any NaN coefficient turns the whole polynomial into NaN, which then
//! absorbs every subsequent operation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod parse;
pub mod sparse;
pub mod term;

#[cfg(test)]
mod proptests;

pub use parse::ParsePolyError;
pub use sparse::Polynomial;
pub use term::Term;
