//! # ratpoly-integers
//!
//! Exact rational arithmetic on native fixed-width integers for ratpoly.
//!
//! This crate provides:
//! - Rationals in canonical reduced form (`Rational`)
//! - A distinguished not-a-number element produced by division by zero
//! - Widened intermediate arithmetic helpers (`integer`)
//!
//! ## NaN Semantics
//!
//! NaN is absorbing under every arithmetic operation, equal to itself, and
//! strictly greater than every other rational. Arithmetic whose reduced result
//! does not fit in an `i64` also collapses to NaN rather than wrapping.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use rational::{ParseRationalError, Rational};
