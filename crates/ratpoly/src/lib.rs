//! # ratpoly
//!
//! Exact arithmetic over single-variable polynomials with rational
//! coefficients, plus a stack machine for sequencing polynomial operations.
//!
//! ## Features
//!
//! - **Exact Rationals**: always-reduced fractions with a NaN value that
//!   absorbs every operation
//! - **Sparse Polynomials**: canonical, strictly descending term lists
//! - **Calculus**: differentiation, antiderivatives and definite integrals
//! - **Stack Calculator**: RPN-style sequencing of polynomial operations
//!
//! ## Quick Start
//!
//! ```rust
//! use ratpoly::prelude::*;
//!
//! let mut stack = PolyStack::new();
//! stack.push("x^2-1".parse().unwrap());
//! stack.push("x+1".parse().unwrap());
//! stack.div().unwrap();
//! assert_eq!(stack.pop().unwrap().to_string(), "x-1");
//!
//! let p: Polynomial = "3*x^2+1/2".parse().unwrap();
//! assert_eq!(p.differentiate().to_string(), "6*x");
//! assert_eq!(p.coeff(0), Rational::new(1, 2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use ratpoly_integers as integers;
pub use ratpoly_poly as poly;
pub use ratpoly_stack as stack;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use ratpoly_integers::{ParseRationalError, Rational};
    pub use ratpoly_poly::{ParsePolyError, Polynomial, Term};
    pub use ratpoly_stack::{PolyStack, StackError, StackOp};
}
