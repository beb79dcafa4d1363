//! # ratpoly-stack
//!
//! A stack machine that sequences polynomial operations, in the style of an
//! RPN calculator.
//!
//! This crate provides:
//! - `PolyStack`: a last-in-first-out sequence of polynomials with
//!   stack-oriented arithmetic and calculus
//! - `StackOp`: named operations for drivers that dispatch by token
//! - `StackError`: underflow and script errors
//!
//! ## Failure Semantics
//!
//! Every operation checks its minimum stack size before touching the stack,
//! so an underflow leaves the stack exactly as it was. Numeric failures such
//! as division by zero are not errors; they produce the NaN polynomial.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod op;
pub mod stack;

#[cfg(test)]
mod proptests;

pub use error::{Result, StackError};
pub use op::StackOp;
pub use stack::PolyStack;
