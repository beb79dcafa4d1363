//! Polynomial algorithms built on the sparse representation.
//!
//! This module provides:
//! - Truncating long division
//! - Differentiation, anti-differentiation and definite integration

pub mod calculus;
pub mod division;
