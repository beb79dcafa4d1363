//! The polynomial stack.

use ratpoly_integers::Rational;
use ratpoly_poly::Polynomial;
use tracing::{debug, trace};

use crate::error::{Result, StackError};
use crate::op::StackOp;

/// A mutable last-in-first-out sequence of polynomials.
///
/// Position 0 is the top of the stack. Pushing and popping are O(1); the
/// stack is not meant for random access beyond [`peek`](Self::peek).
///
/// A stack is owned by a single driver; concurrent sessions each use their
/// own stack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolyStack {
    /// Elements, bottom first: the top is the last element.
    polys: Vec<Polynomial>,
}

impl PolyStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty stack with room for `capacity` polynomials.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            polys: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of polynomials on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polys.len()
    }

    /// Returns true if the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }

    /// Iterates from the top of the stack down.
    pub fn iter(&self) -> impl Iterator<Item = &Polynomial> {
        self.polys.iter().rev()
    }

    /// Returns the polynomial `index` positions from the top.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] if `index >= len()`.
    pub fn peek(&self, index: usize) -> Result<&Polynomial> {
        self.require("peek", index.saturating_add(1))?;
        Ok(&self.polys[self.polys.len() - 1 - index])
    }

    /// Pushes a polynomial onto the top.
    pub fn push(&mut self, p: Polynomial) {
        trace!(poly = %p, size = self.len() + 1, "push");
        self.polys.push(p);
    }

    /// Removes and returns the top polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] if the stack is empty.
    pub fn pop(&mut self) -> Result<Polynomial> {
        match self.polys.pop() {
            Some(p) => {
                trace!(poly = %p, size = self.len(), "pop");
                Ok(p)
            }
            None => Err(self.underflow("pop", 1)),
        }
    }

    /// Duplicates the top polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] if the stack is empty.
    pub fn dup(&mut self) -> Result<()> {
        self.require("dup", 1)?;
        let top = self.polys[self.polys.len() - 1].clone();
        debug!(op = "dup", size = self.len() + 1, "stack op");
        self.polys.push(top);
        Ok(())
    }

    /// Exchanges the top two polynomials.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] if fewer than two polynomials are on
    /// the stack.
    pub fn swap(&mut self) -> Result<()> {
        self.require("swap", 2)?;
        let n = self.polys.len();
        self.polys.swap(n - 1, n - 2);
        debug!(op = "swap", size = n, "stack op");
        Ok(())
    }

    /// Removes every polynomial.
    pub fn clear(&mut self) {
        debug!(op = "clear", dropped = self.len(), "stack op");
        self.polys.clear();
    }

    /// Replaces the top two polynomials `p1` (top) and `p2` with `p1 + p2`.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] if fewer than two polynomials are on
    /// the stack.
    pub fn add(&mut self) -> Result<()> {
        self.binary("add", |p1, p2| p1.add(p2))
    }

    /// Replaces the top two polynomials `p1` (top) and `p2` with `p2 - p1`.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] if fewer than two polynomials are on
    /// the stack.
    pub fn sub(&mut self) -> Result<()> {
        self.binary("sub", |p1, p2| p2.sub(p1))
    }

    /// Replaces the top two polynomials `p1` (top) and `p2` with `p1 * p2`.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] if fewer than two polynomials are on
    /// the stack.
    pub fn mul(&mut self) -> Result<()> {
        self.binary("mul", |p1, p2| p1.mul(p2))
    }

    /// Replaces the top two polynomials `p1` (top) and `p2` with the
    /// truncating quotient `p2 / p1`.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] if fewer than two polynomials are on
    /// the stack.
    pub fn div(&mut self) -> Result<()> {
        self.binary("div", |p1, p2| p2.div(p1))
    }

    /// Replaces the top polynomial with its antiderivative, constant 0.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] if the stack is empty.
    pub fn integrate(&mut self) -> Result<()> {
        self.unary("integrate", |p| p.anti_differentiate(Rational::ZERO))
    }

    /// Replaces the top polynomial with its derivative.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] if the stack is empty.
    pub fn differentiate(&mut self) -> Result<()> {
        self.unary("differentiate", Polynomial::differentiate)
    }

    /// Applies a named operation.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] if the stack is too small for `op`.
    pub fn apply(&mut self, op: StackOp) -> Result<()> {
        match op {
            StackOp::Add => self.add(),
            StackOp::Sub => self.sub(),
            StackOp::Mul => self.mul(),
            StackOp::Div => self.div(),
            StackOp::Integrate => self.integrate(),
            StackOp::Differentiate => self.differentiate(),
            StackOp::Dup => self.dup(),
            StackOp::Swap => self.swap(),
            StackOp::Pop => self.pop().map(drop),
            StackOp::Clear => {
                self.clear();
                Ok(())
            }
        }
    }

    /// Runs a whitespace-separated script.
    ///
    /// Each token is either an operation (see [`StackOp`]) or a polynomial
    /// to push, e.g. `"x+1 x-1 * d"`. Execution stops at the first failing
    /// token; tokens before it have already taken effect.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Parse`] for a token that is neither an
    /// operation nor a polynomial, or the error of the failing operation.
    pub fn run(&mut self, script: &str) -> Result<()> {
        for token in script.split_whitespace() {
            if let Ok(op) = token.parse::<StackOp>() {
                self.apply(op)?;
            } else {
                self.push(token.parse()?);
            }
        }
        Ok(())
    }

    fn require(&self, op: &'static str, required: usize) -> Result<()> {
        if self.len() < required {
            return Err(self.underflow(op, required));
        }
        Ok(())
    }

    fn underflow(&self, op: &'static str, required: usize) -> StackError {
        debug!(op, required, size = self.len(), "stack underflow");
        StackError::Underflow {
            op,
            required,
            size: self.len(),
        }
    }

    fn binary<F>(&mut self, op: &'static str, f: F) -> Result<()>
    where
        F: FnOnce(&Polynomial, &Polynomial) -> Polynomial,
    {
        self.require(op, 2)?;
        let operands = self.polys.split_off(self.polys.len() - 2);
        let (p2, p1) = (&operands[0], &operands[1]);
        let result = f(p1, p2);
        debug!(op, %p1, %p2, %result, "stack op");
        self.polys.push(result);
        Ok(())
    }

    fn unary<F>(&mut self, op: &'static str, f: F) -> Result<()>
    where
        F: FnOnce(&Polynomial) -> Polynomial,
    {
        self.require(op, 1)?;
        let n = self.polys.len();
        let result = f(&self.polys[n - 1]);
        debug!(op, operand = %self.polys[n - 1], %result, "stack op");
        self.polys[n - 1] = result;
        Ok(())
    }
}

impl Extend<Polynomial> for PolyStack {
    fn extend<I: IntoIterator<Item = Polynomial>>(&mut self, iter: I) {
        for p in iter {
            self.push(p);
        }
    }
}

impl FromIterator<Polynomial> for PolyStack {
    /// Pushes the polynomials in order, so the last one ends up on top.
    fn from_iter<I: IntoIterator<Item = Polynomial>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}
