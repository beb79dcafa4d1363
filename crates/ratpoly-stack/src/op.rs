//! Named stack operations.

use std::fmt;
use std::str::FromStr;

use crate::error::StackError;

/// An operation a driver can apply to a [`PolyStack`](crate::PolyStack).
///
/// Binary operations consume the top two polynomials `p1` (top) and `p2`
/// (next) and push one result; unary operations replace the top.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum StackOp {
    /// Push `p1 + p2`.
    Add,
    /// Push `p2 - p1`.
    Sub,
    /// Push `p1 * p2`.
    Mul,
    /// Push `p2 / p1` (truncating).
    Div,
    /// Replace the top with its antiderivative (constant 0).
    Integrate,
    /// Replace the top with its derivative.
    Differentiate,
    /// Duplicate the top.
    Dup,
    /// Exchange the top two.
    Swap,
    /// Discard the top.
    Pop,
    /// Remove everything.
    Clear,
}

impl StackOp {
    /// All operations, in display order.
    pub const ALL: [Self; 10] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Integrate,
        Self::Differentiate,
        Self::Dup,
        Self::Swap,
        Self::Pop,
        Self::Clear,
    ];

    /// The canonical token for this operation.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Integrate => "i",
            Self::Differentiate => "d",
            Self::Dup => "dup",
            Self::Swap => "swap",
            Self::Pop => "pop",
            Self::Clear => "clear",
        }
    }

    /// Minimum stack size the operation needs.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Swap => 2,
            Self::Integrate | Self::Differentiate | Self::Dup | Self::Pop => 1,
            Self::Clear => 0,
        }
    }
}

impl fmt::Display for StackOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StackOp {
    type Err = StackError;

    /// Parses a canonical token or one of the long aliases
    /// `add`, `sub`, `mul`, `div`, `integrate`, `differentiate`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s {
            "add" => Self::Add,
            "sub" => Self::Sub,
            "mul" => Self::Mul,
            "div" => Self::Div,
            "integrate" => Self::Integrate,
            "differentiate" => Self::Differentiate,
            _ => Self::ALL
                .into_iter()
                .find(|op| op.name() == s)
                .ok_or_else(|| StackError::UnknownOp(s.to_owned()))?,
        };
        Ok(op)
    }
}
