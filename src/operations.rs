//! This module provides the high-level entry point used by the calculator: a parsed
//! operator selector, [`Operation`], that dispatches to the algorithms in
//! [`crate::algorithms`].

use crate::{error::MatrixError, matrix::SparseMatrix};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// One of the three supported binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `x`
    Multiply,
}

/// Returned when an operator selector is not one of `+`, `-` or `x`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid operation: '{0}' (expected '+', '-' or 'x')")]
pub struct InvalidOperation(pub String);

impl Operation {
    /// Applies the operator to `lhs` and `rhs`, returning a freshly allocated result.
    ///
    /// # Errors
    /// Propagates the dimension and overflow errors of the underlying operator.
    pub fn apply(
        self,
        lhs: &SparseMatrix,
        rhs: &SparseMatrix,
    ) -> Result<SparseMatrix, MatrixError> {
        log::debug!(
            "applying {self} to {}x{} and {}x{}",
            lhs.rows(),
            lhs.cols(),
            rhs.rows(),
            rhs.cols()
        );
        match self {
            Operation::Add => lhs.add(rhs),
            Operation::Subtract => lhs.subtract(rhs),
            Operation::Multiply => lhs.multiply(rhs),
        }
    }

    /// The symbol accepted by [`FromStr`].
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "x",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Parses `+`, `-` or `x`. Case and surrounding whitespace are ignored.
impl FromStr for Operation {
    type Err = InvalidOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" => Ok(Operation::Add),
            "-" => Ok(Operation::Subtract),
            "x" => Ok(Operation::Multiply),
            _ => Err(InvalidOperation(s.trim().to_string())),
        }
    }
}
