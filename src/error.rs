//! This module defines the error types raised by matrix construction, element access
//! and the algebraic operators.
//!
//! All failure conditions of the core live in a single crate-private enum,
//! [`MatrixErrorKind`], wrapped by the public [`MatrixError`]. Callers that need to
//! branch on the failure use [`MatrixError::category`], which maps every kind onto the
//! coarse [`ErrorCategory`] reported to users. Loader failures have their own type,
//! [`crate::utils::data_loader::LoadError`].
use thiserror::Error;

/// Represents all possible errors that can occur while building or combining matrices.
#[derive(Error, Debug, Clone)]
#[error(transparent)]
pub struct MatrixError(#[from] MatrixErrorKind);

/// Private enum containing the distinct kinds of errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum MatrixErrorKind {
    /// A coordinate passed to `get` or `set` lies outside the matrix.
    #[error("Index out of bounds: ({row}, {col}) is outside a {rows}x{cols} matrix.")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A key supplied at construction lies outside the declared dimensions.
    #[error("Element ({row}, {col}) lies outside the declared {rows}x{cols} dimensions.")]
    EntryOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// The operands of an algebraic operator have incompatible shapes.
    #[error(
        "Dimension mismatch for {operation}: left operand is {lhs_rows}x{lhs_cols}, right operand is {rhs_rows}x{rhs_cols}."
    )]
    DimensionMismatch {
        operation: &'static str,
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    /// A dense grid whose rows do not all have the same length.
    #[error("Ragged dense input: row {row} has {actual} columns, expected {expected}.")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// An entry of a sum, difference or product does not fit in an `i64`.
    #[error("Integer overflow while computing entry ({row}, {col}) during {operation}.")]
    Overflow {
        operation: &'static str,
        row: usize,
        col: usize,
    },
}

/// The coarse classification of a [`MatrixError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Operand or construction shapes are incompatible.
    Dimension,
    /// A coordinate outside the matrix was accessed.
    Index,
    /// Integer arithmetic overflowed.
    Overflow,
}

impl MatrixError {
    /// Returns the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self.0 {
            MatrixErrorKind::IndexOutOfBounds { .. } => ErrorCategory::Index,
            MatrixErrorKind::EntryOutOfBounds { .. }
            | MatrixErrorKind::DimensionMismatch { .. }
            | MatrixErrorKind::RaggedRows { .. } => ErrorCategory::Dimension,
            MatrixErrorKind::Overflow { .. } => ErrorCategory::Overflow,
        }
    }

    /// Shorthand for `self.category() == ErrorCategory::Dimension`.
    pub fn is_dimension_error(&self) -> bool {
        self.category() == ErrorCategory::Dimension
    }

    /// Shorthand for `self.category() == ErrorCategory::Index`.
    pub fn is_index_error(&self) -> bool {
        self.category() == ErrorCategory::Index
    }
}

// Two errors are equal when their kinds and payloads are.
impl PartialEq for MatrixError {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for MatrixError {}
