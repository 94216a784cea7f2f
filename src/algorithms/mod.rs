//! Algebraic operators over [`SparseMatrix`].
//!
//! ** NOTE: Most callers want the methods on [`SparseMatrix`] ([`SparseMatrix::add`],
//! [`SparseMatrix::subtract`], [`SparseMatrix::multiply`]) or the
//! [`crate::operations::Operation`] selector instead of these free functions.
//!
//! - [`elementwise`]: addition and subtraction, which combine two equally shaped
//!   matrices over the union of their sparsity patterns.
//! - [`multiply`]: the sparse-sparse product, which visits only the stored entries of
//!   the left operand and the stored rows of the right operand.
//!
//! Every operator borrows both operands, never mutates them, and returns a freshly
//! allocated result. Integer arithmetic is checked; overflow is reported as an error.

pub mod elementwise;
pub mod multiply;

pub use elementwise::{add, subtract};
pub use multiply::multiply;

use crate::{error::MatrixError, matrix::SparseMatrix};

impl SparseMatrix {
    /// Returns `self + other`. See [`elementwise::add`].
    pub fn add(&self, other: &SparseMatrix) -> Result<SparseMatrix, MatrixError> {
        add(self, other)
    }

    /// Returns `self - other`. See [`elementwise::subtract`].
    pub fn subtract(&self, other: &SparseMatrix) -> Result<SparseMatrix, MatrixError> {
        subtract(self, other)
    }

    /// Returns `self * other`. See [`multiply::multiply`].
    pub fn multiply(&self, other: &SparseMatrix) -> Result<SparseMatrix, MatrixError> {
        multiply(self, other)
    }
}
