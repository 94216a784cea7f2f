//! Element-wise addition and subtraction.
//!
//! Both operators share one routine, [`combine`], which walks the union of the two
//! sparsity patterns exactly once:
//!
//! - **First sweep**: every key stored in `lhs` is combined with the value `rhs` holds at
//!   the same coordinate (zero when absent).
//! - **Second sweep**: every key stored in `rhs` but not in `lhs` is combined with a zero
//!   left value.
//!
//! Keys present in both operands are fully handled by the first sweep, so the second
//! sweep skips them. A combined value of zero (for example `5 + -5`) is not stored.

use crate::{
    error::{MatrixError, MatrixErrorKind},
    matrix::SparseMatrix,
};

/// Computes `lhs + rhs`.
///
/// # Errors
/// Returns a dimension error unless both operands have the same shape, and an
/// overflow error if any entry of the sum does not fit in an `i64`.
pub fn add(lhs: &SparseMatrix, rhs: &SparseMatrix) -> Result<SparseMatrix, MatrixError> {
    combine(lhs, rhs, "addition", i64::checked_add)
}

/// Computes `lhs - rhs`.
///
/// # Errors
/// Returns a dimension error unless both operands have the same shape, and an
/// overflow error if any entry of the difference does not fit in an `i64`.
pub fn subtract(lhs: &SparseMatrix, rhs: &SparseMatrix) -> Result<SparseMatrix, MatrixError> {
    combine(lhs, rhs, "subtraction", i64::checked_sub)
}

fn combine(
    lhs: &SparseMatrix,
    rhs: &SparseMatrix,
    operation: &'static str,
    op: fn(i64, i64) -> Option<i64>,
) -> Result<SparseMatrix, MatrixError> {
    if lhs.shape() != rhs.shape() {
        return Err(MatrixErrorKind::DimensionMismatch {
            operation,
            lhs_rows: lhs.rows(),
            lhs_cols: lhs.cols(),
            rhs_rows: rhs.rows(),
            rhs_cols: rhs.cols(),
        }
        .into());
    }

    let mut result = SparseMatrix::new(lhs.rows(), lhs.cols());
    let apply = |row: usize, col: usize, a: i64, b: i64| {
        op(a, b).ok_or(MatrixErrorKind::Overflow {
            operation,
            row,
            col,
        })
    };

    for entry in lhs.iter() {
        let value = apply(
            entry.row,
            entry.col,
            entry.value,
            rhs.value_at(entry.row, entry.col),
        )?;
        result.store(entry.row, entry.col, value);
    }

    for entry in rhs.iter().filter(|e| !lhs.contains(e.row, e.col)) {
        let value = apply(entry.row, entry.col, 0, entry.value)?;
        result.store(entry.row, entry.col, value);
    }

    log::trace!(
        "{operation} of {}x{} operands produced {} stored entries",
        result.rows(),
        result.cols(),
        result.nnz()
    );
    Ok(result)
}
