//! Sparse-sparse matrix multiplication.
//!
//! The product `R = A * B` is defined entry-wise by `R[i][k] = Σ_j A[i][j] * B[j][k]`.
//! A dense evaluation costs `O(rows(A) * cols(A) * cols(B))` regardless of how many
//! entries are actually non-zero. Here, only the terms with both factors non-zero are
//! ever touched:
//!
//! 1.  For every stored entry `(i, j) -> a` of `A` (row-major order), fetch the stored
//!     entries of row `j` of `B`. Rows are contiguous in the ordered key space, so this is
//!     a range query rather than a scan over all columns of `B`.
//! 2.  For every stored `(j, k) -> b`, add `a * b` into the accumulator for `(i, k)`.
//! 3.  Once row `i` of `A` is exhausted, flush its accumulator into the result, dropping
//!     any sums that cancelled to zero.
//!
//! Accumulation never crosses output rows, and integer addition is associative and
//! commutative, so the result does not depend on the visiting order. Partial sums are
//! kept exactly (see [`WideSum`]); only the final value of an entry has to fit in an
//! `i64`, so a large intermediate that later cancels is not an error.

use crate::{
    error::{MatrixError, MatrixErrorKind},
    matrix::SparseMatrix,
};
use std::collections::BTreeMap;

/// Computes `lhs * rhs`.
///
/// The result has shape `lhs.rows() x rhs.cols()`.
///
/// # Errors
/// Returns a dimension error if `lhs.cols() != rhs.rows()`, and an overflow error if
/// any entry of the exact product does not fit in an `i64`.
///
/// # Example
///
/// ```rust
/// use sparse_matrix::{SparseMatrix, algorithms::multiply};
///
/// let a = SparseMatrix::from_dense(2, &[vec![2, 3]])?;
/// let b = SparseMatrix::from_dense(1, &[vec![5], vec![7]])?;
/// assert_eq!(multiply(&a, &b)?.to_dense(), vec![vec![31]]);
/// # Ok::<(), sparse_matrix::MatrixError>(())
/// ```
pub fn multiply(lhs: &SparseMatrix, rhs: &SparseMatrix) -> Result<SparseMatrix, MatrixError> {
    if lhs.cols() != rhs.rows() {
        return Err(MatrixErrorKind::DimensionMismatch {
            operation: "multiplication",
            lhs_rows: lhs.rows(),
            lhs_cols: lhs.cols(),
            rhs_rows: rhs.rows(),
            rhs_cols: rhs.cols(),
        }
        .into());
    }

    let mut result = SparseMatrix::new(lhs.rows(), rhs.cols());
    // Partial sums for the output row currently being built, keyed by output column.
    let mut row_acc: BTreeMap<usize, WideSum> = BTreeMap::new();
    let mut current_row = None;

    for a in lhs.iter() {
        if current_row != Some(a.row) {
            if let Some(i) = current_row {
                flush_row(&mut result, i, &mut row_acc)?;
            }
            current_row = Some(a.row);
        }

        for (k, b) in rhs.row_entries(a.col) {
            // An i64 x i64 product always fits in an i128.
            let product = i128::from(a.value) * i128::from(b);
            row_acc.entry(k).or_default().add(product);
        }
    }
    if let Some(i) = current_row {
        flush_row(&mut result, i, &mut row_acc)?;
    }

    log::debug!(
        "multiplied {}x{} by {}x{}: {} stored entries (density {:.4})",
        lhs.rows(),
        lhs.cols(),
        rhs.rows(),
        rhs.cols(),
        result.nnz(),
        result.density()
    );
    Ok(result)
}

/// Moves one finished output row from the accumulator into `result`.
fn flush_row(
    result: &mut SparseMatrix,
    row: usize,
    row_acc: &mut BTreeMap<usize, WideSum>,
) -> Result<(), MatrixError> {
    for (col, sum) in std::mem::take(row_acc) {
        let value = sum.to_i64().ok_or(MatrixErrorKind::Overflow {
            operation: "multiplication",
            row,
            col,
        })?;
        // `store` drops the sums that cancelled to zero.
        result.store(row, col, value);
    }
    Ok(())
}

/// An exact running sum of `i128` terms.
///
/// The exact value is `low + wraps * 2^128`: `low` is the sum modulo 2^128 and `wraps`
/// counts how many times it wrapped, signed by direction. Wrapping addition is
/// associative, so the final value is independent of the order terms arrive in.
#[derive(Debug, Clone, Copy, Default)]
struct WideSum {
    low: i128,
    wraps: i64,
}

impl WideSum {
    fn add(&mut self, term: i128) {
        let (low, wrapped) = self.low.overflowing_add(term);
        if wrapped {
            self.wraps += if term > 0 { 1 } else { -1 };
        }
        self.low = low;
    }

    /// The exact sum, if it fits in an `i64`.
    fn to_i64(self) -> Option<i64> {
        // Any non-zero wrap count puts the magnitude at 2^127 or beyond.
        if self.wraps != 0 {
            return None;
        }
        i64::try_from(self.low).ok()
    }
}
