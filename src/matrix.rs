//! This module defines the core sparse storage type, [`SparseMatrix`].
//!
//! A sparse matrix stores only its non-zero entries, keyed by `(row, col)` coordinate.
//! Every cell that has no stored entry is implicitly zero. This gives two invariants
//! that every constructor and mutator in this module maintains:
//!
//! 1.  **In-bounds keys**: every stored key `(r, c)` satisfies `r < rows` and `c < cols`.
//! 2.  **No stored zeros**: a zero value is represented by the absence of a key, never by
//!     a stored `0`. Writing zero through [`SparseMatrix::set`] removes the entry.
//!
//! Because of (2), two matrices compare equal structurally exactly when their dense
//! forms are equal, so the derived [`PartialEq`] is the mathematical equality.
//!
//! The dimensions are fixed at construction. The algebraic operators live in
//! [`crate::algorithms`] and always allocate a fresh result.

use crate::error::{MatrixError, MatrixErrorKind};
use std::collections::BTreeMap;
use std::fmt;

/// A single stored entry of a [`SparseMatrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry {
    pub row: usize,
    pub col: usize,
    pub value: i64,
}

/// A dimensioned sparse integer matrix.
///
/// Entries are kept in an ordered map so that iteration, and therefore the text
/// rendering produced by [`fmt::Display`], is row-major and deterministic.
///
/// # Example
///
/// ```rust
/// use sparse_matrix::SparseMatrix;
///
/// let mut m = SparseMatrix::new(2, 3);
/// m.set(0, 2, 7)?;
/// m.set(1, 0, -1)?;
/// assert_eq!(m.get(0, 2)?, 7);
/// assert_eq!(m.get(1, 1)?, 0);
/// assert_eq!(m.to_dense(), vec![vec![0, 0, 7], vec![-1, 0, 0]]);
///
/// // Writing zero removes the stored entry.
/// m.set(0, 2, 0)?;
/// assert_eq!(m.nnz(), 1);
/// # Ok::<(), sparse_matrix::MatrixError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    elements: BTreeMap<(usize, usize), i64>,
}

impl SparseMatrix {
    /// Creates an empty `rows x cols` matrix. Every cell reads as zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            elements: BTreeMap::new(),
        }
    }

    /// Creates a matrix from already-parsed `((row, col), value)` pairs.
    ///
    /// Zero values are dropped and a repeated key keeps its last value, mirroring
    /// a sequence of [`SparseMatrix::set`] calls.
    ///
    /// # Errors
    /// Returns a dimension error if any key lies outside `[0, rows) x [0, cols)`.
    /// No partial matrix is produced in that case.
    pub fn from_entries<I>(rows: usize, cols: usize, entries: I) -> Result<Self, MatrixError>
    where
        I: IntoIterator<Item = ((usize, usize), i64)>,
    {
        let mut matrix = Self::new(rows, cols);
        for ((row, col), value) in entries {
            if row >= rows || col >= cols {
                return Err(MatrixErrorKind::EntryOutOfBounds {
                    row,
                    col,
                    rows,
                    cols,
                }
                .into());
            }
            matrix.store(row, col, value);
        }
        Ok(matrix)
    }

    /// Creates the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self {
            rows: n,
            cols: n,
            elements: (0..n).map(|i| ((i, i), 1)).collect(),
        }
    }

    /// Builds a `grid.len() x cols` sparse matrix from a dense row-major grid, the
    /// inverse of [`SparseMatrix::to_dense`].
    ///
    /// The column count is passed explicitly because a grid with no rows cannot carry it.
    ///
    /// # Errors
    /// Returns a dimension error if any row does not have exactly `cols` values.
    pub fn from_dense(cols: usize, grid: &[Vec<i64>]) -> Result<Self, MatrixError> {
        let mut matrix = Self::new(grid.len(), cols);
        for (i, row) in grid.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixErrorKind::RaggedRows {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                }
                .into());
            }
            for (j, &value) in row.iter().enumerate() {
                matrix.store(i, j, value);
            }
        }
        Ok(matrix)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of stored (non-zero) entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the matrix has no stored entries, i.e. it is a zero matrix.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Fraction of cells that hold a stored entry. A matrix with no cells has density 0.
    pub fn density(&self) -> f64 {
        // Computed in floating point; `rows * cols` may not fit in a usize.
        let cells = self.rows as f64 * self.cols as f64;
        if cells == 0.0 {
            0.0
        } else {
            self.nnz() as f64 / cells
        }
    }

    /// Returns `true` if `(row, col)` has a stored entry.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.elements.contains_key(&(row, col))
    }

    /// Returns the value at `(row, col)`, or zero if no entry is stored there.
    ///
    /// # Errors
    /// Returns an index error if `row >= rows` or `col >= cols`.
    pub fn get(&self, row: usize, col: usize) -> Result<i64, MatrixError> {
        self.check_index(row, col)?;
        Ok(self.value_at(row, col))
    }

    /// Writes `value` at `(row, col)`. Writing zero removes any stored entry.
    ///
    /// # Errors
    /// Returns an index error if `row >= rows` or `col >= cols`. The matrix is left
    /// untouched in that case.
    pub fn set(&mut self, row: usize, col: usize, value: i64) -> Result<(), MatrixError> {
        self.check_index(row, col)?;
        self.store(row, col, value);
        Ok(())
    }

    /// Iterates over the stored entries in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Entry> + '_ {
        self.elements
            .iter()
            .map(|(&(row, col), &value)| Entry { row, col, value })
    }

    /// Iterates over the stored entries of one row as `(col, value)` pairs, in column order.
    ///
    /// A row index past the end yields nothing.
    pub fn row_entries(&self, row: usize) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.elements
            .range((row, 0)..=(row, usize::MAX))
            .map(|(&(_, col), &value)| (col, value))
    }

    /// Materializes the full `rows x cols` grid, zeros included.
    pub fn to_dense(&self) -> Vec<Vec<i64>> {
        let mut dense = vec![vec![0; self.cols]; self.rows];
        for (&(i, j), &value) in &self.elements {
            dense[i][j] = value;
        }
        dense
    }

    /// Unchecked read used by the operators once bounds are known to hold.
    #[inline]
    pub(crate) fn value_at(&self, row: usize, col: usize) -> i64 {
        self.elements.get(&(row, col)).copied().unwrap_or(0)
    }

    /// Unchecked write that upholds the no-stored-zero invariant.
    #[inline]
    pub(crate) fn store(&mut self, row: usize, col: usize, value: i64) {
        debug_assert!(row < self.rows && col < self.cols);
        if value != 0 {
            self.elements.insert((row, col), value);
        } else {
            self.elements.remove(&(row, col));
        }
    }

    fn check_index(&self, row: usize, col: usize) -> Result<(), MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixErrorKind::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            }
            .into());
        }
        Ok(())
    }
}

/// Renders the matrix in the load format understood by
/// [`crate::utils::data_loader::parse`]:
///
/// ```text
/// rows=2
/// cols=2
/// (0,0,1)
/// (1,1,2)
/// ```
impl fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rows={}", self.rows)?;
        writeln!(f, "cols={}", self.cols)?;
        for entry in self.iter() {
            writeln!(f, "({},{},{})", entry.row, entry.col, entry.value)?;
        }
        Ok(())
    }
}
