//! Sparse integer matrices with element access, arithmetic and a small text format.
//!
//! A [`SparseMatrix`] stores only its non-zero entries, keyed by `(row, col)`. Cells
//! without a stored entry read as zero, and writing zero removes an entry, so the
//! storage never contains explicit zeros. Dimensions are fixed at construction.
//!
//! ## Operations
//!
//! - **Element access**: [`SparseMatrix::get`] and [`SparseMatrix::set`], both
//!   bounds-checked.
//! - **Addition / subtraction** ([`algorithms::elementwise`]): combine two matrices of
//!   equal shape over the union of their sparsity patterns.
//! - **Multiplication** ([`algorithms::multiply`]): a sparse-sparse product that only
//!   touches pairs of stored entries whose inner indices match, instead of sweeping the
//!   dense `rows x inner x cols` cube.
//! - **Dense conversion**: [`SparseMatrix::to_dense`] materializes the full grid for
//!   display.
//!
//! All operators borrow their operands and return a new matrix. Failures are reported
//! through [`MatrixError`], whose [`ErrorCategory`] distinguishes dimension, index and
//! overflow errors.
//!
//! ## Loading
//!
//! [`utils::data_loader::parse`] reads the text format
//!
//! ```text
//! rows=2
//! cols=2
//! (0,0,1)
//! (1,1,2)
//! ```
//!
//! and [`SparseMatrix`]'s `Display` implementation writes it back.
//!
//! ## Example Usage
//!
//! ```rust
//! use sparse_matrix::{Operation, utils::data_loader::parse};
//!
//! let a = parse("rows=2\ncols=2\n(0,0,1)\n(1,1,2)")?;
//! let b = parse("rows=2\ncols=2\n(0,0,3)\n(0,1,4)")?;
//!
//! let op: Operation = "+".parse()?;
//! let sum = op.apply(&a, &b)?;
//! assert_eq!(sum.to_dense(), vec![vec![4, 4], vec![0, 2]]);
//!
//! let a = parse("rows=1\ncols=2\n(0,0,2)\n(0,1,3)")?;
//! let b = parse("rows=2\ncols=1\n(0,0,5)\n(1,0,7)")?;
//! assert_eq!(a.multiply(&b)?.to_dense(), vec![vec![31]]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod algorithms;
pub mod error;
pub mod matrix;
pub mod operations;
pub mod utils;

pub use error::{ErrorCategory, MatrixError};
pub use matrix::{Entry, SparseMatrix};
pub use operations::{InvalidOperation, Operation};
