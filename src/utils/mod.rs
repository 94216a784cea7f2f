//! Input/output helpers around the core matrix type.
//!
//! - **`data_loader`**: parses the plain-text matrix format (`rows=`, `cols=` headers
//!   followed by `(row,col,value)` lines) into a [`crate::SparseMatrix`], rejecting any
//!   malformed or out-of-range line.

pub mod data_loader;
