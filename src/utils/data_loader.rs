//! This module provides the loader for the plain-text matrix format.
//!
//! The format is line oriented:
//!
//! ```text
//! rows=3
//! cols=3
//! (0,0,1)
//! (2,1,-4)
//! ```
//!
//! The first two non-blank lines declare the dimensions; every further non-blank line
//! declares one entry as `row,col,value`, with optional parentheses. Indices are
//! zero-based. Any malformed line aborts the whole load, so a caller never receives a
//! partially populated matrix.

use crate::matrix::SparseMatrix;
use std::{fs, io, path::Path};
use thiserror::Error;

/// Represents all possible errors that can occur during loading and parsing.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Wraps a standard I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A `rows=` or `cols=` header line is absent.
    #[error("Format error: missing '{0}=<int>' header line.")]
    MissingHeader(&'static str),
    /// A header line does not have the form `<key>=<non-negative int>`.
    #[error("Format error on line {line_no}: expected '{key}=<int>', found '{line}'.")]
    MalformedHeader {
        line_no: usize,
        key: &'static str,
        line: String,
    },
    /// A data line is not three comma-separated integers.
    #[error("Format error on line {line_no}: expected '(row,col,value)', found '{line}'.")]
    MalformedEntry { line_no: usize, line: String },
    /// A data line names a coordinate outside the declared dimensions.
    #[error(
        "Format error on line {line_no}: element ({row}, {col}) is out of bounds for a {rows}x{cols} matrix."
    )]
    OutOfBounds {
        line_no: usize,
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },
}

impl LoadError {
    /// Returns `true` for every failure caused by the content of the input rather than
    /// by reading it.
    pub fn is_format_error(&self) -> bool {
        !matches!(self, LoadError::Io(_))
    }
}

/// Parses a matrix from its textual description.
///
/// # Errors
/// Returns a [`LoadError`] if a header is missing or malformed, if any data line is not
/// three integers, or if any coordinate is negative or out of range.
///
/// # Example
///
/// ```rust
/// use sparse_matrix::utils::data_loader::parse;
///
/// let m = parse("rows=2\ncols=2\n(0,1,5)\n\n1,0,-2\n")?;
/// assert_eq!(m.to_dense(), vec![vec![0, 5], vec![-2, 0]]);
/// # Ok::<(), sparse_matrix::utils::data_loader::LoadError>(())
/// ```
pub fn parse(text: &str) -> Result<SparseMatrix, LoadError> {
    // Keep 1-based line numbers for diagnostics while skipping blank lines.
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let rows = parse_header(lines.next(), "rows")?;
    let cols = parse_header(lines.next(), "cols")?;

    let mut matrix = SparseMatrix::new(rows, cols);
    let mut entry_lines = 0;
    for (line_no, line) in lines {
        let (row, col, value) = parse_entry(line_no, line)?;
        let in_bounds = usize::try_from(row)
            .ok()
            .zip(usize::try_from(col).ok())
            .filter(|&(r, c)| r < rows && c < cols);
        let Some(key) = in_bounds else {
            return Err(LoadError::OutOfBounds {
                line_no,
                row,
                col,
                rows,
                cols,
            });
        };
        // The key was bounds-checked above; later lines overwrite earlier ones.
        matrix.store(key.0, key.1, value);
        entry_lines += 1;
    }

    log::debug!(
        "parsed {rows}x{cols} matrix from {entry_lines} entry lines ({} stored)",
        matrix.nnz()
    );
    Ok(matrix)
}

/// Reads the file at `path` and parses it with [`parse`].
pub fn load_matrix(path: impl AsRef<Path>) -> Result<SparseMatrix, LoadError> {
    let path = path.as_ref();
    log::info!("Loading matrix from {path:?}");
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Parses a `<key>=<non-negative int>` line.
fn parse_header(line: Option<(usize, &str)>, key: &'static str) -> Result<usize, LoadError> {
    let (line_no, line) = line.ok_or(LoadError::MissingHeader(key))?;
    let malformed = || LoadError::MalformedHeader {
        line_no,
        key,
        line: line.to_string(),
    };

    let (name, value) = line.split_once('=').ok_or_else(malformed)?;
    if name.trim() != key {
        return Err(malformed());
    }
    value.trim().parse::<usize>().map_err(|_| malformed())
}

/// Parses a `(row,col,value)` line. Parentheses are optional.
fn parse_entry(line_no: usize, line: &str) -> Result<(i64, i64, i64), LoadError> {
    let malformed = || LoadError::MalformedEntry {
        line_no,
        line: line.to_string(),
    };

    let body = line.replace(['(', ')'], "");
    let fields = body
        .split(',')
        .map(|field| field.trim().parse::<i64>().map_err(|_| malformed()))
        .collect::<Result<Vec<_>, _>>()?;

    match fields[..] {
        [row, col, value] => Ok((row, col, value)),
        _ => Err(malformed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let m = parse("rows=2\ncols=3\n(0,0,1)\n(1,2,-7)\n").unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.to_dense(), vec![vec![1, 0, 0], vec![0, 0, -7]]);
    }

    #[test]
    fn test_blank_lines_and_whitespace_are_ignored() {
        let text = "\n  rows = 2 \n\n cols=2\n\n ( 1 , 1 , 3 ) \n\n";
        let m = parse(text).unwrap();
        assert_eq!(m.get(1, 1).unwrap(), 3);
    }

    #[test]
    fn test_header_only_is_zero_matrix() {
        let m = parse("rows=4\ncols=1\n").unwrap();
        assert_eq!(m.shape(), (4, 1));
        assert!(m.is_empty());
    }

    #[test]
    fn test_malformed_cols_header() {
        let err = parse("rows=2\ncolumns=2\n(0,0,1)\n").unwrap_err();
        assert!(err.is_format_error());
        assert!(matches!(
            err,
            LoadError::MalformedHeader {
                line_no: 2,
                key: "cols",
                ..
            }
        ));
    }

    #[test]
    fn test_non_integer_header() {
        assert!(matches!(
            parse("rows=two\ncols=2\n").unwrap_err(),
            LoadError::MalformedHeader { key: "rows", .. }
        ));
        assert!(matches!(
            parse("rows=-1\ncols=2\n").unwrap_err(),
            LoadError::MalformedHeader { key: "rows", .. }
        ));
        assert!(matches!(
            parse("rows 2\ncols=2\n").unwrap_err(),
            LoadError::MalformedHeader { key: "rows", .. }
        ));
    }

    #[test]
    fn test_missing_headers() {
        assert!(matches!(
            parse("").unwrap_err(),
            LoadError::MissingHeader("rows")
        ));
        assert!(matches!(
            parse("rows=1\n\n").unwrap_err(),
            LoadError::MissingHeader("cols")
        ));
    }

    #[test]
    fn test_out_of_bounds_entry() {
        let err = parse("rows=2\ncols=2\n(5,0,1)\n").unwrap_err();
        assert!(err.is_format_error());
        assert!(matches!(
            err,
            LoadError::OutOfBounds {
                line_no: 3,
                row: 5,
                col: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_last_row_and_column_are_the_bounds() {
        let m = parse("rows=2\ncols=2\n(1,1,9)\n").unwrap();
        assert_eq!(m.get(1, 1).unwrap(), 9);

        let err = parse("rows=2\ncols=2\n(1,1,9)\n(1,2,9)\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::OutOfBounds {
                line_no: 4,
                row: 1,
                col: 2,
                rows: 2,
                cols: 2,
            }
        ));
    }

    #[test]
    fn test_negative_index_is_rejected() {
        let err = parse("rows=2\ncols=2\n(-1,0,1)\n").unwrap_err();
        assert!(matches!(err, LoadError::OutOfBounds { row: -1, .. }));
    }

    #[test]
    fn test_malformed_entries() {
        for bad in ["(0,0)", "(0,0,1,2)", "(a,0,1)", "(0,0,1.5)", "0;0;1", "(,,)"] {
            let text = format!("rows=2\ncols=2\n{bad}\n");
            let err = parse(&text).unwrap_err();
            assert!(
                matches!(err, LoadError::MalformedEntry { line_no: 3, .. }),
                "expected malformed entry for {bad:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_zero_values_and_duplicates() {
        let m = parse("rows=2\ncols=2\n(0,0,0)\n(1,1,4)\n(1,1,6)\n").unwrap();
        assert!(!m.contains(0, 0));
        assert_eq!(m.get(1, 1).unwrap(), 6);
        assert_eq!(m.nnz(), 1);
    }

    #[test]
    fn test_display_output_parses_back() {
        let m = SparseMatrix::from_dense(2, &[vec![0, 3], vec![-9, 0], vec![0, 1]]).unwrap();
        assert_eq!(parse(&m.to_string()).unwrap(), m);
    }

    #[test]
    fn test_error_message_names_line() {
        let err = parse("rows=1\ncols=1\n\n(0,0,x)\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Format error on line 4: expected '(row,col,value)', found '(0,0,x)'."
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_matrix("this/path/does/not/exist.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
        assert!(!err.is_format_error());
    }
}
