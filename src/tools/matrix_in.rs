//! Load a matrix from a plain text file, one row per line.
use std::fs;
use std::path::Path;

use log::info;

use super::block_flatten::Matrix;
use crate::error::CodecError;

/// How a line of text is split into cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMode {
    /// Whitespace separated tokens, e.g. `10 7 3 3`.
    Tokens,
    /// One character per cell, spaces ignored, e.g. `AB CD` is four cells.
    Chars,
}

/// Parse matrix text. Blank lines are skipped. The matrix must be square; the size policy is
/// left to [`flatten`](super::block_flatten::flatten).
pub fn parse_matrix(text: &str, mode: CellMode) -> Result<Matrix<String>, CodecError> {
    let rows = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match mode {
            CellMode::Tokens => line.split_whitespace().map(String::from).collect(),
            CellMode::Chars => line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(String::from)
                .collect(),
        })
        .collect::<Vec<Vec<String>>>();

    let n = rows.len();
    if let Some(row) = rows.iter().find(|row| row.len() != n) {
        return Err(CodecError::InvalidShape {
            rows: n,
            detail: format!("matrix is not square, found a row of {} cells", row.len()),
        });
    }
    Ok(Matrix::new(rows))
}

/// Read and parse a matrix file.
pub fn read_matrix<P: AsRef<Path>>(path: P, mode: CellMode) -> Result<Matrix<String>, CodecError> {
    let text = fs::read_to_string(path.as_ref())?;
    let matrix = parse_matrix(&text, mode)?;
    info!(
        "Loaded {}x{} matrix from {}",
        matrix.order(),
        matrix.order(),
        path.as_ref().display()
    );
    Ok(matrix)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_tokens_test() {
        let m = parse_matrix("1 2\n\n 10  4 \n", CellMode::Tokens).unwrap();
        assert_eq!(m.rows, vec![vec!["1", "2"], vec!["10", "4"]]);
    }

    #[test]
    fn parse_chars_test() {
        let m = parse_matrix("A B\nCD\n", CellMode::Chars).unwrap();
        assert_eq!(m.rows, vec![vec!["A", "B"], vec!["C", "D"]]);
    }

    #[test]
    fn parse_not_square_test() {
        assert!(matches!(
            parse_matrix("1 2 3\n4 5 6\n", CellMode::Tokens),
            Err(CodecError::InvalidShape { rows: 2, .. })
        ));
    }

    #[test]
    fn read_missing_file_test() {
        assert!(matches!(
            read_matrix("no/such/matrix.txt", CellMode::Tokens),
            Err(CodecError::Io(_))
        ));
    }
}
