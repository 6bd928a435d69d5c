//! Recursive block-order flattening of a square matrix.
//!
//! The matrix is split into four quadrants which are visited top-left, top-right, bottom-right,
//! bottom-left. Each quadrant is split again the same way until a 2x2 block remains, and that
//! block is emitted in the same corner order. Neighbouring cells therefore stay close together in
//! the output, which helps the run-length and Huffman stages that follow.
//!
//! The order of the matrix must be a power of two (2, 4, 8, ...).
use crate::error::CodecError;
use log::{debug, trace};

/// A square matrix of symbols, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    pub rows: Vec<Vec<T>>,
}

impl<T> Matrix<T> {
    pub fn new(rows: Vec<Vec<T>>) -> Self {
        Self { rows }
    }

    /// Number of rows. For a valid matrix this is also the number of columns.
    pub fn order(&self) -> usize {
        self.rows.len()
    }

    /// Check the shape: square, no ragged rows, order a power of two of at least 2.
    pub fn validate(&self) -> Result<(), CodecError> {
        let n = self.order();
        if let Some((i, row)) = self.rows.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(CodecError::InvalidShape {
                rows: n,
                detail: format!("row {} has {} columns, expected {}", i, row.len(), n),
            });
        }
        if n < 2 || !n.is_power_of_two() {
            return Err(CodecError::InvalidShape {
                rows: n,
                detail: "order must be a power of two and at least 2".to_string(),
            });
        }
        Ok(())
    }
}

impl<T> From<Vec<Vec<T>>> for Matrix<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        Matrix::new(rows)
    }
}

/// Flatten a matrix in recursive quadrant order. The result always holds order² symbols.
pub fn flatten<T: Clone>(matrix: &Matrix<T>) -> Result<Vec<T>, CodecError> {
    matrix.validate()?;
    let n = matrix.order();
    let mut out = Vec::with_capacity(n * n);
    flatten_block(&matrix.rows, 0, 0, n, &mut out);
    debug!("Flattened {}x{} matrix into {} symbols", n, n, out.len());
    Ok(out)
}

/// Walk one block whose top-left corner is (row, col).
fn flatten_block<T: Clone>(rows: &[Vec<T>], row: usize, col: usize, size: usize, out: &mut Vec<T>) {
    if size == 2 {
        trace!("2x2 block at ({}, {})", row, col);
        out.push(rows[row][col].clone());
        out.push(rows[row][col + 1].clone());
        out.push(rows[row + 1][col + 1].clone());
        out.push(rows[row + 1][col].clone());
        return;
    }
    let half = size / 2;
    flatten_block(rows, row, col, half, out);
    flatten_block(rows, row, col + half, half, out);
    flatten_block(rows, row + half, col + half, half, out);
    flatten_block(rows, row + half, col, half, out);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn flatten_2x2_test() {
        let m = Matrix::new(vec![vec!['a', 'b'], vec!['c', 'd']]);
        assert_eq!(flatten(&m).unwrap(), vec!['a', 'b', 'd', 'c']);
    }

    #[test]
    fn flatten_4x4_test() {
        let m = Matrix::new(vec![
            vec![1, 2, 3, 4],
            vec![5, 6, 7, 8],
            vec![9, 10, 11, 12],
            vec![13, 14, 15, 16],
        ]);
        assert_eq!(
            flatten(&m).unwrap(),
            vec![1, 2, 6, 5, 3, 4, 8, 7, 11, 12, 16, 15, 9, 10, 14, 13]
        );
    }

    #[test]
    fn flatten_length_test() {
        for n in [2_usize, 4, 8, 16] {
            let rows = (0..n).map(|r| (0..n).map(|c| r * n + c).collect()).collect();
            let flat = flatten(&Matrix::new(rows)).unwrap();
            assert_eq!(flat.len(), n * n);
            // Every cell appears exactly once
            let mut sorted = flat.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..n * n).collect::<Vec<usize>>());
        }
    }

    #[test]
    fn flatten_ragged_test() {
        let m = Matrix::new(vec![vec![1, 2], vec![3]]);
        assert!(matches!(flatten(&m), Err(CodecError::InvalidShape { .. })));
    }

    #[test]
    fn flatten_not_power_of_two_test() {
        let rows = (0..6).map(|_| vec![0_u8; 6]).collect();
        assert!(matches!(
            flatten(&Matrix::new(rows)),
            Err(CodecError::InvalidShape { rows: 6, .. })
        ));
    }

    #[test]
    fn flatten_too_small_test() {
        let empty: Matrix<u8> = Matrix::new(vec![]);
        assert!(flatten(&empty).is_err());
        assert!(flatten(&Matrix::new(vec![vec![7]])).is_err());
    }
}
