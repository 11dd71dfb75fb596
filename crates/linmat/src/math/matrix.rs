use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::{offset_for, Axis, LinalgError, Result};
use crate::math::scalar::{checked_scale, Scalar};
use crate::math::vector::{write_joined, Vector};

/// Fixed-shape numeric matrix with 1-based row and column indices.
///
/// Cells live in one row-major buffer. Row and column accessors hand out
/// independent [`Vector`] copies; writes go through [`Matrix::set_cell`],
/// [`Matrix::set_row`] and [`Matrix::set_column`].
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Build a matrix from nested rows.
    ///
    /// Fails with `InvalidArgument` when `data` has no rows and with
    /// `DimensionMismatch` when any row is not as long as the first one.
    pub fn new(data: Vec<Vec<T>>) -> Result<Self> {
        let cols = match data.first() {
            Some(first) => first.len(),
            None => {
                return Err(LinalgError::InvalidArgument(
                    "cannot construct a Matrix without rows".to_string(),
                ))
            }
        };
        if let Some(ragged) = data.iter().find(|row| row.len() != cols) {
            return Err(LinalgError::DimensionMismatch {
                context: "Matrix construction",
                expected: cols,
                found: ragged.len(),
            });
        }
        let rows = data.len();
        let data = data.into_iter().flatten().collect();
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix from a flat row-major buffer.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self> {
        let (rows, cols) = shape;
        if rows == 0 {
            return Err(LinalgError::InvalidArgument(
                "cannot construct a Matrix without rows".to_string(),
            ));
        }
        if data.len() != rows * cols {
            return Err(LinalgError::DimensionMismatch {
                context: "Matrix construction",
                expected: rows * cols,
                found: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn num_rows(&self) -> usize {
        self.rows
    }

    pub fn num_columns(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether `i` is a valid 1-based row index.
    pub fn has_row(&self, i: usize) -> bool {
        i >= 1 && i <= self.rows
    }

    /// Whether `j` is a valid 1-based column index.
    pub fn has_column(&self, j: usize) -> bool {
        j >= 1 && j <= self.cols
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Zero-based row view.
    pub(crate) fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub(crate) fn rows_iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |r| self.row_slice(r))
    }

    /// Rejects any write through the single-index accessor.
    ///
    /// Use [`Matrix::set_cell`], [`Matrix::set_row`] or [`Matrix::set_column`].
    pub fn set_at(&mut self, _i: usize, _row: Vector<T>) -> Result<()> {
        Err(LinalgError::UnsupportedOperation(
            "use set_cell(), set_row() or set_column() to change Matrix values",
        ))
    }
}

impl<T: Scalar> Matrix<T> {
    /// Zero-based column copy.
    pub(crate) fn column_values(&self, col: usize) -> Vec<T> {
        (0..self.rows).map(|r| self.data[self.offset(r, col)]).collect()
    }

    /// Row `i` as an independent vector.
    pub fn get_row(&self, i: usize) -> Result<Vector<T>> {
        let row = offset_for(Axis::Row, i, self.rows)?;
        Ok(Vector::new(self.row_slice(row).to_vec()))
    }

    /// Column `j` as an independent vector.
    pub fn get_column(&self, j: usize) -> Result<Vector<T>> {
        let col = offset_for(Axis::Column, j, self.cols)?;
        Ok(Vector::new(self.column_values(col)))
    }

    /// Single-index access: row `i` as a copy, same as [`Matrix::get_row`].
    pub fn at(&self, i: usize) -> Result<Vector<T>> {
        self.get_row(i)
    }

    pub fn get_cell(&self, i: usize, j: usize) -> Result<T> {
        let row = offset_for(Axis::Row, i, self.rows)?;
        let col = offset_for(Axis::Column, j, self.cols)?;
        Ok(self.data[self.offset(row, col)])
    }

    pub fn set_cell(&mut self, i: usize, j: usize, value: T) -> Result<()> {
        let row = offset_for(Axis::Row, i, self.rows)?;
        let col = offset_for(Axis::Column, j, self.cols)?;
        let offset = self.offset(row, col);
        self.data[offset] = value;
        Ok(())
    }

    /// Replace row `i`; `values` must hold exactly `num_columns()` entries.
    pub fn set_row(&mut self, i: usize, values: &[T]) -> Result<()> {
        let row = offset_for(Axis::Row, i, self.rows)?;
        if values.len() != self.cols {
            return Err(LinalgError::DimensionMismatch {
                context: "row replacement",
                expected: self.cols,
                found: values.len(),
            });
        }
        let start = self.offset(row, 0);
        self.data[start..start + self.cols].copy_from_slice(values);
        Ok(())
    }

    /// Replace column `j`; `values` must hold exactly `num_rows()` entries.
    pub fn set_column(&mut self, j: usize, values: &[T]) -> Result<()> {
        let col = offset_for(Axis::Column, j, self.cols)?;
        if values.len() != self.rows {
            return Err(LinalgError::DimensionMismatch {
                context: "column replacement",
                expected: self.rows,
                found: values.len(),
            });
        }
        for (row, &value) in values.iter().enumerate() {
            let offset = self.offset(row, col);
            self.data[offset] = value;
        }
        Ok(())
    }

    /// Multiply every cell by `a` in place.
    ///
    /// Fails with `Overflow`, leaving the matrix unchanged, when an integer
    /// cell does not fit the element type after scaling.
    pub fn scalar_multiply(&mut self, a: T) -> Result<()> {
        self.data = checked_scale(&self.data, a).ok_or(LinalgError::Overflow {
            context: "Matrix scalar multiplication",
        })?;
        Ok(())
    }

    /// Nested copy of the cells, one inner `Vec` per row.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows_iter().map(|row| row.to_vec()).collect()
    }

    /// Matrix product `self * rhs`.
    pub fn matmul(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        crate::math::multiply::pairwise_multiply(self.into(), rhs.into())
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows == 1 && self.cols == 1 {
            return write!(f, "{}", self.data[0]);
        }
        for row in self.rows_iter() {
            write_joined(f, row)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Serialize> Serialize for Matrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows_iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Matrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        Matrix::new(rows).map_err(de::Error::custom)
    }
}
