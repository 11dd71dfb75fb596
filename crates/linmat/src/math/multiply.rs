//! Dot products and chained matrix multiplication.
use std::borrow::Cow;

use crate::error::{LinalgError, Result};
use crate::math::matrix::Matrix;
use crate::math::scalar::{checked_dot, Scalar};
use crate::math::vector::Vector;

/// One factor of a product.
///
/// A vector on the left of a product acts as a `1×n` matrix, on the right as
/// an `n×1` matrix.
#[derive(Clone, Copy, Debug)]
pub enum Operand<'a, T> {
    Matrix(&'a Matrix<T>),
    Vector(&'a Vector<T>),
}

impl<'a, T> From<&'a Matrix<T>> for Operand<'a, T> {
    fn from(value: &'a Matrix<T>) -> Self {
        Operand::Matrix(value)
    }
}

impl<'a, T> From<&'a Vector<T>> for Operand<'a, T> {
    fn from(value: &'a Vector<T>) -> Self {
        Operand::Vector(value)
    }
}

impl<'a, T: Scalar> Operand<'a, T> {
    /// Shape when multiplied from the left.
    fn left_shape(&self) -> (usize, usize) {
        match self {
            Operand::Matrix(m) => m.shape(),
            Operand::Vector(v) => (1, v.num_dimensions()),
        }
    }

    /// Shape when multiplied from the right.
    fn right_shape(&self) -> (usize, usize) {
        match self {
            Operand::Matrix(m) => m.shape(),
            Operand::Vector(v) => (v.num_dimensions(), 1),
        }
    }

    /// Zero-based row of a left operand. A vector is its own row.
    fn row(&self, i: usize) -> &'a [T] {
        match *self {
            Operand::Matrix(m) => m.row_slice(i),
            Operand::Vector(v) => v.as_slice(),
        }
    }

    /// Zero-based column of a right operand. A vector is its own column.
    fn column(&self, j: usize) -> Cow<'a, [T]> {
        match *self {
            Operand::Matrix(m) => Cow::Owned(m.column_values(j)),
            Operand::Vector(v) => Cow::Borrowed(v.as_slice()),
        }
    }
}

fn dot_slices<T: Scalar>(lhs: &[T], rhs: &[T], context: &'static str) -> Result<T> {
    checked_dot(lhs, rhs).ok_or(LinalgError::Overflow { context })
}

/// Sum of elementwise products of two equal-length vectors.
///
/// Integer sums or products that overflow the element type fail with
/// `Overflow`.
pub fn dot_product<T: Scalar>(p: &Vector<T>, q: &Vector<T>) -> Result<T> {
    if p.num_dimensions() != q.num_dimensions() {
        return Err(LinalgError::DimensionMismatch {
            context: "Vector multiplication",
            expected: p.num_dimensions(),
            found: q.num_dimensions(),
        });
    }
    dot_slices(p.as_slice(), q.as_slice(), "Vector multiplication")
}

/// Product of exactly two operands.
///
/// With `a` of shape `m×n` and `b` of shape `p×q`, fails unless `n == p` and
/// otherwise returns the `m×q` matrix of row/column dot products. A cell
/// that overflows an integer element type fails with `Overflow`.
pub fn pairwise_multiply<T: Scalar>(a: Operand<'_, T>, b: Operand<'_, T>) -> Result<Matrix<T>> {
    let (m, n) = a.left_shape();
    let (p, q) = b.right_shape();
    if n != p {
        return Err(LinalgError::DimensionMismatch {
            context: "Matrix multiplication",
            expected: n,
            found: p,
        });
    }
    log::trace!("multiplying {}x{} by {}x{}", m, n, p, q);

    let columns: Vec<Cow<'_, [T]>> = (0..q).map(|j| b.column(j)).collect();
    let mut data = Vec::with_capacity(m * q);
    for i in 0..m {
        let row = a.row(i);
        for column in &columns {
            data.push(dot_slices(row, &**column, "Matrix multiplication")?);
        }
    }
    Matrix::from_shape_vec((m, q), data)
}

/// Product `M1 * M2 * ... * Mn`, evaluated left to right.
///
/// Needs at least two operands. Each intermediate product is a [`Matrix`],
/// so a vector only ever acts as a row/column operand where it was passed in.
pub fn multiply<T: Scalar>(operands: &[Operand<'_, T>]) -> Result<Matrix<T>> {
    let (first, rest) = match operands {
        [first, second, rest @ ..] => (pairwise_multiply(*first, *second)?, rest),
        _ => {
            return Err(LinalgError::InvalidArgument(format!(
                "multiplication needs at least two operands, got {}",
                operands.len()
            )))
        }
    };
    log::debug!("chained multiply over {} operands", operands.len());

    rest.iter().try_fold(first, |acc, operand| {
        pairwise_multiply(Operand::Matrix(&acc), *operand)
    })
}
