use std::fmt;
use std::iter::FromIterator;
use std::slice::Iter;

use serde::{Deserialize, Serialize};

use crate::error::{offset_for, Axis, LinalgError, Result};
use crate::math::scalar::{checked_scale, Scalar};

/// Fixed-length numeric vector with 1-based indexing.
///
/// Indices follow math convention: the first entry is `v.get(1)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector<T> {
    values: Vec<T>,
}

impl<T> Vector<T> {
    pub fn new(values: Vec<T>) -> Self {
        Self { values }
    }

    /// Number of entries. Same as [`Vector::len`].
    pub fn num_dimensions(&self) -> usize {
        self.values.len()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether `i` is a readable 1-based index.
    pub fn has_index(&self, i: usize) -> bool {
        i >= 1 && i <= self.values.len()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Append one entry past the current end.
    pub fn push(&mut self, value: T) {
        self.values.push(value);
    }
}

impl<T: Scalar> Vector<T> {
    /// Entry at 1-based index `i`.
    pub fn get(&self, i: usize) -> Result<T> {
        let idx = offset_for(Axis::Element, i, self.values.len())?;
        Ok(self.values[idx])
    }

    /// Overwrite entry `i`, or append when `i == len + 1`.
    ///
    /// The `OutOfRange` error reports `len + 1` as its bound, since that is
    /// the largest index `set` accepts.
    pub fn set(&mut self, i: usize, value: T) -> Result<()> {
        let len = self.values.len();
        if i == len + 1 {
            self.values.push(value);
            return Ok(());
        }
        if i == 0 || i > len + 1 {
            return Err(LinalgError::OutOfRange {
                axis: Axis::Element,
                index: i,
                max: len + 1,
            });
        }
        self.values[i - 1] = value;
        Ok(())
    }

    /// Copy of the underlying point.
    pub fn point(&self) -> Vec<T> {
        self.values.clone()
    }

    /// Euclidean length, `sqrt(sum(v_i^2))`.
    #[doc(alias = "length")]
    pub fn magnitude(&self) -> f64 {
        self.values
            .iter()
            .map(|v| {
                let x = v.as_f64();
                x * x
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Multiply every entry by `a` in place.
    ///
    /// Fails with `Overflow`, leaving the vector unchanged, when an integer
    /// entry does not fit the element type after scaling.
    pub fn scalar_multiply(&mut self, a: T) -> Result<()> {
        self.values = checked_scale(&self.values, a).ok_or(LinalgError::Overflow {
            context: "Vector scalar multiplication",
        })?;
        Ok(())
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Vector::new(value)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        value.values
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Writes `values` joined by `", "`. Shared with the matrix row formatter.
pub(crate) fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, values: &[T]) -> fmt::Result {
    for (idx, value) in values.iter().enumerate() {
        if idx > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", value)?;
    }
    Ok(())
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.values)
    }
}
