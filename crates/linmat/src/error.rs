use std::error::Error;
use std::fmt;

/// Axis an out-of-range index was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Element,
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Axis::Element => write!(f, "element"),
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Error type for vector and matrix operations.
#[derive(Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Operand shapes are incompatible.
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },
    /// 1-based index outside `[1, max]`.
    ///
    /// `max` is the largest index the failing operation accepts: the length
    /// for reads and overwrites, one past the length for `Vector::set`,
    /// which may append.
    OutOfRange { axis: Axis, index: usize, max: usize },
    /// Integer arithmetic overflowed the element type.
    Overflow { context: &'static str },
    InvalidArgument(String),
    UnsupportedOperation(&'static str),
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinalgError::DimensionMismatch {
                context,
                expected,
                found,
            } => write!(
                f,
                "{} failed because of mismatched dimensions: expected {}, found {}",
                context, expected, found
            ),
            LinalgError::OutOfRange { axis, index, max } => write!(
                f,
                "{} index {} out of range: indices begin at 1 and must not exceed {}",
                axis, index, max
            ),
            LinalgError::Overflow { context } => {
                write!(f, "{} overflowed the element type", context)
            }
            LinalgError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            LinalgError::UnsupportedOperation(msg) => write!(f, "unsupported operation: {}", msg),
        }
    }
}

impl Error for LinalgError {}

pub type Result<T> = std::result::Result<T, LinalgError>;

/// Map a 1-based index onto a zero-based offset, or fail when it falls
/// outside `[1, len]`.
pub(crate) fn offset_for(axis: Axis, index: usize, len: usize) -> Result<usize> {
    if index == 0 || index > len {
        return Err(LinalgError::OutOfRange {
            axis,
            index,
            max: len,
        });
    }
    Ok(index - 1)
}
