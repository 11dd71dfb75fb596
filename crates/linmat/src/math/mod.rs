//! 1-indexed vector and matrix types and the multiplication engine.
//!
//! Every public accessor takes mathematical (1-based) indices. Storage is a
//! zero-based contiguous buffer; the translation happens in private helpers
//! and is never exposed.
pub mod matrix;
pub mod multiply;
pub mod scalar;
pub mod vector;

pub use matrix::Matrix;
pub use multiply::{dot_product, multiply, pairwise_multiply, Operand};
pub use scalar::Scalar;
pub use vector::Vector;
